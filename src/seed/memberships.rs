use std::collections::{HashMap, HashSet};

use anyhow::{Context, Result, bail};
use bson::{Document, doc, oid::ObjectId};
use rand::Rng;
use rand::seq::SliceRandom;
use time::{Duration, OffsetDateTime};
use tracing::info;

use super::{bson_time, pick, weighted};
use crate::catalog::people::MEMBERSHIP_REMOVAL_REASONS;
use crate::core::{Stores, clear, documents, insert_batched};
use crate::models::{self, Membership};
use crate::plan::{MembershipVolume, SeedPlan};
use crate::refs::{self, CampaignRef, ClubRef, UserRef};
use crate::stats::{self, count_by, print_counts};

const ROLES: &[(&str, u32)] = &[("member", 80), ("organizer", 15), ("club_manager", 5)];
const STATUSES: &[(&str, u32)] = &[("active", 85), ("pending", 10), ("rejected", 3), ("removed", 2)];
const FIRST_MEMBER_ROLES: &[(&str, u32)] = &[("organizer", 7), ("member", 3)];

/// Sampled members for one club, with its manager guaranteed a seat.
fn roster<'u, R: Rng + ?Sized>(
	rng: &mut R,
	users: &'u [UserRef],
	manager: Option<&'u UserRef>,
	volume: &MembershipVolume,
) -> Vec<&'u UserRef> {
	let upper = volume.max_per_club.min(users.len());
	let lower = volume.min_per_club.min(upper);
	let size = rng.gen_range(lower..=upper);
	let mut picked: Vec<&UserRef> = users.choose_multiple(rng, size).collect();

	if let Some(manager) = manager {
		if !picked.iter().any(|u| u.id == manager.id) {
			if picked.len() < volume.max_per_club {
				picked.push(manager);
			} else if let Some(last) = picked.last_mut() {
				*last = manager;
			}
		}
	}
	picked
}

pub fn generate_memberships<R: Rng + ?Sized>(
	rng: &mut R,
	users: &[UserRef],
	clubs: &[ClubRef],
	campaigns: &[CampaignRef],
	volume: &MembershipVolume,
	now: OffsetDateTime,
) -> Result<Vec<Membership>> {
	if users.is_empty() {
		bail!("No users found. Please seed users first.");
	}
	if clubs.is_empty() {
		bail!("No clubs found. Please seed clubs first.");
	}

	let mut campaigns_by_club: HashMap<ObjectId, Vec<ObjectId>> = HashMap::new();
	for campaign in campaigns {
		campaigns_by_club.entry(campaign.club_id).or_default().push(campaign.id);
	}

	let mut seen: HashSet<(ObjectId, &str)> = HashSet::new();
	let mut memberships = Vec::new();

	for club in clubs {
		let manager_id = club.manager_id();
		let manager = manager_id.and_then(|id| users.iter().find(|u| u.id == id));

		for (i, user) in roster(rng, users, manager, volume).into_iter().enumerate() {
			if !seen.insert((club.id, user.id.as_str())) {
				continue;
			}

			let (role, status) = if Some(user.id.as_str()) == manager_id {
				("club_manager", "active")
			} else if i == 0 {
				(weighted(rng, FIRST_MEMBER_ROLES).unwrap_or("member"), "active")
			} else {
				(
					weighted(rng, ROLES).unwrap_or("member"),
					weighted(rng, STATUSES).unwrap_or("active"),
				)
			};

			let joined_at = now - Duration::days(rng.gen_range(1..=365));
			let campaign_id = campaigns_by_club
				.get(&club.id)
				.and_then(|ids| ids.choose(rng))
				.copied();

			let mut membership = Membership {
				id: ObjectId::new(),
				club_id: club.id,
				user_id: user.id.clone(),
				user_email: user.email.clone(),
				user_full_name: user.full_name.clone(),
				campaign_id,
				role: role.to_string(),
				status: status.to_string(),
				application_message: format!(
					"Tôi muốn tham gia {} để học hỏi và đóng góp cho cộng đồng.",
					club.name
				),
				application_answers: Document::new(),
				joined_at: bson_time(joined_at),
				created_at: bson_time(joined_at),
				updated_at: bson_time(joined_at),
				approved_by: None,
				approved_at: None,
				removed_at: None,
				removal_reason: None,
			};

			match status {
				"active" => {
					if let Some(approver) = manager_id {
						membership.approved_by = Some(approver.to_string());
						membership.approved_at = Some(bson_time(joined_at + Duration::hours(rng.gen_range(1..=48))));
					}
				}
				"removed" => {
					membership.removed_at = Some(bson_time(joined_at + Duration::days(rng.gen_range(30..=200))));
					membership.removal_reason = Some(pick(rng, MEMBERSHIP_REMOVAL_REASONS).to_string());
				}
				_ => {}
			}

			memberships.push(membership);
		}
	}
	Ok(memberships)
}

pub async fn seed<R: Rng + ?Sized>(stores: &Stores, rng: &mut R, plan: &SeedPlan, now: OffsetDateTime) -> Result<usize> {
	let users = refs::users(&stores.pg).await?;
	let clubs = refs::clubs(&stores.club_db).await?;
	let campaigns = refs::campaigns(&stores.club_db).await?;
	let memberships = generate_memberships(rng, &users, &clubs, &campaigns, &plan.memberships, now)?;
	info!("generated {} memberships for {} clubs", memberships.len(), clubs.len());

	let coll = stores.club_db.collection::<Membership>(models::MEMBERSHIPS);
	clear(&coll).await?;
	let inserted = insert_batched(&coll, &memberships, plan.batches.memberships).await?;

	print_stats(stores).await?;
	sync_member_counts(stores, &clubs).await?;
	Ok(inserted)
}

async fn print_stats(stores: &Stores) -> Result<()> {
	let coll = documents(&stores.club_db, models::MEMBERSHIPS);
	println!("Total memberships: {}", stats::count(&coll, None).await?);
	print_counts("Memberships by role", &count_by(&coll, "role", None).await?);
	print_counts("Memberships by status", &count_by(&coll, "status", None).await?);

	let pipeline = vec![
		doc! { "$match": { "status": "active" } },
		doc! { "$group": { "_id": "$club_id", "members": { "$sum": 1 } } },
		doc! { "$sort": { "members": -1 } },
		doc! { "$limit": 5 },
		doc! { "$lookup": { "from": models::CLUBS, "localField": "_id", "foreignField": "_id", "as": "club" } },
		doc! { "$unwind": "$club" },
	];
	println!("Top clubs by active members:");
	for row in stats::aggregate(&coll, pipeline).await? {
		let name = row.get_document("club").ok().and_then(|c| c.get_str("name").ok()).unwrap_or("?");
		println!("  - {name}: {}", stats::number(&row, "members"));
	}
	Ok(())
}

/// Overwrite each club's `member_count` with its active membership count.
async fn sync_member_counts(stores: &Stores, clubs: &[ClubRef]) -> Result<()> {
	let memberships = documents(&stores.club_db, models::MEMBERSHIPS);
	let club_coll = documents(&stores.club_db, models::CLUBS);
	for club in clubs {
		let active = stats::count(&memberships, Some(doc! { "club_id": club.id, "status": "active" })).await?;
		club_coll
			.update_one(
				doc! { "_id": club.id },
				doc! { "$set": { "member_count": active as i64 } },
				None,
			)
			.await
			.with_context(|| format!("updating member_count of {}", club.name))?;
	}
	info!("updated member_count for {} clubs", clubs.len());
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use bson::Bson;
	use rand::{SeedableRng, rngs::StdRng};

	fn now() -> OffsetDateTime {
		OffsetDateTime::from_unix_timestamp(1_760_000_000).unwrap()
	}

	fn users(n: usize) -> Vec<UserRef> {
		(0..n)
			.map(|i| UserRef {
				id: format!("user-{i}"),
				email: format!("u{i}@x"),
				full_name: format!("User {i}"),
				role: String::from("user"),
			})
			.collect()
	}

	fn club(manager: Option<&str>) -> ClubRef {
		ClubRef {
			id: ObjectId::new(),
			name: String::from("CLB Cờ vua"),
			category: Some(String::from("Học thuật")),
			manager: manager.map(|m| Bson::String(m.to_string())),
			created_by: None,
			logo_url: None,
		}
	}

	#[test]
	fn managers_always_hold_an_active_seat() {
		let mut rng = StdRng::seed_from_u64(1);
		let users = users(40);
		let clubs: Vec<ClubRef> = (0..10).map(|i| club(Some(&format!("user-{}", i * 3)))).collect();
		let memberships =
			generate_memberships(&mut rng, &users, &clubs, &[], &MembershipVolume::default(), now()).unwrap();

		for c in &clubs {
			let manager = c.manager_id().unwrap();
			let seat = memberships
				.iter()
				.find(|m| m.club_id == c.id && m.user_id == manager)
				.unwrap();
			assert_eq!(seat.role, "club_manager");
			assert_eq!(seat.status, "active");
			assert_eq!(seat.approved_by.as_deref(), Some(manager));

			let size = memberships.iter().filter(|m| m.club_id == c.id).count();
			assert!((5..=25).contains(&size), "{size}");
		}
	}

	#[test]
	fn first_sampled_member_is_active_unless_manager() {
		let mut rng = StdRng::seed_from_u64(6);
		let users = users(40);
		let clubs: Vec<ClubRef> = (0..30).map(|_| club(None)).collect();
		let memberships =
			generate_memberships(&mut rng, &users, &clubs, &[], &MembershipVolume::default(), now()).unwrap();
		for c in &clubs {
			let first = memberships.iter().find(|m| m.club_id == c.id).unwrap();
			assert_eq!(first.status, "active");
			assert!(["organizer", "member"].contains(&first.role.as_str()), "{}", first.role);
		}
	}

	#[test]
	fn pairs_are_unique() {
		let mut rng = StdRng::seed_from_u64(2);
		let users = users(30);
		let clubs: Vec<ClubRef> = (0..8).map(|_| club(Some("user-0"))).collect();
		let memberships =
			generate_memberships(&mut rng, &users, &clubs, &[], &MembershipVolume::default(), now()).unwrap();
		let pairs: HashSet<_> = memberships.iter().map(|m| (m.club_id, m.user_id.clone())).collect();
		assert_eq!(pairs.len(), memberships.len());
	}

	#[test]
	fn small_user_pools_are_used_whole() {
		let mut rng = StdRng::seed_from_u64(3);
		let users = users(3);
		let memberships =
			generate_memberships(&mut rng, &users, &[club(None)], &[], &MembershipVolume::default(), now()).unwrap();
		assert_eq!(memberships.len(), 3);
		assert!(memberships.iter().all(|m| m.campaign_id.is_none()));
	}

	#[test]
	fn campaigns_come_from_the_same_club() {
		let mut rng = StdRng::seed_from_u64(4);
		let users = users(20);
		let clubs = vec![club(None), club(None)];
		let campaign = CampaignRef {
			id: ObjectId::new(),
			club_id: clubs[0].id,
		};
		let memberships =
			generate_memberships(&mut rng, &users, &clubs, &[campaign.clone()], &MembershipVolume::default(), now())
				.unwrap();
		for m in &memberships {
			if m.club_id == clubs[0].id {
				assert_eq!(m.campaign_id, Some(campaign.id));
			} else {
				assert_eq!(m.campaign_id, None);
			}
		}
	}

	#[test]
	fn removal_and_approval_fields_follow_status() {
		let mut rng = StdRng::seed_from_u64(5);
		let users = users(60);
		let clubs: Vec<ClubRef> = (0..40).map(|_| club(Some("user-1"))).collect();
		let memberships =
			generate_memberships(&mut rng, &users, &clubs, &[], &MembershipVolume::default(), now()).unwrap();
		for m in &memberships {
			assert_eq!(m.removed_at.is_some(), m.status == "removed");
			assert_eq!(m.removal_reason.is_some(), m.status == "removed");
			assert_eq!(m.approved_at.is_some(), m.status == "active");
		}
	}
}
