use anyhow::{Result, bail};
use bson::{doc, oid::ObjectId};
use rand::Rng;
use time::{Duration, OffsetDateTime};
use tracing::info;

use super::{bson_time, pick, weighted};
use crate::catalog::campaigns::{
	BASE_QUESTIONS, BASE_REQUIREMENTS, QuestionTemplate, SEASONS, campaign_theme, category_questions,
	descriptions, extra_requirements, title_templates,
};
use crate::core::{Stores, clear, documents, insert_batched};
use crate::models::{self, ApplicationQuestion, Campaign, CampaignStatistics};
use crate::refs::{self, ClubRef};
use crate::stats::{self, count_by, print_counts};

const UNCATEGORIZED: &str = "Khác";

fn question(template: &QuestionTemplate) -> ApplicationQuestion {
	ApplicationQuestion {
		id: template.id.to_string(),
		question: template.question.to_string(),
		kind: template.kind.to_string(),
		is_required: template.is_required,
		max_length: template.max_length,
		options: template.options.iter().map(|o| o.to_string()).collect(),
	}
}

/// Status depends on where the window sits relative to `now`.
fn status_for<R: Rng + ?Sized>(rng: &mut R, start: OffsetDateTime, end: OffsetDateTime, now: OffsetDateTime) -> &'static str {
	let choices: &[(&str, u32)] = if start > now {
		&[("draft", 3), ("published", 7)]
	} else if end < now {
		&[("completed", 7), ("archived", 3)]
	} else {
		&[("published", 9), ("paused", 1)]
	};
	weighted(rng, choices).unwrap_or("published")
}

/// 1 campaign for 70 % of clubs, 2 for the rest.
pub fn generate_campaigns<R: Rng + ?Sized>(rng: &mut R, clubs: &[ClubRef], now: OffsetDateTime) -> Result<Vec<Campaign>> {
	if clubs.is_empty() {
		bail!("No clubs found. Please seed clubs first.");
	}

	let mut campaigns = Vec::new();
	for club in clubs {
		let category = club.category.as_deref().unwrap_or(UNCATEGORIZED);
		let theme = campaign_theme(category);
		let count = weighted(rng, &[(1, 7), (2, 3)]).unwrap_or(1);

		for i in 0..count {
			let title = pick(rng, title_templates(theme)).replace("{season}", pick(rng, SEASONS));
			let copies = descriptions(&club.name, category);
			let description = copies[rng.gen_range(0..copies.len())].clone();

			let requirements = BASE_REQUIREMENTS
				.iter()
				.chain(extra_requirements(theme))
				.map(|r| r.to_string())
				.collect();
			let application_questions = BASE_QUESTIONS
				.iter()
				.chain(category_questions(theme))
				.map(question)
				.collect();

			let start = now + Duration::days(rng.gen_range(-30..=60));
			let end = start + Duration::days(rng.gen_range(14..=45));
			let status = status_for(rng, start, end, now);
			let max_applications = rng.gen_range(20..=100);

			let statistics = if matches!(status, "completed" | "archived") {
				let total = rng.gen_range(15..=max_applications);
				let approved = (total as f64 * rng.gen_range(0.3..0.7)) as i64;
				let rejected = (total as f64 * rng.gen_range(0.2..0.4)) as i64;
				CampaignStatistics {
					total_applications: total,
					approved_applications: approved,
					rejected_applications: rejected,
					pending_applications: (total - approved - rejected).max(0),
					last_updated: bson_time(end),
				}
			} else {
				CampaignStatistics {
					total_applications: 0,
					approved_applications: 0,
					rejected_applications: 0,
					pending_applications: 0,
					last_updated: bson_time(now),
				}
			};

			let logo_url = club
				.logo_url
				.clone()
				.filter(|url| !url.is_empty())
				.unwrap_or_else(|| format!("https://picsum.photos/seed/{}-{i}/300/300", &club.id.to_hex()[..8]));

			campaigns.push(Campaign {
				id: ObjectId::new(),
				club_id: club.id,
				title,
				description,
				requirements,
				application_questions,
				start_date: bson_time(start),
				end_date: bson_time(end),
				max_applications,
				status: status.to_string(),
				logo_url,
				statistics,
				created_by: club.created_by.clone(),
				created_at: bson_time(start - Duration::days(rng.gen_range(1..=7))),
				updated_at: bson_time(now),
			});
		}
	}
	Ok(campaigns)
}

pub async fn seed<R: Rng + ?Sized>(stores: &Stores, rng: &mut R, batch_size: usize, now: OffsetDateTime) -> Result<usize> {
	let clubs = refs::clubs(&stores.club_db).await?;
	let campaigns = generate_campaigns(rng, &clubs, now)?;
	info!("generated {} recruitment campaigns for {} clubs", campaigns.len(), clubs.len());

	let coll = stores.club_db.collection::<Campaign>(models::CAMPAIGNS);
	clear(&coll).await?;
	let inserted = insert_batched(&coll, &campaigns, batch_size).await?;

	print_stats(stores).await?;
	Ok(inserted)
}

async fn print_stats(stores: &Stores) -> Result<()> {
	let coll = documents(&stores.club_db, models::CAMPAIGNS);
	println!("Total campaigns: {}", stats::count(&coll, None).await?);
	print_counts("Campaigns by status", &count_by(&coll, "status", None).await?);

	let pipeline = vec![
		doc! { "$lookup": { "from": models::CLUBS, "localField": "club_id", "foreignField": "_id", "as": "club" } },
		doc! { "$unwind": "$club" },
		doc! { "$group": { "_id": "$club.category", "count": { "$sum": 1 } } },
		doc! { "$sort": { "count": -1 } },
	];
	println!("Campaigns by club category:");
	for row in stats::aggregate(&coll, pipeline).await? {
		let category = row.get("_id").map(stats::label).unwrap_or_default();
		println!("  - {category}: {}", stats::number(&row, "count"));
	}

	let active = stats::count(&coll, Some(doc! { "status": "published" })).await?;
	println!("Currently active campaigns: {active}");
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::{SeedableRng, rngs::StdRng};

	fn club(category: Option<&str>, logo: Option<&str>) -> ClubRef {
		ClubRef {
			id: ObjectId::new(),
			name: String::from("CLB Guitar"),
			category: category.map(String::from),
			manager: None,
			created_by: Some(String::from("admin-id")),
			logo_url: logo.map(String::from),
		}
	}

	fn now() -> OffsetDateTime {
		OffsetDateTime::from_unix_timestamp(1_760_000_000).unwrap()
	}

	#[test]
	fn no_clubs_is_an_error() {
		let mut rng = StdRng::seed_from_u64(1);
		assert!(generate_campaigns(&mut rng, &[], now()).is_err());
	}

	#[test]
	fn each_club_gets_one_or_two_campaigns() {
		let mut rng = StdRng::seed_from_u64(2);
		let clubs: Vec<ClubRef> = (0..40).map(|_| club(Some("Công nghệ"), None)).collect();
		let campaigns = generate_campaigns(&mut rng, &clubs, now()).unwrap();
		for c in &clubs {
			let n = campaigns.iter().filter(|k| k.club_id == c.id).count();
			assert!((1..=2).contains(&n));
		}
		assert!(campaigns.len() > clubs.len());
	}

	#[test]
	fn status_matches_the_window() {
		let mut rng = StdRng::seed_from_u64(3);
		let clubs: Vec<ClubRef> = (0..30).map(|_| club(Some("Thể thao"), Some("https://logo"))).collect();
		for c in generate_campaigns(&mut rng, &clubs, now()).unwrap() {
			let start = c.start_date.to_time_0_3();
			let end = c.end_date.to_time_0_3();
			let expected: &[&str] = if start > now() {
				&["draft", "published"]
			} else if end < now() {
				&["completed", "archived"]
			} else {
				&["published", "paused"]
			};
			assert!(expected.contains(&c.status.as_str()), "{} for {start}..{end}", c.status);

			let s = &c.statistics;
			if expected[0] == "completed" {
				assert!(s.total_applications >= 15 && s.total_applications <= c.max_applications);
				assert!(s.pending_applications >= 0);
				assert!(s.approved_applications + s.rejected_applications + s.pending_applications >= s.total_applications);
			} else {
				assert_eq!(s.total_applications, 0);
			}
			assert_eq!(c.logo_url, "https://logo");
			assert!(!c.title.contains("{season}"));
		}
	}

	#[test]
	fn culture_clubs_get_arts_questions_and_a_fallback_logo() {
		let mut rng = StdRng::seed_from_u64(4);
		let culture = club(Some("Văn hóa"), None);
		let prefix = culture.id.to_hex()[..8].to_string();
		let campaigns = generate_campaigns(&mut rng, &[culture], now()).unwrap();
		let first = &campaigns[0];
		assert_eq!(
			first.application_questions.len(),
			BASE_QUESTIONS.len() + category_questions("Nghệ thuật").len()
		);
		assert_eq!(first.logo_url, format!("https://picsum.photos/seed/{prefix}-0/300/300"));
		assert_eq!(first.created_by.as_deref(), Some("admin-id"));
	}
}
