use anyhow::{Result, bail};
use bson::{doc, oid::ObjectId};
use rand::Rng;
use rand::seq::SliceRandom;
use time::{Duration, OffsetDateTime};
use tracing::info;

use super::{bson_time, calendar_date, weighted};
use crate::catalog::clubs::CLUBS;
use crate::core::{Stores, clear, documents, insert_batched};
use crate::images::ImageUrls;
use crate::models::{self, Club, ClubSocialLinks};
use crate::refs::{self, UserRef};
use crate::stats::{self, count_by, print_counts};
use crate::text::email_local_part;

const STATUSES: &[(&str, u32)] = &[("ACTIVE", 3), ("RECRUITING", 1)];

/// One club per template, created by an admin and managed by a random user.
pub fn generate_clubs<R: Rng + ?Sized>(
	rng: &mut R,
	urls: &ImageUrls,
	users: &[UserRef],
	now: OffsetDateTime,
) -> Result<Vec<Club>> {
	if users.is_empty() {
		bail!("No users found. Please seed users first.");
	}
	let admins: Vec<&UserRef> = users.iter().filter(|u| u.is_admin()).collect();
	let creators: Vec<&UserRef> = if admins.is_empty() {
		users.iter().take(10).collect()
	} else {
		admins
	};
	info!("using {} users as club creators", creators.len());

	let thematic = urls.thematic();
	let mut clubs = Vec::with_capacity(CLUBS.len());
	for template in CLUBS {
		let id = ObjectId::new();
		let id_hex = id.to_hex();
		let handle = email_local_part(template.contact_email);
		let manager = users.choose(rng).map(|u| u.id.clone()).unwrap_or_default();
		let created_by = creators.choose(rng).map(|u| u.id.clone()).unwrap_or_default();

		let founded = calendar_date(rng.gen_range(2020..=2024), rng.gen_range(1..=12), rng.gen_range(1..=28))?;
		let created_at = now - Duration::days(rng.gen_range(30..=365));

		clubs.push(Club {
			id,
			name: template.name.to_string(),
			description: template.description.to_string(),
			category: template.category.to_string(),
			location: template.location.to_string(),
			contact_email: template.contact_email.to_string(),
			contact_phone: template.contact_phone.to_string(),
			logo_url: thematic.club_logo(rng, &id_hex, template.name, template.category),
			cover_url: thematic.club_cover(rng, &id_hex, template.category),
			website_url: format!("https://{handle}.bkhn.edu.vn"),
			social_links: ClubSocialLinks {
				facebook: format!("https://facebook.com/{handle}.bkhn"),
				instagram: format!("https://instagram.com/{handle}_bkhn"),
			},
			status: weighted(rng, STATUSES).unwrap_or("ACTIVE").to_string(),
			manager,
			created_by,
			founding_date: bson_time(founded.midnight().assume_utc()),
			member_count: template.member_count,
			created_at: bson_time(created_at),
			updated_at: bson_time(now),
		});
	}
	Ok(clubs)
}

pub async fn seed<R: Rng + ?Sized>(stores: &Stores, rng: &mut R, urls: &ImageUrls, now: OffsetDateTime) -> Result<usize> {
	let users = refs::users(&stores.pg).await?;
	let clubs = generate_clubs(rng, urls, &users, now)?;
	info!("generated {} clubs", clubs.len());

	let coll = stores.club_db.collection::<Club>(models::CLUBS);
	clear(&coll).await?;
	let inserted = insert_batched(&coll, &clubs, clubs.len()).await?;

	print_stats(stores).await?;
	Ok(inserted)
}

async fn print_stats(stores: &Stores) -> Result<()> {
	let coll = documents(&stores.club_db, models::CLUBS);
	println!("Total clubs: {}", stats::count(&coll, None).await?);

	println!("Clubs by category:");
	for (category, n) in count_by(&coll, "category", None).await? {
		println!("  - {category}: {n}");
		if let Some(sample) = coll.find_one(doc! { "category": category.as_str() }, None).await? {
			println!(
				"      {} {}",
				sample.get_str("name").unwrap_or_default(),
				sample.get_str("logo_url").unwrap_or("N/A")
			);
		}
	}
	print_counts("Clubs by status", &count_by(&coll, "status", None).await?);

	let pipeline = vec![doc! {
		"$group": {
			"_id": null,
			"total": { "$sum": "$member_count" },
			"avg": { "$avg": "$member_count" },
			"max": { "$max": "$member_count" },
			"min": { "$min": "$member_count" },
		}
	}];
	if let Some(row) = stats::aggregate(&coll, pipeline).await?.first() {
		println!("Member statistics:");
		println!("  - total: {}", stats::number(row, "total"));
		println!("  - average: {:.1}", stats::number(row, "avg"));
		println!("  - largest: {}", stats::number(row, "max"));
		println!("  - smallest: {}", stats::number(row, "min"));
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::images::ImageMode;
	use rand::{SeedableRng, rngs::StdRng};

	fn user(id: &str, email: &str) -> UserRef {
		UserRef {
			id: id.to_string(),
			email: email.to_string(),
			full_name: String::from("Nguyễn Văn An"),
			role: String::from("user"),
		}
	}

	fn now() -> OffsetDateTime {
		OffsetDateTime::from_unix_timestamp(1_760_000_000).unwrap()
	}

	#[test]
	fn no_users_is_an_error() {
		let mut rng = StdRng::seed_from_u64(1);
		let urls = ImageUrls::new("demo", ImageMode::Placeholder);
		let err = generate_clubs(&mut rng, &urls, &[], now()).unwrap_err();
		assert!(err.to_string().contains("No users found"));
	}

	#[test]
	fn admins_create_every_club() {
		let mut rng = StdRng::seed_from_u64(2);
		let urls = ImageUrls::new("demo", ImageMode::Placeholder);
		let users = vec![user("a", "admin@clubsystem.edu.vn"), user("s1", "an001@x"), user("s2", "binh002@x")];
		let clubs = generate_clubs(&mut rng, &urls, &users, now()).unwrap();

		assert_eq!(clubs.len(), CLUBS.len());
		assert!(clubs.iter().all(|c| c.created_by == "a"));
		assert!(clubs.iter().all(|c| ["a", "s1", "s2"].contains(&c.manager.as_str())));
		assert!(clubs.iter().all(|c| c.status == "ACTIVE" || c.status == "RECRUITING"));
	}

	#[test]
	fn first_users_create_without_admins() {
		let mut rng = StdRng::seed_from_u64(3);
		let urls = ImageUrls::new("demo", ImageMode::Placeholder);
		let users: Vec<UserRef> = (0..15).map(|i| user(&format!("u{i}"), &format!("u{i}@x"))).collect();
		let clubs = generate_clubs(&mut rng, &urls, &users, now()).unwrap();
		let allowed: Vec<String> = (0..10).map(|i| format!("u{i}")).collect();
		assert!(clubs.iter().all(|c| allowed.contains(&c.created_by)));
	}

	#[test]
	fn links_derive_from_contact_email() {
		let mut rng = StdRng::seed_from_u64(4);
		let urls = ImageUrls::new("demo", ImageMode::Placeholder);
		let clubs = generate_clubs(&mut rng, &urls, &[user("a", "admin@x")], now()).unwrap();
		for club in &clubs {
			let handle = email_local_part(&club.contact_email);
			assert_eq!(club.website_url, format!("https://{handle}.bkhn.edu.vn"));
			assert_eq!(club.social_links.instagram, format!("https://instagram.com/{handle}_bkhn"));

			let created = club.created_at.to_time_0_3();
			assert!(created <= now() - Duration::days(30) && created >= now() - Duration::days(365));
			let founded = club.founding_date.to_time_0_3();
			assert!((2020..=2024).contains(&founded.year()));
		}
	}
}
