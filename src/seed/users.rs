use anyhow::{Context, Result};
use rand::Rng;
use rand::seq::SliceRandom;
use serde_json::{Value, json};
use time::Date;
use tracing::info;

use super::{calendar_date, pick};
use crate::catalog::people::{
	ADMINS, DEPARTMENTS, FAMILY_NAMES, GENDERS, GIVEN_NAMES, HOME_ADDRESS, INTERESTS, MIDDLE_NAMES,
	SEED_PASSWORD_HASH, STUDENT_EMAIL_DOMAIN, UNIVERSITIES, bio_options,
};
use crate::images::ImageUrls;
use crate::text::to_ascii_slug;

const INSERT_USER: &str = "INSERT INTO users (
	email, password_hash, full_name, role, phone, profile_picture_url,
	bio, date_of_birth, gender, address, social_links, email_verified,
	created_at, updated_at
) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, NOW(), NOW())";

/// A `users` row before insertion.
#[derive(Debug, Clone)]
pub struct NewUser {
	pub email: String,
	pub password_hash: &'static str,
	pub full_name: String,
	pub role: &'static str,
	pub phone: String,
	pub profile_picture_url: String,
	pub bio: String,
	pub date_of_birth: Date,
	pub gender: &'static str,
	pub address: &'static str,
	pub social_links: Value,
	pub email_verified: bool,
}

/// The fixed admin accounts followed by `count` students.
pub fn generate_users<R: Rng + ?Sized>(rng: &mut R, urls: &ImageUrls, count: usize) -> Result<Vec<NewUser>> {
	let mut users = Vec::with_capacity(ADMINS.len() + count);

	for admin in ADMINS {
		let (year, month, day) = admin.birth;
		users.push(NewUser {
			email: admin.email.to_string(),
			password_hash: SEED_PASSWORD_HASH,
			full_name: admin.full_name.to_string(),
			role: "admin",
			phone: admin.phone.to_string(),
			profile_picture_url: urls.profile_picture(admin.picture_key),
			bio: admin.bio.to_string(),
			date_of_birth: calendar_date(year, month, day)?,
			gender: admin.gender,
			address: HOME_ADDRESS,
			social_links: json!({ "linkedin": admin.linkedin }),
			email_verified: true,
		});
	}

	for i in 1..=count {
		let family = pick(rng, FAMILY_NAMES);
		let middle = pick(rng, MIDDLE_NAMES);
		let given = pick(rng, GIVEN_NAMES);

		let handle = to_ascii_slug(&format!("{}{}{i:03}", given.to_lowercase(), family.to_lowercase()));
		let year_of_study = rng.gen_range(1..=4u8);
		let department = pick(rng, DEPARTMENTS);
		let university = pick(rng, UNIVERSITIES);
		let gender = pick(rng, GENDERS);

		let wanted = rng.gen_range(1..=4);
		let interests: Vec<&str> = INTERESTS.choose_multiple(rng, wanted).copied().collect();
		let bios = bio_options(year_of_study, department, university, &interests);
		let bio = bios[rng.gen_range(0..bios.len())].clone();

		let mut social_links = json!({
			"facebook": format!("https://facebook.com/{handle}"),
			"instagram": format!("https://instagram.com/{handle}"),
		});
		if rng.gen_bool(0.3) {
			social_links["linkedin"] = json!(format!("https://linkedin.com/in/{handle}"));
		}

		let date_of_birth = calendar_date(rng.gen_range(1999..=2005), rng.gen_range(1..=12), rng.gen_range(1..=28))?;

		users.push(NewUser {
			email: format!("{handle}@{STUDENT_EMAIL_DOMAIN}"),
			password_hash: SEED_PASSWORD_HASH,
			full_name: format!("{family} {middle} {given}"),
			role: "user",
			phone: format!("+8490{}", rng.gen_range(1_000_000..=9_999_999)),
			profile_picture_url: urls.profile_picture(&format!("user{i:03}")),
			bio,
			date_of_birth,
			gender,
			address: HOME_ADDRESS,
			social_links,
			email_verified: rng.gen_bool(0.75),
		});
	}

	Ok(users)
}

/// Replace every row of `users` inside one transaction.
pub async fn seed<R: Rng + ?Sized>(
	pg: &mut tokio_postgres::Client,
	rng: &mut R,
	urls: &ImageUrls,
	count: usize,
) -> Result<usize> {
	let users = generate_users(rng, urls, count)?;
	info!("generated {} users", users.len());

	let tx = pg.transaction().await.context("starting users transaction")?;
	let cleared = tx.execute("DELETE FROM users", &[]).await.context("clearing users")?;
	info!("cleared {cleared} existing users");

	let stmt = tx.prepare(INSERT_USER).await.context("preparing user insert")?;
	for user in &users {
		tx.execute(
			&stmt,
			&[
				&user.email,
				&user.password_hash,
				&user.full_name,
				&user.role,
				&user.phone,
				&user.profile_picture_url,
				&user.bio,
				&user.date_of_birth,
				&user.gender,
				&user.address,
				&user.social_links,
				&user.email_verified,
			],
		)
		.await
		.with_context(|| format!("inserting user {}", user.email))?;
	}
	tx.commit().await.context("committing users")?;
	info!("committed {} users", users.len());

	print_stats(pg).await?;
	Ok(users.len())
}

async fn grouped(pg: &tokio_postgres::Client, sql: &str) -> Result<Vec<(String, i64)>> {
	let rows = pg.query(sql, &[]).await.with_context(|| format!("running {sql}"))?;
	rows.iter()
		.map(|row| Ok((row.try_get(0)?, row.try_get(1)?)))
		.collect::<Result<Vec<_>, tokio_postgres::Error>>()
		.context("decoding grouped counts")
}

async fn print_stats(pg: &tokio_postgres::Client) -> Result<()> {
	let total: i64 = pg
		.query_one("SELECT COUNT(*) FROM users", &[])
		.await
		.context("counting users")?
		.try_get(0)?;
	println!("Total users: {total}");

	println!("Users by role:");
	for (role, n) in grouped(pg, "SELECT role, COUNT(*) FROM users GROUP BY role ORDER BY role").await? {
		println!("  - {role}: {n}");
	}

	println!("Email verification:");
	let verified = grouped(
		pg,
		"SELECT CASE WHEN email_verified THEN 'verified' ELSE 'unverified' END, COUNT(*) \
		 FROM users GROUP BY 1 ORDER BY 1 DESC",
	)
	.await?;
	for (status, n) in verified {
		println!("  - {status}: {n}");
	}

	println!("Users by gender:");
	let genders = grouped(
		pg,
		"SELECT gender, COUNT(*) FROM users WHERE gender IS NOT NULL GROUP BY gender ORDER BY gender",
	)
	.await?;
	for (gender, n) in genders {
		println!("  - {gender}: {n}");
	}

	println!("Sample profile pictures:");
	for row in pg
		.query("SELECT full_name, profile_picture_url FROM users LIMIT 3", &[])
		.await
		.context("sampling users")?
	{
		let name: String = row.try_get(0)?;
		let url: Option<String> = row.try_get(1)?;
		println!("  - {name}: {}", url.as_deref().unwrap_or("N/A"));
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::images::ImageMode;
	use rand::{SeedableRng, rngs::StdRng};
	use std::collections::HashSet;

	fn urls() -> ImageUrls {
		ImageUrls::new("demo", ImageMode::Placeholder)
	}

	#[test]
	fn admins_come_first() {
		let mut rng = StdRng::seed_from_u64(1);
		let users = generate_users(&mut rng, &urls(), 3).unwrap();
		assert_eq!(users.len(), 5);
		assert_eq!(users[0].email, "admin@clubsystem.edu.vn");
		assert_eq!(users[1].email, "clubs.admin@clubsystem.edu.vn");
		assert!(users[..2].iter().all(|u| u.role == "admin" && u.email_verified));
		assert!(users[2..].iter().all(|u| u.role == "user"));
	}

	#[test]
	fn student_emails_are_unique_ascii() {
		let mut rng = StdRng::seed_from_u64(2);
		let users = generate_users(&mut rng, &urls(), 100).unwrap();
		let emails: HashSet<_> = users.iter().map(|u| u.email.as_str()).collect();
		assert_eq!(emails.len(), users.len());

		for user in &users[2..] {
			let (local, domain) = user.email.split_once('@').unwrap();
			assert_eq!(domain, STUDENT_EMAIL_DOMAIN);
			assert!(local.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
			assert!(user.phone.starts_with("+8490") && user.phone.len() == 12);
			assert!((1999..=2005).contains(&user.date_of_birth.year()));
			assert!(user.social_links.get("facebook").is_some());
		}
	}

	#[test]
	fn profile_pictures_are_keyed_by_sequence() {
		let mut rng = StdRng::seed_from_u64(3);
		let urls = urls();
		let users = generate_users(&mut rng, &urls, 1).unwrap();
		assert_eq!(users[2].profile_picture_url, urls.profile_picture("user001"));
		assert_eq!(users[0].profile_picture_url, urls.profile_picture("admin1"));
	}
}
