use anyhow::{Context, Result};
use bson::{Document, doc};
use mongodb::{Database, IndexModel, options::IndexOptions};
use tracing::info;

use crate::config::SeedCfg;
use crate::core::{connect_mongo, connect_postgres, documents};
use crate::models::{CAMPAIGNS, CLUBS, EVENTS, MEMBERSHIPS, REGISTRATIONS};

pub const USERS_DDL: &str = r#"
CREATE EXTENSION IF NOT EXISTS pgcrypto;

CREATE TABLE IF NOT EXISTS users (
	id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
	email VARCHAR(255) NOT NULL UNIQUE,
	password_hash VARCHAR(255) NOT NULL,
	full_name VARCHAR(255) NOT NULL,
	role VARCHAR(50) NOT NULL DEFAULT 'user',
	phone VARCHAR(20),
	profile_picture_url TEXT,
	bio TEXT,
	date_of_birth DATE,
	gender VARCHAR(20),
	address TEXT,
	social_links JSONB NOT NULL DEFAULT '{}'::jsonb,
	email_verified BOOLEAN NOT NULL DEFAULT FALSE,
	created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
	updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
	deleted_at TIMESTAMPTZ
);

CREATE INDEX IF NOT EXISTS idx_users_role ON users (role);
CREATE INDEX IF NOT EXISTS idx_users_created_at ON users (created_at);
"#;

/// One index to create: keys, optional name, uniqueness.
struct IndexSpec {
	keys: Document,
	name: Option<&'static str>,
	unique: bool,
}

fn index(keys: Document) -> IndexSpec {
	IndexSpec {
		keys,
		name: None,
		unique: false,
	}
}

fn unique(keys: Document) -> IndexSpec {
	IndexSpec {
		keys,
		name: None,
		unique: true,
	}
}

fn text(keys: Document, name: &'static str) -> IndexSpec {
	IndexSpec {
		keys,
		name: Some(name),
		unique: false,
	}
}

fn club_indexes() -> Vec<(&'static str, Vec<IndexSpec>)> {
	vec![
		(
			CLUBS,
			vec![
				unique(doc! { "name": 1 }),
				text(doc! { "name": "text", "description": "text" }, "clubs_text"),
				index(doc! { "category": 1 }),
				index(doc! { "status": 1 }),
				index(doc! { "created_by": 1 }),
				index(doc! { "created_at": -1 }),
			],
		),
		(
			MEMBERSHIPS,
			vec![
				unique(doc! { "club_id": 1, "user_id": 1 }),
				index(doc! { "user_id": 1 }),
				index(doc! { "club_id": 1, "status": 1 }),
				index(doc! { "campaign_id": 1 }),
				index(doc! { "joined_at": -1 }),
			],
		),
		(
			CAMPAIGNS,
			vec![
				index(doc! { "club_id": 1 }),
				index(doc! { "status": 1 }),
				index(doc! { "start_date": 1, "end_date": 1 }),
				index(doc! { "created_by": 1 }),
			],
		),
	]
}

fn event_indexes() -> Vec<(&'static str, Vec<IndexSpec>)> {
	vec![
		(
			EVENTS,
			vec![
				text(doc! { "title": "text", "description": "text", "tags": "text" }, "events_text"),
				index(doc! { "club_id": 1, "status": 1 }),
				index(doc! { "start_date": 1, "end_date": 1 }),
				index(doc! { "category": 1 }),
				index(doc! { "visibility": 1 }),
				index(doc! { "created_by": 1 }),
				index(doc! { "registration_deadline": 1 }),
			],
		),
		(
			REGISTRATIONS,
			vec![
				unique(doc! { "event_id": 1, "user_id": 1 }),
				index(doc! { "event_id": 1, "status": 1 }),
				index(doc! { "user_id": 1, "status": 1 }),
				index(doc! { "registered_at": -1 }),
				unique(doc! { "ticket_id": 1 }),
			],
		),
	]
}

async fn create_indexes(db: &Database, plan: Vec<(&'static str, Vec<IndexSpec>)>) -> Result<usize> {
	let mut created = 0;
	for (collection, specs) in plan {
		let coll = documents(db, collection);
		for spec in specs {
			let options = IndexOptions::builder()
				.unique(spec.unique.then_some(true))
				.name(spec.name.map(String::from))
				.build();
			let model = IndexModel::builder().keys(spec.keys.clone()).options(options).build();
			let result = coll
				.create_index(model, None)
				.await
				.with_context(|| format!("creating index {} on {collection}", spec.keys))?;
			info!("index {} ready on {collection}", result.index_name);
			created += 1;
		}
	}
	Ok(created)
}

pub async fn run_setup(cfg: &SeedCfg) -> Result<()> {
	let pg = connect_postgres(cfg.postgres_url()).await?;
	pg.batch_execute(USERS_DDL).await.context("creating users table")?;
	println!("PostgreSQL: users table ready");

	let club_db = connect_mongo(cfg.club_uri(), cfg.club_db()).await?;
	let n = create_indexes(&club_db, club_indexes()).await?;
	println!("MongoDB {}: {n} indexes ready", cfg.club_db());

	let event_db = connect_mongo(cfg.event_uri(), cfg.event_db()).await?;
	let n = create_indexes(&event_db, event_indexes()).await?;
	println!("MongoDB {}: {n} indexes ready", cfg.event_db());
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ddl_is_idempotent() {
		for line in USERS_DDL.lines().filter(|l| l.starts_with("CREATE")) {
			assert!(line.contains("IF NOT EXISTS"), "{line}");
		}
		assert!(USERS_DDL.contains("deleted_at TIMESTAMPTZ"));
		assert!(USERS_DDL.contains("email VARCHAR(255) NOT NULL UNIQUE"));
	}

	#[test]
	fn pair_keys_are_unique() {
		let all: Vec<_> = club_indexes().into_iter().chain(event_indexes()).collect();
		let uniques: Vec<(&str, Document)> = all
			.iter()
			.flat_map(|(coll, specs)| specs.iter().filter(|s| s.unique).map(move |s| (*coll, s.keys.clone())))
			.collect();

		assert!(uniques.contains(&(CLUBS, doc! { "name": 1 })));
		assert!(uniques.contains(&(MEMBERSHIPS, doc! { "club_id": 1, "user_id": 1 })));
		assert!(uniques.contains(&(REGISTRATIONS, doc! { "event_id": 1, "user_id": 1 })));
		assert!(uniques.contains(&(REGISTRATIONS, doc! { "ticket_id": 1 })));
		assert_eq!(uniques.len(), 4);
	}

	#[test]
	fn every_collection_is_covered() {
		let names: Vec<&str> = club_indexes()
			.into_iter()
			.chain(event_indexes())
			.map(|(name, _)| name)
			.collect();
		assert_eq!(names, vec![CLUBS, MEMBERSHIPS, CAMPAIGNS, EVENTS, REGISTRATIONS]);
	}
}
