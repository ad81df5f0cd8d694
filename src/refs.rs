//! Read-back of rows other seeders depend on.

use anyhow::{Context, Result};
use bson::{Bson, DateTime, Document, doc, oid::ObjectId};
use futures::TryStreamExt;
use mongodb::{Database, options::FindOptions};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::info;
use uuid::Uuid;

use crate::models::{CAMPAIGNS, CLUBS, EVENTS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRef {
	pub id: String,
	pub email: String,
	pub full_name: String,
	pub role: String,
}

impl UserRef {
	pub fn is_admin(&self) -> bool {
		self.email.contains("admin")
	}
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClubRef {
	#[serde(rename = "_id")]
	pub id: ObjectId,
	pub name: String,
	#[serde(default)]
	pub category: Option<String>,
	#[serde(default)]
	pub manager: Option<Bson>,
	#[serde(default)]
	pub created_by: Option<String>,
	#[serde(default)]
	pub logo_url: Option<String>,
}

impl ClubRef {
	/// The managing user's id. Older rows store the manager as a
	/// `{ user_id, ... }` subdocument; clubs without one fall back to `created_by`.
	pub fn manager_id(&self) -> Option<&str> {
		let manager = match &self.manager {
			Some(Bson::String(id)) => Some(id.as_str()),
			Some(Bson::Document(d)) => d.get_str("user_id").ok(),
			_ => None,
		};
		manager.or(self.created_by.as_deref())
	}
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventRef {
	#[serde(rename = "_id")]
	pub id: ObjectId,
	pub title: String,
	#[serde(default)]
	pub category: Option<String>,
	pub start_date: DateTime,
	#[serde(default)]
	pub registration_deadline: Option<DateTime>,
	#[serde(default)]
	pub max_participants: Option<i64>,
	#[serde(default)]
	pub participation_fee: Option<i64>,
	#[serde(default)]
	pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CampaignRef {
	#[serde(rename = "_id")]
	pub id: ObjectId,
	pub club_id: ObjectId,
}

pub async fn users(pg: &tokio_postgres::Client) -> Result<Vec<UserRef>> {
	let rows = pg
		.query(
			"SELECT id, email, full_name, role FROM users WHERE deleted_at IS NULL ORDER BY created_at, email",
			&[],
		)
		.await
		.context("fetching users")?;

	let users = rows
		.iter()
		.map(|row| {
			Ok(UserRef {
				id: row.try_get::<_, Uuid>("id")?.to_string(),
				email: row.try_get("email")?,
				full_name: row.try_get("full_name")?,
				role: row.try_get("role")?,
			})
		})
		.collect::<Result<Vec<_>, tokio_postgres::Error>>()
		.context("decoding user rows")?;

	info!("retrieved {} users from PostgreSQL", users.len());
	Ok(users)
}

async fn find_all<T>(db: &Database, name: &str, projection: Document) -> Result<Vec<T>>
where
	T: DeserializeOwned + Unpin + Send + Sync,
{
	let options = FindOptions::builder().projection(projection).build();
	let rows: Vec<T> = db
		.collection::<T>(name)
		.find(None, options)
		.await
		.with_context(|| format!("querying {name}"))?
		.try_collect()
		.await
		.with_context(|| format!("reading {name}"))?;
	info!("retrieved {} {name}", rows.len());
	Ok(rows)
}

pub async fn clubs(club_db: &Database) -> Result<Vec<ClubRef>> {
	find_all(
		club_db,
		CLUBS,
		doc! { "name": 1, "category": 1, "manager": 1, "created_by": 1, "logo_url": 1 },
	)
	.await
}

pub async fn events(event_db: &Database) -> Result<Vec<EventRef>> {
	find_all(
		event_db,
		EVENTS,
		doc! {
			"title": 1,
			"category": 1,
			"start_date": 1,
			"registration_deadline": 1,
			"max_participants": 1,
			"participation_fee": 1,
			"status": 1,
		},
	)
	.await
}

pub async fn campaigns(club_db: &Database) -> Result<Vec<CampaignRef>> {
	find_all(club_db, CAMPAIGNS, doc! { "club_id": 1 }).await
}

#[cfg(test)]
mod tests {
	use super::*;

	fn club(manager: Option<Bson>, created_by: Option<&str>) -> ClubRef {
		ClubRef {
			id: ObjectId::new(),
			name: String::from("CLB Lập trình"),
			category: Some(String::from("Công nghệ")),
			manager,
			created_by: created_by.map(String::from),
			logo_url: None,
		}
	}

	#[test]
	fn manager_accepts_plain_and_nested_ids() {
		let plain = club(Some(Bson::String(String::from("u1"))), Some("admin"));
		assert_eq!(plain.manager_id(), Some("u1"));

		let nested = club(Some(Bson::Document(doc! { "user_id": "u2", "full_name": "A" })), None);
		assert_eq!(nested.manager_id(), Some("u2"));
	}

	#[test]
	fn manager_falls_back_to_creator() {
		assert_eq!(club(None, Some("admin")).manager_id(), Some("admin"));
		assert_eq!(club(Some(Bson::Null), None).manager_id(), None);
	}

	#[test]
	fn admin_is_detected_by_email() {
		let user = UserRef {
			id: String::from("1"),
			email: String::from("clubs.admin@clubsystem.edu.vn"),
			full_name: String::from("Trần Thị Linh"),
			role: String::from("admin"),
		};
		assert!(user.is_admin());
	}
}
