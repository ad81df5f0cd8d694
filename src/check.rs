//! Data-volume and cross-store relationship audit.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::PathBuf;

use anyhow::{Context, Result};
use bson::{Bson, Document, doc, oid::ObjectId};
use futures::TryStreamExt;
use mongodb::{Collection, options::FindOptions};
use serde::Serialize;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tracing::info;

use crate::config::SeedCfg;
use crate::core::{Stores, display, documents};
use crate::models::{CAMPAIGNS, CLUBS, EVENT_INTERESTS, EVENT_TASKS, EVENTS, MEMBERSHIPS, REGISTRATIONS};
use crate::refs;
use crate::report::write_json_report;
use crate::stats::{self, count_by};

#[derive(Debug, Clone, Default)]
pub struct CheckOpts {
	pub samples: usize,
	pub json_out: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Volume {
	pub service: &'static str,
	pub collection: &'static str,
	pub total: u64,
	/// Field name to `(value, count)` pairs, largest first.
	pub breakdown: BTreeMap<String, Vec<(String, u64)>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Relation {
	pub name: &'static str,
	pub active: bool,
	pub checked: usize,
	pub orphans: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Readiness {
	Ready,
	Basic,
	Insufficient,
}

impl Readiness {
	pub fn from_total(total: u64) -> Self {
		if total > 500 {
			Readiness::Ready
		} else if total > 200 {
			Readiness::Basic
		} else {
			Readiness::Insufficient
		}
	}

	fn describe(self) -> &'static str {
		match self {
			Readiness::Ready => "ready for testing",
			Readiness::Basic => "basic data only, consider seeding more",
			Readiness::Insufficient => "insufficient data, run `clubseed seed`",
		}
	}
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
	pub generated_at: String,
	pub volumes: Vec<Volume>,
	pub service_totals: BTreeMap<&'static str, u64>,
	pub total: u64,
	pub relations: Vec<Relation>,
	pub readiness: Readiness,
}

/// Ids and foreign keys read back from all three stores.
#[derive(Debug, Default)]
pub struct Snapshot {
	pub users: HashSet<String>,
	/// Club id to category.
	pub clubs: HashMap<ObjectId, String>,
	/// `(club_id, user_id)`
	pub memberships: Vec<(Option<ObjectId>, Option<String>)>,
	/// `(event_id, club_id, tags)`
	pub events: Vec<(ObjectId, Option<ObjectId>, Vec<String>)>,
	/// `(event_id, user_id)`
	pub registrations: Vec<(Option<ObjectId>, Option<String>)>,
}

fn relation(name: &'static str, checked: usize, orphans: usize) -> Relation {
	Relation {
		name,
		active: checked > 0,
		checked,
		orphans,
	}
}

/// Count references that do not resolve. A relation is active when the
/// referencing collection has rows at all.
pub fn audit_relations(snap: &Snapshot) -> Vec<Relation> {
	let known_user = |id: &Option<String>| id.as_ref().is_some_and(|id| snap.users.contains(id));
	let event_ids: HashSet<ObjectId> = snap.events.iter().map(|(id, _, _)| *id).collect();

	let membership_users = snap.memberships.iter().filter(|(_, user)| !known_user(user)).count();
	let membership_clubs = snap
		.memberships
		.iter()
		.filter(|(club, _)| !club.is_some_and(|c| snap.clubs.contains_key(&c)))
		.count();

	let mut event_clubs = 0;
	let mut untagged = 0;
	for (_, club, tags) in &snap.events {
		match club.and_then(|c| snap.clubs.get(&c)) {
			Some(category) => {
				if !tags.iter().any(|t| t == category) {
					untagged += 1;
				}
			}
			None => event_clubs += 1,
		}
	}

	let registration_users = snap.registrations.iter().filter(|(_, user)| !known_user(user)).count();
	let registration_events = snap
		.registrations
		.iter()
		.filter(|(event, _)| !event.is_some_and(|e| event_ids.contains(&e)))
		.count();

	vec![
		relation("memberships -> users", snap.memberships.len(), membership_users),
		relation("memberships -> clubs", snap.memberships.len(), membership_clubs),
		relation("events -> clubs", snap.events.len(), event_clubs),
		relation("event tags -> club category", snap.events.len(), untagged),
		relation("registrations -> users", snap.registrations.len(), registration_users),
		relation("registrations -> events", snap.registrations.len(), registration_events),
	]
}

fn object_id(doc: &Document, key: &str) -> Option<ObjectId> {
	doc.get_object_id(key).ok()
}

fn string(doc: &Document, key: &str) -> Option<String> {
	match doc.get(key) {
		Some(Bson::String(s)) => Some(s.clone()),
		Some(Bson::ObjectId(id)) => Some(id.to_hex()),
		_ => None,
	}
}

async fn projected(coll: &Collection<Document>, projection: Document) -> Result<Vec<Document>> {
	let options = FindOptions::builder().projection(projection).build();
	coll.find(doc! {}, options)
		.await
		.with_context(|| format!("querying {}", coll.name()))?
		.try_collect()
		.await
		.with_context(|| format!("reading {}", coll.name()))
}

async fn load_snapshot(stores: &Stores) -> Result<Snapshot> {
	let users = refs::users(&stores.pg).await?.into_iter().map(|u| u.id).collect();

	let clubs = projected(&documents(&stores.club_db, CLUBS), doc! { "category": 1 })
		.await?
		.into_iter()
		.filter_map(|d| Some((object_id(&d, "_id")?, string(&d, "category").unwrap_or_default())))
		.collect();

	let memberships = projected(&documents(&stores.club_db, MEMBERSHIPS), doc! { "club_id": 1, "user_id": 1 })
		.await?
		.iter()
		.map(|d| (object_id(d, "club_id"), string(d, "user_id")))
		.collect();

	let events = projected(&documents(&stores.event_db, EVENTS), doc! { "club_id": 1, "tags": 1 })
		.await?
		.iter()
		.filter_map(|d| {
			let tags = d
				.get_array("tags")
				.map(|tags| tags.iter().filter_map(|t| t.as_str().map(String::from)).collect())
				.unwrap_or_default();
			Some((object_id(d, "_id")?, object_id(d, "club_id"), tags))
		})
		.collect();

	let registrations = projected(&documents(&stores.event_db, REGISTRATIONS), doc! { "event_id": 1, "user_id": 1 })
		.await?
		.iter()
		.map(|d| (object_id(d, "event_id"), string(d, "user_id")))
		.collect();

	Ok(Snapshot {
		users,
		clubs,
		memberships,
		events,
		registrations,
	})
}

fn role_count(role: Option<String>, n: i64) -> (String, u64) {
	(role.unwrap_or_else(|| String::from("(none)")), n.max(0) as u64)
}

async fn user_volume(stores: &Stores) -> Result<Volume> {
	let rows = stores
		.pg
		.query(
			"SELECT role, COUNT(*) FROM users WHERE deleted_at IS NULL GROUP BY role ORDER BY 2 DESC, 1",
			&[],
		)
		.await
		.context("counting users by role")?;

	let by_role = rows
		.iter()
		.map(|row| Ok(role_count(row.try_get(0)?, row.try_get(1)?)))
		.collect::<Result<Vec<_>, tokio_postgres::Error>>()
		.context("decoding user counts")?;

	Ok(Volume {
		service: "auth",
		collection: "users",
		total: by_role.iter().map(|(_, n)| n).sum(),
		breakdown: BTreeMap::from([(String::from("role"), by_role)]),
	})
}

async fn document_volume(
	service: &'static str,
	coll: &Collection<Document>,
	collection: &'static str,
	fields: &[&str],
) -> Result<Volume> {
	let mut breakdown = BTreeMap::new();
	for field in fields {
		breakdown.insert(field.to_string(), count_by(coll, field, None).await?);
	}
	Ok(Volume {
		service,
		collection,
		total: stats::count(coll, None).await?,
		breakdown,
	})
}

async fn volumes(stores: &Stores) -> Result<Vec<Volume>> {
	let club = |name| documents(&stores.club_db, name);
	let event = |name| documents(&stores.event_db, name);

	let mut volumes = vec![user_volume(stores).await?];
	volumes.push(document_volume("club", &club(CLUBS), CLUBS, &["category"]).await?);

	let mut memberships = document_volume("club", &club(MEMBERSHIPS), MEMBERSHIPS, &["role"]).await?;
	let active = stats::count(&club(MEMBERSHIPS), Some(doc! { "status": "active" })).await?;
	memberships
		.breakdown
		.insert(String::from("active"), vec![(String::from("active"), active)]);
	volumes.push(memberships);

	volumes.push(document_volume("club", &club(CAMPAIGNS), CAMPAIGNS, &["status"]).await?);
	volumes.push(document_volume("event", &event(EVENTS), EVENTS, &["category"]).await?);
	volumes.push(
		document_volume("event", &event(REGISTRATIONS), REGISTRATIONS, &["status", "payment_status"]).await?,
	);
	volumes.push(document_volume("event", &event(EVENT_INTERESTS), EVENT_INTERESTS, &[]).await?);
	volumes.push(document_volume("event", &event(EVENT_TASKS), EVENT_TASKS, &[]).await?);
	Ok(volumes)
}

pub fn service_totals(volumes: &[Volume]) -> BTreeMap<&'static str, u64> {
	let mut totals = BTreeMap::new();
	for v in volumes {
		*totals.entry(v.service).or_default() += v.total;
	}
	totals
}

fn print_volumes(volumes: &[Volume]) {
	let mut service = "";
	for v in volumes {
		if v.service != service {
			service = v.service;
			println!("{} service:", service);
		}
		println!("  {}: {}", v.collection, v.total);
		for (field, counts) in &v.breakdown {
			let parts: Vec<String> = counts.iter().map(|(value, n)| format!("{value}={n}")).collect();
			println!("      by {field}: {}", parts.join(", "));
		}
	}
}

fn print_relations(relations: &[Relation]) {
	println!("Relationships:");
	for r in relations {
		let state = match (r.active, r.orphans) {
			(false, _) => String::from("inactive"),
			(true, 0) => format!("ok ({} checked)", r.checked),
			(true, n) => format!("{n} orphaned of {}", r.checked),
		};
		println!("  {:<30} {state}", r.name);
	}
}

async fn print_samples(stores: &Stores, snap: &Snapshot, n: usize) -> Result<()> {
	let options = FindOptions::builder().limit(n as i64).build();
	let clubs: Vec<Document> = documents(&stores.club_db, CLUBS)
		.find(doc! {}, options.clone())
		.await
		.context("sampling clubs")?
		.try_collect()
		.await
		.context("reading club samples")?;
	println!("Sample clubs:");
	for c in &clubs {
		println!("  - {} [{}]", c.get_str("name").unwrap_or("?"), c.get_str("category").unwrap_or("?"));
	}

	let events: Vec<Document> = documents(&stores.event_db, EVENTS)
		.find(doc! {}, options)
		.await
		.context("sampling events")?
		.try_collect()
		.await
		.context("reading event samples")?;
	println!("Sample events:");
	for e in &events {
		let club_category = object_id(e, "club_id")
			.and_then(|id| snap.clubs.get(&id))
			.map(String::as_str)
			.unwrap_or("?");
		println!(
			"  - {} [{}] club category {club_category}",
			e.get_str("title").unwrap_or("?"),
			e.get_str("category").unwrap_or("?"),
		);
	}

	let mut pairs: HashMap<(String, String), u64> = HashMap::new();
	for e in projected(&documents(&stores.event_db, EVENTS), doc! { "club_id": 1, "category": 1 }).await? {
		let Some(club_category) = object_id(&e, "club_id").and_then(|id| snap.clubs.get(&id)) else {
			continue;
		};
		let event_category = string(&e, "category").unwrap_or_default();
		*pairs.entry((club_category.clone(), event_category)).or_default() += 1;
	}
	let mut pairs: Vec<_> = pairs.into_iter().collect();
	pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
	if !pairs.is_empty() {
		println!("Club category / event category pairs:");
		for ((club, event), count) in pairs.iter().take(n.max(10)) {
			println!("  - {club} / {event}: {count}");
		}
	}
	Ok(())
}

pub async fn run_check(cfg: &SeedCfg, opts: CheckOpts) -> Result<()> {
	let stores = Stores::connect(cfg).await?;

	let volumes = volumes(&stores).await?;
	let service_totals = service_totals(&volumes);
	let total = service_totals.values().sum();
	print_volumes(&volumes);
	println!("Totals:");
	for (service, n) in &service_totals {
		println!("  {service}: {n}");
	}
	println!("  overall: {total}");

	let snap = load_snapshot(&stores).await?;
	info!(
		"loaded {} users, {} clubs, {} events for the relationship audit",
		snap.users.len(),
		snap.clubs.len(),
		snap.events.len()
	);
	let relations = audit_relations(&snap);
	print_relations(&relations);

	if opts.samples > 0 {
		print_samples(&stores, &snap, opts.samples).await?;
	}

	let readiness = Readiness::from_total(total);
	println!("Readiness: {}", readiness.describe());

	let report = CheckReport {
		generated_at: OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default(),
		volumes,
		service_totals,
		total,
		relations,
		readiness,
	};
	if let Some(path) = &opts.json_out {
		write_json_report(path, &report)?;
		println!("Report written to {}", display(path));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn snapshot() -> (Snapshot, ObjectId, ObjectId) {
		let club = ObjectId::new();
		let event = ObjectId::new();
		let snap = Snapshot {
			users: HashSet::from([String::from("u1"), String::from("u2")]),
			clubs: HashMap::from([(club, String::from("Công nghệ"))]),
			memberships: vec![(Some(club), Some(String::from("u1"))), (Some(club), Some(String::from("u2")))],
			events: vec![(event, Some(club), vec![String::from("Công nghệ"), String::from("Workshop")])],
			registrations: vec![(Some(event), Some(String::from("u2")))],
		};
		(snap, club, event)
	}

	#[test]
	fn consistent_data_has_no_orphans() {
		let (snap, _, _) = snapshot();
		let relations = audit_relations(&snap);
		assert_eq!(relations.len(), 6);
		assert!(relations.iter().all(|r| r.active && r.orphans == 0));
	}

	#[test]
	fn dangling_references_are_counted() {
		let (mut snap, club, event) = snapshot();
		snap.memberships.push((Some(ObjectId::new()), Some(String::from("ghost"))));
		snap.events.push((ObjectId::new(), Some(club), vec![String::from("Sports")]));
		snap.events.push((ObjectId::new(), None, vec![]));
		snap.registrations.push((Some(ObjectId::new()), Some(String::from("u1"))));
		snap.registrations.push((Some(event), None));

		let by_name: HashMap<&str, usize> = audit_relations(&snap).into_iter().map(|r| (r.name, r.orphans)).collect();
		assert_eq!(by_name["memberships -> users"], 1);
		assert_eq!(by_name["memberships -> clubs"], 1);
		assert_eq!(by_name["events -> clubs"], 1);
		assert_eq!(by_name["event tags -> club category"], 1);
		assert_eq!(by_name["registrations -> users"], 1);
		assert_eq!(by_name["registrations -> events"], 1);
	}

	#[test]
	fn empty_collections_are_inactive() {
		let relations = audit_relations(&Snapshot::default());
		assert!(relations.iter().all(|r| !r.active && r.orphans == 0));
	}

	#[test]
	fn readiness_thresholds() {
		assert_eq!(Readiness::from_total(501), Readiness::Ready);
		assert_eq!(Readiness::from_total(500), Readiness::Basic);
		assert_eq!(Readiness::from_total(201), Readiness::Basic);
		assert_eq!(Readiness::from_total(200), Readiness::Insufficient);
		assert_eq!(Readiness::from_total(0), Readiness::Insufficient);
	}

	#[test]
	fn totals_are_grouped_by_service() {
		let volume = |service, total| Volume {
			service,
			collection: "x",
			total,
			breakdown: BTreeMap::new(),
		};
		let totals = service_totals(&[volume("auth", 10), volume("club", 5), volume("club", 7), volume("event", 1)]);
		assert_eq!(totals["auth"], 10);
		assert_eq!(totals["club"], 12);
		assert_eq!(totals["event"], 1);
	}

	#[test]
	fn role_rows_tolerate_null_roles() {
		assert_eq!(role_count(Some(String::from("admin")), 3), (String::from("admin"), 3));
		assert_eq!(role_count(None, 2), (String::from("(none)"), 2));
		assert_eq!(role_count(Some(String::from("user")), -1).1, 0);
	}

	#[test]
	fn ids_are_read_as_strings_or_object_ids() {
		let oid = ObjectId::new();
		let d = doc! { "a": "u1", "b": oid, "c": 3 };
		assert_eq!(string(&d, "a").as_deref(), Some("u1"));
		assert_eq!(string(&d, "b"), Some(oid.to_hex()));
		assert_eq!(string(&d, "c"), None);
		assert_eq!(object_id(&d, "b"), Some(oid));
	}
}
