use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use bson::{Document, doc};
use mongodb::{Client, Collection, Database, options::ClientOptions};
use serde::Serialize;
use tokio_postgres::NoTls;
use tracing::{debug, error, info, warn};

use crate::config::{SeedCfg, redact};

/// The three stores a seeding run writes to.
pub struct Stores {
	pub pg: tokio_postgres::Client,
	pub club_db: Database,
	pub event_db: Database,
}

impl Stores {
	pub async fn connect(cfg: &SeedCfg) -> Result<Self> {
		Ok(Self {
			pg: connect_postgres(cfg.postgres_url()).await?,
			club_db: connect_mongo(cfg.club_uri(), cfg.club_db()).await?,
			event_db: connect_mongo(cfg.event_uri(), cfg.event_db()).await?,
		})
	}
}

pub async fn connect_postgres(url: &str) -> Result<tokio_postgres::Client> {
	let (client, connection) = tokio_postgres::connect(url, NoTls)
		.await
		.with_context(|| format!("connecting to PostgreSQL at {}", redact(url)))?;

	tokio::spawn(async move {
		if let Err(e) = connection.await {
			error!("PostgreSQL connection closed: {e}");
		}
	});

	debug!("connected to PostgreSQL at {}", redact(url));
	Ok(client)
}

/// Connect and ping. Server selection gives up after five seconds.
pub async fn connect_mongo(uri: &str, db_name: &str) -> Result<Database> {
	let mut options = ClientOptions::parse(uri)
		.await
		.with_context(|| format!("parsing MongoDB URI {}", redact(uri)))?;
	options.app_name = Some(String::from("clubseed"));
	options.server_selection_timeout = Some(Duration::from_secs(5));

	let client = Client::with_options(options).context("creating MongoDB client")?;
	let db = client.database(db_name);
	db.run_command(doc! { "ping": 1 }, None)
		.await
		.with_context(|| format!("pinging MongoDB database {db_name}"))?;

	debug!("connected to MongoDB database {db_name}");
	Ok(db)
}

#[derive(Debug, Clone, Serialize)]
pub struct ConnectionStatus {
	pub store: &'static str,
	pub target: String,
	pub ok: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}

impl ConnectionStatus {
	fn from_result<T>(store: &'static str, target: String, result: Result<T>) -> Self {
		match result {
			Ok(_) => Self {
				store,
				target,
				ok: true,
				error: None,
			},
			Err(e) => Self {
				store,
				target,
				ok: false,
				error: Some(format!("{e:#}")),
			},
		}
	}
}

/// Try every store independently and report each outcome.
pub async fn test_connections(cfg: &SeedCfg) -> Vec<ConnectionStatus> {
	let pg = async {
		let client = connect_postgres(cfg.postgres_url()).await?;
		client.simple_query("SELECT 1").await.context("running SELECT 1")?;
		Ok::<_, anyhow::Error>(())
	};
	vec![
		ConnectionStatus::from_result("postgresql", redact(cfg.postgres_url()), pg.await),
		ConnectionStatus::from_result(
			"mongodb_club",
			redact(cfg.club_uri()),
			connect_mongo(cfg.club_uri(), cfg.club_db()).await,
		),
		ConnectionStatus::from_result(
			"mongodb_event",
			redact(cfg.event_uri()),
			connect_mongo(cfg.event_uri(), cfg.event_db()).await,
		),
	]
}

pub fn print_connections(statuses: &[ConnectionStatus]) {
	println!("Connections:");
	for status in statuses {
		let verdict = if status.ok { "OK" } else { "FAILED" };
		println!("  {:<14} {:<7} {}", status.store, verdict, status.target);
		if let Some(e) = &status.error {
			println!("      {e}");
		}
	}
}

pub async fn clear<T: Send + Sync>(coll: &Collection<T>) -> Result<u64> {
	let result = coll
		.delete_many(doc! {}, None)
		.await
		.with_context(|| format!("clearing {}", coll.name()))?;
	info!("cleared {} existing {}", result.deleted_count, coll.name());
	Ok(result.deleted_count)
}

/// Insert `docs` in chunks of `batch_size`, logging every batch.
pub async fn insert_batched<T>(coll: &Collection<T>, docs: &[T], batch_size: usize) -> Result<usize>
where
	T: Serialize + Send + Sync,
{
	if docs.is_empty() {
		warn!("nothing to insert into {}", coll.name());
		return Ok(0);
	}

	let mut inserted = 0;
	for (n, chunk) in docs.chunks(batch_size.max(1)).enumerate() {
		let result = coll
			.insert_many(chunk, None)
			.await
			.with_context(|| format!("inserting batch {} into {}", n + 1, coll.name()))?;
		inserted += result.inserted_ids.len();
		info!("inserted batch {}: {} {}", n + 1, result.inserted_ids.len(), coll.name());
	}
	Ok(inserted)
}

pub fn documents(db: &Database, name: &str) -> Collection<Document> {
	db.collection::<Document>(name)
}

pub fn display(p: &Path) -> String {
	p.to_string_lossy().replace('\\', "/")
}
