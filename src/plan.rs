use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::display;

pub const SEED_PLAN_PATH: &str = "database/seed.toml";

/// Volume and batching knobs for a seeding run. Every field has a default so a
/// missing or partial `database/seed.toml` is fine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedPlan {
	#[serde(default)]
	pub rng_seed: Option<u64>,
	#[serde(default)]
	pub users: UserVolume,
	#[serde(default)]
	pub memberships: MembershipVolume,
	#[serde(default)]
	pub registrations: RegistrationVolume,
	#[serde(default)]
	pub batches: Batches,
	#[serde(default)]
	pub health: HealthTargets,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserVolume {
	/// Regular (non-admin) accounts, further capped by `SEED_BATCH_SIZE`.
	#[serde(default = "default_user_count")]
	pub count: usize,
}

impl Default for UserVolume {
	fn default() -> Self {
		Self {
			count: default_user_count(),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MembershipVolume {
	#[serde(default = "default_min_per_club")]
	pub min_per_club: usize,
	#[serde(default = "default_max_per_club")]
	pub max_per_club: usize,
}

impl Default for MembershipVolume {
	fn default() -> Self {
		Self {
			min_per_club: default_min_per_club(),
			max_per_club: default_max_per_club(),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistrationVolume {
	/// Share of an event's capacity that registers, drawn per event.
	#[serde(default = "default_fill_min")]
	pub fill_min: f64,
	#[serde(default = "default_fill_max")]
	pub fill_max: f64,
}

impl Default for RegistrationVolume {
	fn default() -> Self {
		Self {
			fill_min: default_fill_min(),
			fill_max: default_fill_max(),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Batches {
	#[serde(default = "default_event_batch")]
	pub events: usize,
	#[serde(default = "default_membership_batch")]
	pub memberships: usize,
	#[serde(default = "default_registration_batch")]
	pub registrations: usize,
	#[serde(default = "default_campaign_batch")]
	pub campaigns: usize,
}

impl Default for Batches {
	fn default() -> Self {
		Self {
			events: default_event_batch(),
			memberships: default_membership_batch(),
			registrations: default_registration_batch(),
			campaigns: default_campaign_batch(),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HealthTargets {
	#[serde(default = "default_services")]
	pub services: Vec<ServiceTarget>,
}

impl Default for HealthTargets {
	fn default() -> Self {
		Self {
			services: default_services(),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceTarget {
	pub name: String,
	pub url: String,
}

fn default_user_count() -> usize {
	100
}

fn default_min_per_club() -> usize {
	5
}

fn default_max_per_club() -> usize {
	25
}

fn default_fill_min() -> f64 {
	0.4
}

fn default_fill_max() -> f64 {
	0.9
}

fn default_event_batch() -> usize {
	50
}

fn default_membership_batch() -> usize {
	50
}

fn default_registration_batch() -> usize {
	100
}

fn default_campaign_batch() -> usize {
	25
}

fn default_services() -> Vec<ServiceTarget> {
	[
		("auth-service", "http://localhost:3001/health"),
		("club-service", "http://localhost:3002/health"),
		("event-service", "http://localhost:3003/health"),
		("finance-service", "http://localhost:3004/health"),
		("notify-service", "http://localhost:3005/health"),
		("user-service", "http://localhost:3006/health"),
		("frontend", "http://localhost:3000"),
	]
	.into_iter()
	.map(|(name, url)| ServiceTarget {
		name: name.to_string(),
		url: url.to_string(),
	})
	.collect()
}

impl SeedPlan {
	fn validate(&self) -> Result<()> {
		let m = &self.memberships;
		if m.min_per_club == 0 || m.min_per_club > m.max_per_club {
			bail!(
				"memberships.min_per_club ({}) must be between 1 and max_per_club ({})",
				m.min_per_club,
				m.max_per_club
			);
		}
		let r = &self.registrations;
		if !(0.0..=1.0).contains(&r.fill_min) || !(0.0..=1.0).contains(&r.fill_max) || r.fill_min > r.fill_max {
			bail!(
				"registrations.fill_min/fill_max must satisfy 0 <= {} <= {} <= 1",
				r.fill_min,
				r.fill_max
			);
		}
		let b = &self.batches;
		if [b.events, b.memberships, b.registrations, b.campaigns].contains(&0) {
			bail!("batch sizes must be positive");
		}
		Ok(())
	}
}

pub fn load_plan(path: &Path) -> Result<SeedPlan> {
	if !path.exists() {
		return Ok(SeedPlan::default());
	}

	let raw = fs::read_to_string(path).with_context(|| format!("reading {}", display(path)))?;
	let plan: SeedPlan = toml::from_str(&raw).with_context(|| format!("parsing {}", display(path)))?;
	plan.validate().with_context(|| format!("validating {}", display(path)))?;
	Ok(plan)
}
