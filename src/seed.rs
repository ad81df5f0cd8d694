mod campaigns;
mod clubs;
mod events;
mod memberships;
mod registrations;
mod users;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, anyhow, bail};
use clap::ValueEnum;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use time::{Date, Month, OffsetDateTime, format_description::well_known::Rfc3339};
use tracing::{error, info, warn};

use crate::config::SeedCfg;
use crate::core::{Stores, print_connections, test_connections};
use crate::plan::SeedPlan;
use crate::report::write_json_report;

/// One seeding step. Declaration order is run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
	Users,
	Clubs,
	Events,
	Campaigns,
	Memberships,
	Registrations,
}

pub const PLAN: &[Step] = &[
	Step::Users,
	Step::Clubs,
	Step::Events,
	Step::Campaigns,
	Step::Memberships,
	Step::Registrations,
];

impl Step {
	pub fn label(self) -> &'static str {
		match self {
			Step::Users => "Authentication Service",
			Step::Clubs => "Club Service",
			Step::Events => "Event Service",
			Step::Campaigns => "Recruitment Campaigns",
			Step::Memberships => "Club Memberships",
			Step::Registrations => "Event Registrations",
		}
	}
}

#[derive(Debug, Clone, Default)]
pub struct SeedOpts {
	/// Run a single step instead of the whole plan.
	pub only: Option<Step>,
	pub fail_fast: bool,
	pub json_out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
	Complete,
	Partial,
	Failure,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
	pub step: Step,
	pub label: &'static str,
	pub passed: bool,
	pub inserted: usize,
	pub duration_ms: u128,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeedReport {
	pub started_at: String,
	pub finished_at: String,
	pub duration_ms: u128,
	pub rng_seed: u64,
	pub passed: usize,
	pub total: usize,
	pub success_rate: f64,
	pub verdict: Verdict,
	pub interrupted: bool,
	pub steps: Vec<StepReport>,
}

impl SeedReport {
	fn summarize(&mut self) {
		self.total = self.steps.len();
		self.passed = self.steps.iter().filter(|s| s.passed).count();
		self.success_rate = if self.total == 0 {
			0.0
		} else {
			self.passed as f64 * 100.0 / self.total as f64
		};
		self.verdict = if self.total > 0 && self.passed == self.total && !self.interrupted {
			Verdict::Complete
		} else if self.passed > 0 {
			Verdict::Partial
		} else {
			Verdict::Failure
		};
	}
}

/// Everything a step needs: the open stores plus settings.
pub struct SeedCtx<'a> {
	pub stores: Stores,
	pub cfg: &'a SeedCfg,
	pub plan: &'a SeedPlan,
}

pub async fn run_seed(cfg: &SeedCfg, plan: &SeedPlan, opts: SeedOpts) -> Result<()> {
	let statuses = test_connections(cfg).await;
	print_connections(&statuses);
	if statuses.iter().any(|s| !s.ok) {
		bail!("connection test failed, check .env before seeding");
	}

	let mut ctx = SeedCtx {
		stores: Stores::connect(cfg).await?,
		cfg,
		plan,
	};
	let rng_seed = cfg.rng_seed().or(plan.rng_seed).unwrap_or_else(rand::random);
	let mut rng = StdRng::seed_from_u64(rng_seed);
	info!("seeding with rng seed {rng_seed}");

	let steps = match opts.only {
		Some(step) => vec![step],
		None => PLAN.to_vec(),
	};

	let started_at = OffsetDateTime::now_utc();
	let run_start = Instant::now();
	let mut reports = Vec::with_capacity(steps.len());
	let mut interrupted = false;

	let ctrl_c = tokio::signal::ctrl_c();
	tokio::pin!(ctrl_c);

	for (n, step) in steps.iter().copied().enumerate() {
		println!("[{}/{}] {}", n + 1, steps.len(), step.label());
		let step_start = Instant::now();

		let outcome = tokio::select! {
			result = tokio::time::timeout(cfg.step_timeout(), run_step(step, &mut ctx, &mut rng)) => result,
			_ = &mut ctrl_c => {
				warn!("interrupted during {}", step.label());
				interrupted = true;
				break;
			}
		};
		let result = outcome.unwrap_or_else(|_| Err(anyhow!("timed out after {}s", cfg.step_timeout().as_secs())));

		let report = match result {
			Ok(inserted) => {
				info!("{} completed: {inserted} records", step.label());
				StepReport {
					step,
					label: step.label(),
					passed: true,
					inserted,
					duration_ms: step_start.elapsed().as_millis(),
					error: None,
				}
			}
			Err(e) => {
				error!("{} failed: {e:#}", step.label());
				StepReport {
					step,
					label: step.label(),
					passed: false,
					inserted: 0,
					duration_ms: step_start.elapsed().as_millis(),
					error: Some(format!("{e:#}")),
				}
			}
		};
		let failed = !report.passed;
		reports.push(report);
		if failed && opts.fail_fast {
			warn!("stopping after first failure");
			break;
		}
	}

	let mut report = SeedReport {
		started_at: started_at.format(&Rfc3339)?,
		finished_at: OffsetDateTime::now_utc().format(&Rfc3339)?,
		duration_ms: run_start.elapsed().as_millis(),
		rng_seed,
		passed: 0,
		total: 0,
		success_rate: 0.0,
		verdict: Verdict::Failure,
		interrupted,
		steps: reports,
	};
	report.summarize();

	print_human_report(&report);
	if let Some(path) = &opts.json_out {
		write_json_report(path, &report)?;
	}

	if report.interrupted {
		bail!("seeding interrupted");
	}
	if report.passed < report.total {
		bail!("{} of {} seeding steps failed", report.total - report.passed, report.total);
	}
	Ok(())
}

async fn run_step(step: Step, ctx: &mut SeedCtx<'_>, rng: &mut StdRng) -> Result<usize> {
	let urls = ctx.cfg.image_urls();
	let now = OffsetDateTime::now_utc();
	let plan = ctx.plan;
	match step {
		Step::Users => {
			let count = plan.users.count.min(ctx.cfg.batch_size());
			users::seed(&mut ctx.stores.pg, rng, &urls, count).await
		}
		Step::Clubs => clubs::seed(&ctx.stores, rng, &urls, now).await,
		Step::Events => events::seed(&ctx.stores, rng, &urls, plan.batches.events, now).await,
		Step::Campaigns => campaigns::seed(&ctx.stores, rng, plan.batches.campaigns, now).await,
		Step::Memberships => memberships::seed(&ctx.stores, rng, plan, now).await,
		Step::Registrations => registrations::seed(&ctx.stores, rng, plan, now).await,
	}
}

pub fn print_human_report(report: &SeedReport) {
	println!("Seeding summary:");
	println!("  duration: {:.1}s", report.duration_ms as f64 / 1000.0);
	println!(
		"  steps: {}/{} passed ({:.1}%)",
		report.passed, report.total, report.success_rate
	);
	for step in &report.steps {
		let status = if step.passed { "PASS" } else { "FAIL" };
		println!("  {status} {:<24} {:>6} records {:>7}ms", step.label, step.inserted, step.duration_ms);
		if let Some(e) = &step.error {
			println!("      {e}");
		}
	}
	let verdict = match report.verdict {
		Verdict::Complete => "all services seeded",
		Verdict::Partial => "partially seeded, rerun the failed steps",
		Verdict::Failure => "nothing was seeded",
	};
	println!("  result: {verdict}");
	if report.interrupted {
		println!("  run was interrupted");
	}
}

pub(crate) fn pick<R: Rng + ?Sized>(rng: &mut R, items: &[&'static str]) -> &'static str {
	items.choose(rng).copied().unwrap_or_default()
}

/// Draw from `(value, weight)` pairs.
pub(crate) fn weighted<R: Rng + ?Sized, T: Copy>(rng: &mut R, choices: &[(T, u32)]) -> Option<T> {
	choices.choose_weighted(rng, |(_, w)| *w).ok().map(|(v, _)| *v)
}

pub(crate) fn calendar_date(year: i32, month: u8, day: u8) -> Result<Date> {
	let month = Month::try_from(month).with_context(|| format!("invalid month {month}"))?;
	Date::from_calendar_date(year, month, day).with_context(|| format!("invalid date {year}-{month}-{day}"))
}

pub(crate) fn bson_time(at: OffsetDateTime) -> bson::DateTime {
	bson::DateTime::from_time_0_3(at)
}
