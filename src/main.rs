use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use rust_dotenv::dotenv::DotEnv;

mod catalog;
mod check;
mod config;
mod core;
mod health;
mod images;
mod logging;
mod models;
mod plan;
mod preview;
mod refs;
mod report;
mod scaffold;
mod seed;
mod setup;
mod stats;
mod text;

use check::{CheckOpts, run_check};
use config::SeedCfg;
use crate::core::{print_connections, test_connections};
use plan::{SEED_PLAN_PATH, load_plan};
use seed::{SeedOpts, Step, run_seed};
use setup::run_setup;

#[derive(Parser, Debug)]
#[command(version, about = "Seed the student-club platform with Vietnamese test data")]
pub struct Cli {
	/// Debug logging, raised over `LOG_LEVEL` and `RUST_LOG`
	#[arg(short, long, global = true)]
	verbose: bool,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Write `.env` and `database/seed.toml` templates
	Init,
	/// Create the users table and document-store indexes
	Setup,
	/// Test the PostgreSQL and MongoDB connections
	Ping,
	Seed {
		/// `all`, or one of: users, clubs, events, campaigns, memberships, registrations
		#[arg(default_value = "all", value_parser = parse_target)]
		target: Target,
		#[arg(long)]
		fail_fast: bool,
		#[arg(long)]
		json_out: Option<PathBuf>,
	},
	Check {
		#[arg(long, default_value_t = 0)]
		samples: usize,
		#[arg(long)]
		json_out: Option<PathBuf>,
	},
	Preview {
		#[arg(long, default_value = "Công nghệ")]
		category: String,
		#[arg(long, default_value = "Workshop")]
		event_category: String,
	},
	Health {
		#[arg(long)]
		json_out: Option<PathBuf>,
	},
}

#[derive(Debug, Clone, Copy)]
enum Target {
	All,
	Only(Step),
}

fn parse_target(raw: &str) -> Result<Target, String> {
	if raw.eq_ignore_ascii_case("all") {
		return Ok(Target::All);
	}
	Step::from_str(raw, true).map(Target::Only)
}

fn load_env() -> DotEnv {
	// Load .env in CWD if present, ignore missing
	DotEnv::new("")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let args = Cli::parse();
	let env = load_env();
	let cfg = SeedCfg::from_env(&env);
	logging::init(cfg.log_level(), args.verbose);
	cfg.log_notices();

	match args.command {
		Commands::Init => {
			scaffold::scaffold(Path::new("."))?;
		}
		Commands::Setup => run_setup(&cfg).await?,
		Commands::Ping => {
			let statuses = test_connections(&cfg).await;
			print_connections(&statuses);
			let failed = statuses.iter().filter(|s| !s.ok).count();
			if failed > 0 {
				anyhow::bail!("{failed} of {} connections failed", statuses.len());
			}
		}
		Commands::Seed {
			target,
			fail_fast,
			json_out,
		} => {
			let plan = load_plan(Path::new(SEED_PLAN_PATH))?;
			run_seed(
				&cfg,
				&plan,
				SeedOpts {
					only: match target {
						Target::All => None,
						Target::Only(step) => Some(step),
					},
					fail_fast,
					json_out,
				},
			)
			.await?;
		}
		Commands::Check { samples, json_out } => run_check(&cfg, CheckOpts { samples, json_out }).await?,
		Commands::Preview {
			category,
			event_category,
		} => {
			let urls = cfg.image_urls();
			let preview = preview::build_preview(&mut rand::thread_rng(), &urls, &category, &event_category);
			preview::print_preview(&preview, &category, &event_category, &urls);
		}
		Commands::Health { json_out } => {
			let plan = load_plan(Path::new(SEED_PLAN_PATH))?;
			health::run_health(&plan.health.services, json_out).await?;
		}
	}

	Ok(())
}
