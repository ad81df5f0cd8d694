use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use serde::Serialize;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tracing::debug;

use crate::core::display;
use crate::plan::ServiceTarget;
use crate::report::write_json_report;

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Serialize)]
pub struct ServiceHealth {
	pub name: String,
	pub url: String,
	pub healthy: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status: Option<u16>,
	pub elapsed_ms: u128,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
	pub checked_at: String,
	pub healthy: usize,
	pub total: usize,
	pub services: Vec<ServiceHealth>,
}

/// Anything the server answered without a 5xx counts as up.
pub fn is_healthy(status: u16) -> bool {
	status < 500
}

async fn probe(client: &reqwest::Client, target: &ServiceTarget) -> ServiceHealth {
	let start = Instant::now();
	let result = client.get(&target.url).send().await;
	let elapsed_ms = start.elapsed().as_millis();

	match result {
		Ok(resp) => {
			let status = resp.status().as_u16();
			debug!("{} answered {status} in {elapsed_ms}ms", target.name);
			ServiceHealth {
				name: target.name.clone(),
				url: target.url.clone(),
				healthy: is_healthy(status),
				status: Some(status),
				elapsed_ms,
				error: None,
			}
		}
		Err(e) => ServiceHealth {
			name: target.name.clone(),
			url: target.url.clone(),
			healthy: false,
			status: None,
			elapsed_ms,
			error: Some(if e.is_timeout() {
				String::from("timeout")
			} else if e.is_connect() {
				String::from("connection refused")
			} else {
				e.to_string()
			}),
		},
	}
}

pub async fn check_services(targets: &[ServiceTarget]) -> Result<HealthReport> {
	let client = reqwest::Client::builder()
		.timeout(PROBE_TIMEOUT)
		.build()
		.context("building HTTP client")?;

	let mut services = Vec::with_capacity(targets.len());
	for target in targets {
		services.push(probe(&client, target).await);
	}
	Ok(HealthReport {
		checked_at: OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default(),
		healthy: services.iter().filter(|s| s.healthy).count(),
		total: services.len(),
		services,
	})
}

fn print_report(report: &HealthReport) {
	println!("{:<18} {:<10} {:>8}  URL", "SERVICE", "STATUS", "TIME");
	for s in &report.services {
		let state = match (s.healthy, s.status) {
			(true, Some(code)) => format!("UP {code}"),
			(false, Some(code)) => format!("DOWN {code}"),
			_ => String::from("DOWN"),
		};
		println!("{:<18} {:<10} {:>6}ms  {}", s.name, state, s.elapsed_ms, s.url);
		if let Some(e) = &s.error {
			println!("{:<18} {e}", "");
		}
	}
	println!("{}/{} services healthy", report.healthy, report.total);
}

pub async fn run_health(targets: &[ServiceTarget], json_out: Option<PathBuf>) -> Result<()> {
	let report = check_services(targets).await?;
	print_report(&report);

	if let Some(path) = &json_out {
		write_json_report(path, &report)?;
		println!("Report written to {}", display(path));
	}

	if report.healthy < report.total {
		bail!("{} of {} services are unhealthy", report.total - report.healthy, report.total);
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn client_errors_still_count_as_up() {
		assert!(is_healthy(200));
		assert!(is_healthy(404));
		assert!(is_healthy(499));
		assert!(!is_healthy(500));
		assert!(!is_healthy(503));
	}

	#[tokio::test]
	async fn unreachable_services_are_down() {
		let targets = vec![ServiceTarget {
			name: String::from("nowhere"),
			url: String::from("http://127.0.0.1:1/health"),
		}];
		let report = check_services(&targets).await.unwrap();
		assert_eq!(report.total, 1);
		assert_eq!(report.healthy, 0);
		assert!(report.services[0].status.is_none());
		assert!(report.services[0].error.is_some());
	}

	#[tokio::test]
	async fn empty_target_list_is_healthy() {
		let report = check_services(&[]).await.unwrap();
		assert_eq!(report.total, 0);
		run_health(&[], None).await.unwrap();
	}
}
