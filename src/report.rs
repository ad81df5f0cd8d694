use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

pub fn write_json_report<T: Serialize>(path: &Path, report: &T) -> Result<()> {
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent)
			.with_context(|| format!("creating report directory {}", parent.display()))?;
	}
	let raw = serde_json::to_string_pretty(report).context("serializing report json")?;
	fs::write(path, format!("{raw}\n"))
		.with_context(|| format!("writing report file {}", path.display()))?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn report_directories_are_created() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("reports/nested/seed.json");
		write_json_report(&path, &json!({ "passed": 6, "total": 6 })).unwrap();

		let raw = fs::read_to_string(&path).unwrap();
		assert!(raw.ends_with("}\n"));
		assert!(raw.contains("\"passed\": 6"));
	}
}
