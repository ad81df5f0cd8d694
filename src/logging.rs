use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Map a `LOG_LEVEL` value (`INFO`, `WARNING`, ...) to an `EnvFilter` directive.
fn directive(level: &str) -> String {
	match level.trim().to_ascii_lowercase().as_str() {
		"warning" => String::from("warn"),
		"critical" | "fatal" => String::from("error"),
		other => other.to_string(),
	}
}

/// `RUST_LOG` wins over `LOG_LEVEL`; `verbose` then raises either to debug.
fn build_filter(rust_log: Option<&str>, level: &str, verbose: bool) -> EnvFilter {
	let filter = rust_log
		.filter(|spec| !spec.trim().is_empty())
		.and_then(|spec| EnvFilter::try_new(spec).ok())
		.unwrap_or_else(|| EnvFilter::try_new(directive(level)).unwrap_or_else(|_| EnvFilter::new("info")));
	if verbose {
		filter.add_directive(LevelFilter::DEBUG.into())
	} else {
		filter
	}
}

/// Install the global subscriber.
pub fn init(level: &str, verbose: bool) {
	let rust_log = std::env::var("RUST_LOG").ok();
	let filter = build_filter(rust_log.as_deref(), level, verbose);
	let _ = tracing_subscriber::fmt()
		.compact()
		.with_target(false)
		.with_env_filter(filter)
		.try_init();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn python_style_levels_are_translated() {
		assert_eq!(directive("WARNING"), "warn");
		assert_eq!(directive("DEBUG"), "debug");
		assert_eq!(directive("CRITICAL"), "error");
	}

	#[test]
	fn rust_log_wins_over_log_level() {
		let filter = build_filter(Some("error"), "DEBUG", false);
		assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
		let filter = build_filter(Some(" "), "WARNING", false);
		assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
	}

	#[test]
	fn verbose_raises_any_source_to_debug() {
		assert_eq!(build_filter(None, "INFO", true).max_level_hint(), Some(LevelFilter::DEBUG));
		assert_eq!(build_filter(Some("warn"), "INFO", true).max_level_hint(), Some(LevelFilter::DEBUG));
	}
}
