//! Logging helper
//!
//! Used by all binaries to log consistently.

// Imports
use {
	std::{
		env,
		io::{self, IsTerminal},
	},
	tracing::level_filters::LevelFilter,
	tracing_subscriber::{EnvFilter, prelude::*},
};

/// Initializes logging.
///
/// Logs to stderr, filtered by `RUST_LOG` (`info` by default). Colors are
/// used when stderr is a terminal, unless overridden by `RUST_LOG_COLOR`.
///
/// # Panics
/// Panics if a global subscriber was already set.
pub fn init() {
	let filter = EnvFilter::builder()
		.with_default_directive(LevelFilter::INFO.into())
		.from_env_lossy();
	let layer = tracing_subscriber::fmt::layer()
		.with_writer(io::stderr)
		.with_ansi(self::use_color())
		.with_filter(filter);

	tracing_subscriber::registry().with(layer).init();
}

/// Returns whether to log with colors
fn use_color() -> bool {
	match env::var("RUST_LOG_COLOR") {
		Ok(value) => self::parse_bool(&value),
		Err(_) => io::stderr().is_terminal(),
	}
}

/// Parses a boolean environment variable
fn parse_bool(value: &str) -> bool {
	matches!(value.trim().to_uppercase().as_str(), "1" | "YES" | "TRUE")
}
