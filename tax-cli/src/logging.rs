use std::io;

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset. Rejected input and batch summaries
/// stay quiet unless asked for.
pub const DEFAULT_FILTER: &str = "warn";

fn make_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialise the tracing subscriber. Call once at startup.
///
/// * Honours `RUST_LOG` when set.
/// * Writes to stderr so stdout carries only prompts, reports and CSV.
/// * Strips timestamps and target names to keep CLI output clean.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(make_filter())
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .init();
}
