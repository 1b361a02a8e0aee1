//! Logging setup for programs and tests that embed the search engine.
//!
//! The library only emits `tracing` events. Call [`init`] to print them when the
//! host application has no subscriber of its own.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Environment variable read for a filter directive, before `RUST_LOG`.
pub const LOG_ENV: &str = "EMOJI_SEARCH_LOG";

static INIT: Once = Once::new();

/// Install a compact stderr subscriber. Safe to call multiple times.
///
/// The filter comes from `EMOJI_SEARCH_LOG`, then `RUST_LOG`, then defaults to
/// this crate's events at `info` (`debug` under a test runner).
pub fn init() {
    INIT.call_once(|| {
        let under_test =
            std::env::var("NEXTEST").is_ok() || std::env::var("CARGO_TARGET_TMPDIR").is_ok();
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new(default_directive(under_test)));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(false)
            .compact();

        let result = if under_test {
            builder.with_test_writer().try_init()
        } else {
            builder.with_writer(std::io::stderr).try_init()
        };
        if let Err(e) = result {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}

fn default_directive(under_test: bool) -> String {
    let level = if under_test { "debug" } else { "info" };
    format!("{}={level}", env!("CARGO_CRATE_NAME"))
}
