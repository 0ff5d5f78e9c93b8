//! Logging setup for hummingbird.
//!
//! Log output goes to stderr so that `show --json` and `search` output on
//! stdout stays machine readable.
//!
//! ## Environment Variable Priority
//!
//! 1. **`HUMMINGBIRD_LOG`** - a bare level (`debug`) applies to hummingbird
//!    only; anything with `=`, `:` or `,` is used as a full filter
//! 2. **`RUST_LOG`** - standard tracing filter, used as-is
//! 3. **Default** - `warn` globally, `info` for hummingbird, raised by `-v`

use std::env;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable for hummingbird-specific log control.
pub const LOG_ENV: &str = "HUMMINGBIRD_LOG";

/// Initialize logging on stderr.
///
/// Safe to call multiple times; later calls leave the first subscriber in place.
pub fn init(verbosity: u8) {
    let directive = filter_directive(
        env::var(LOG_ENV).ok().as_deref(),
        env::var("RUST_LOG").ok().as_deref(),
        verbosity,
    );

    let _ = fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_writer(std::io::stderr)
        .try_init();
}

/// Choose the filter directive from the environment and the `-v` count.
fn filter_directive(app_log: Option<&str>, rust_log: Option<&str>, verbosity: u8) -> String {
    if let Some(app_log) = app_log.filter(|v| !v.trim().is_empty()) {
        return expand_app_log(app_log.trim());
    }

    if let Some(rust_log) = rust_log.filter(|v| !v.trim().is_empty()) {
        return rust_log.to_string();
    }

    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    format!("warn,hummingbird={level}")
}

fn expand_app_log(app_log: &str) -> String {
    if app_log.contains('=') || app_log.contains(':') || app_log.contains(',') {
        return app_log.to_string();
    }
    format!("warn,hummingbird={app_log}")
}
