//! Logging setup shared by both binaries.
//!
//! `level` is an `EnvFilter` directive string (usually `RUST_LOG`); invalid
//! directives fall back to `info`. `format` is `text` or `json`.

use tracing_subscriber::EnvFilter;

/// Where log lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stdout,
    /// Keeps stdout free for command output.
    Stderr,
}

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber writing to stdout.
pub fn init(level: &str, format: &str) {
    init_with_target(level, format, LogTarget::Stdout);
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init_with_target(level: &str, format: &str, target: LogTarget) {
    let builder = tracing_subscriber::fmt().with_env_filter(filter(level));

    let result = match (format, target) {
        ("json", LogTarget::Stdout) => builder.json().try_init(),
        ("json", LogTarget::Stderr) => builder.json().with_writer(std::io::stderr).try_init(),
        (_, LogTarget::Stdout) => builder.try_init(),
        (_, LogTarget::Stderr) => builder.with_writer(std::io::stderr).try_init(),
    };

    if result.is_err() {
        tracing::debug!("Global subscriber already installed");
    }
}
