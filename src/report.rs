// src/report.rs

//! Shared reporting trait and implementations
//!
//! Download and extraction progress is communicated through two sinks: one
//! informational, one for per-item failures. The `Reporter` trait defines
//! that interface; implementations route the messages to tracing or drop
//! them entirely.
//!
//! # Example
//!
//! ```ignore
//! use aptsync::report::{LogReporter, Reporter};
//!
//! let reporter = LogReporter;
//! reporter.info("downloaded http://example.com/Packages.gz");
//! ```

use tracing::{error, info};

/// Two-sink reporting interface
///
/// Implementations should be thread-safe (Send + Sync); messages may be
/// routed from the download manager's consumer loop while workers run.
pub trait Reporter: Send + Sync {
    /// Report an informational, human-readable message
    fn info(&self, message: &str);

    /// Report a failure as a human-readable message
    fn error(&self, message: &str);
}

/// Reporter backed by the tracing facade
///
/// The default sink for CLI runs: informational messages at `info` level,
/// failures at `error` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn info(&self, message: &str) {
        info!("{}", message);
    }

    fn error(&self, message: &str) {
        error!("{}", message);
    }
}

/// Silent reporter (no-op)
///
/// Use this for quiet mode or scripted usage where per-item messages are
/// not desired.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn info(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}
