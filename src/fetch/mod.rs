// src/fetch/mod.rs

//! Concurrent index downloading
//!
//! The [`DownloadManager`] executes a batch of fetch requests on a
//! fixed-size worker pool and routes one outcome per request to the
//! caller's [`Reporter`] as outcomes arrive. The call is fully blocking:
//! it returns only after every request has succeeded or failed.
//!
//! There is no retry, no per-request timeout beyond the transport default,
//! and no deduplication; the same URI submitted twice is downloaded twice.
//! A request that fails mid-stream may leave a partial destination file
//! behind, which the next successful run truncates.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::mpsc;

use tracing::debug;

use crate::error::{Error, Result};
use crate::report::Reporter;

mod client;

pub use client::HttpClient;

/// One remote file to fetch and where to put it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    /// Remote URI to GET
    pub uri: String,
    /// Local destination path
    pub destination: PathBuf,
}

impl DownloadRequest {
    /// Create a new request
    pub fn new(uri: impl Into<String>, destination: impl Into<PathBuf>) -> Self {
        Self {
            uri: uri.into(),
            destination: destination.into(),
        }
    }
}

/// Outcome of one download request
///
/// Exactly one outcome is produced per request. Delivery order across
/// requests is unspecified and must not be relied upon.
#[derive(Debug)]
pub enum DownloadOutcome {
    /// The file was fetched and written in full
    Completed {
        /// Human-readable success message
        message: String,
    },
    /// The request failed at some stage
    Failed {
        /// Human-readable description of what failed
        message: String,
        /// Underlying cause
        cause: Error,
    },
}

/// Completed/failed counts for one download batch
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DownloadStats {
    /// Requests that produced a complete destination file
    pub completed: usize,
    /// Requests that failed at any stage
    pub failed: usize,
}

/// Fixed-size worker pool for batch downloads
pub struct DownloadManager {
    workers: usize,
    client: HttpClient,
}

impl DownloadManager {
    /// Create a manager with the given worker count (clamped to at least 1)
    pub fn new(workers: usize) -> Result<Self> {
        Ok(Self {
            workers: workers.max(1),
            client: HttpClient::new()?,
        })
    }

    /// Configured worker count
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Execute a batch of requests and report every outcome
    ///
    /// Spins up a dedicated pool of exactly `workers` threads for the
    /// duration of this call, runs one task per request, and consumes
    /// outcomes on the calling thread: completions go to `reporter.info`,
    /// failures to `reporter.error`. Per-request failures never fail the
    /// batch; the returned stats carry the split.
    pub fn download(
        &self,
        requests: Vec<DownloadRequest>,
        reporter: &dyn Reporter,
    ) -> Result<DownloadStats> {
        let mut stats = DownloadStats::default();
        if requests.is_empty() {
            return Ok(stats);
        }

        debug!(
            "downloading {} file(s) with {} worker(s)",
            requests.len(),
            self.workers
        );

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .build()
            .map_err(|e| Error::InitError(format!("Failed to create download pool: {e}")))?;

        let (outcome_tx, outcome_rx) = mpsc::channel();

        for request in requests {
            let tx = outcome_tx.clone();
            let client = self.client.clone();
            pool.spawn(move || {
                // Send fails only once the consumer is gone; nothing to do then.
                let _ = tx.send(execute(&client, &request));
            });
        }
        drop(outcome_tx);

        // Blocks until all workers have delivered their outcome.
        for outcome in outcome_rx {
            match outcome {
                DownloadOutcome::Completed { message } => {
                    reporter.info(&message);
                    stats.completed += 1;
                }
                DownloadOutcome::Failed { message, cause } => {
                    reporter.error(&format!("{message}: {cause}"));
                    stats.failed += 1;
                }
            }
        }

        Ok(stats)
    }
}

/// Fetch one request, start to finish
///
/// The destination file is only created once the GET has succeeded, so a
/// transport failure leaves no file behind. A failure while streaming the
/// body may leave a partial file.
fn execute(client: &HttpClient, request: &DownloadRequest) -> DownloadOutcome {
    let mut response = match client.get(&request.uri) {
        Ok(response) => response,
        Err(cause) => {
            return DownloadOutcome::Failed {
                message: format!("failed to download {}", request.uri),
                cause,
            };
        }
    };

    let mut file = match File::create(&request.destination) {
        Ok(file) => file,
        Err(e) => {
            return DownloadOutcome::Failed {
                message: format!("failed to create file {}", request.destination.display()),
                cause: Error::IoError(e.to_string()),
            };
        }
    };

    if let Err(e) = io::copy(&mut response, &mut file) {
        return DownloadOutcome::Failed {
            message: format!("failed to write file {}", request.destination.display()),
            cause: Error::DownloadError(e.to_string()),
        };
    }

    DownloadOutcome::Completed {
        message: format!(
            "downloaded {} to {}",
            request.uri,
            request.destination.display()
        ),
    }
}
