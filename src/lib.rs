// src/lib.rs

//! Aptsync
//!
//! Mirrors a subset of an APT-style binary package repository to local
//! disk: parse a sources list, derive the per-component index URIs, fetch
//! the `Packages.gz` files concurrently, and extract them into a local
//! index directory.
//!
//! # Architecture
//!
//! - Sources: one-line `deb` declarations parsed into immutable entries,
//!   collected in an insertion-ordered registry
//! - Derived URIs: a pure function of the registry contents, computed fresh
//!   on every read
//! - Downloads: a fixed-size worker pool per batch, one outcome per request
//! - Extraction: streaming gzip decompression with full overwrite of stale
//!   output

pub mod fetch;
pub mod index;
pub mod mirror;
pub mod report;
pub mod sources;

mod error;

pub use error::{Error, Result};
pub use fetch::{DownloadManager, DownloadOutcome, DownloadRequest, DownloadStats};
pub use mirror::{uri_to_filename, Mirror, BINARY_ARCH};
pub use report::{LogReporter, Reporter, SilentReporter};
pub use sources::{
    derive_repo_uris, parse_sources_list, SourceEntry, SourceParseError, SourceRegistry,
};
