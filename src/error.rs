// src/error.rs

//! Central error type for aptsync
//!
//! Component-local error enums (currently only the source parser's) convert
//! into this type so callers deal with a single error surface.

use thiserror::Error;

use crate::sources::SourceParseError;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by aptsync operations
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem-level failure (create, open, read, write)
    #[error("I/O error: {0}")]
    IoError(String),

    /// Failure while provisioning directories or constructing components
    #[error("Initialization failed: {0}")]
    InitError(String),

    /// Transport-level download failure (connection, HTTP status, body stream)
    #[error("Download failed: {0}")]
    DownloadError(String),

    /// Index extraction failure (listing, open, gzip format, copy)
    #[error("Extraction failed: {0}")]
    ExtractError(String),

    /// Source declaration parse failure
    #[error(transparent)]
    SourceParse(#[from] SourceParseError),
}
