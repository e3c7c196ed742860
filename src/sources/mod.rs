// src/sources/mod.rs

//! Source declaration parsing and the source registry
//!
//! An APT sources list names remote binary package repositories, one per
//! line:
//!
//! ```text
//! deb http://archive.example.com/ubuntu trusty main restricted
//! ```
//!
//! This module turns such lines into validated [`SourceEntry`] values and
//! collects them in a [`SourceRegistry`]. Only single-line `deb` declarations
//! over http(s) are supported; inline `[...]` options are rejected.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use uuid::Uuid;

use crate::error::{Error, Result};

mod registry;

pub use registry::{derive_repo_uris, SourceRegistry};

/// Declaration type tag for binary package repositories
const BINARY_TYPE_TAG: &str = "deb";

/// Errors produced while parsing a single source declaration line
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceParseError {
    /// The line carries inline `[...]` options, which are unsupported
    #[error("inline options are not supported: {0}")]
    UnsupportedOptions(String),

    /// Fewer than the four required fields (type, uri, suite, component)
    #[error("invalid source line: {0}")]
    MalformedLine(String),

    /// The declaration type is not `deb`
    #[error("only binary (deb) repositories are supported: {0}")]
    UnsupportedType(String),

    /// The URI scheme is neither `http` nor `https`
    #[error("invalid URI (only http(s) are supported): {0}")]
    UnsupportedScheme(String),
}

/// One parsed source declaration
///
/// Immutable once constructed. The URI never carries a trailing slash and
/// the component list is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// Registry-unique identifier
    pub id: Uuid,
    /// Repository base URI, `http`/`https` only, no trailing slash
    pub uri: String,
    /// Suite (release/distribution channel) name
    pub suite: String,
    /// Component names, order preserved, at least one
    pub components: Vec<String>,
}

impl SourceEntry {
    /// Parse a single sources-list line into an entry
    ///
    /// `id_source` supplies the entry identifier; production callers pass a
    /// v4 generator, tests pass a fixed value to make parsing deterministic.
    pub fn from_line(
        line: &str,
        id_source: impl Fn() -> Uuid,
    ) -> std::result::Result<Self, SourceParseError> {
        // Inline per-source options are unsupported.
        if line.contains('[') || line.contains(']') {
            return Err(SourceParseError::UnsupportedOptions(line.to_string()));
        }

        let fields: Vec<&str> = line.split_whitespace().collect();

        // At least: type, uri, suite, one component.
        if fields.len() < 4 {
            return Err(SourceParseError::MalformedLine(line.to_string()));
        }

        if fields[0] != BINARY_TYPE_TAG {
            return Err(SourceParseError::UnsupportedType(line.to_string()));
        }

        let uri = fields[1];
        if !uri.starts_with("http://") && !uri.starts_with("https://") {
            return Err(SourceParseError::UnsupportedScheme(uri.to_string()));
        }

        let uri = uri.trim_end_matches('/').to_string();

        Ok(Self {
            id: id_source(),
            uri,
            suite: fields[2].to_string(),
            components: fields[3..].iter().map(|c| c.to_string()).collect(),
        })
    }
}

/// Parse a sources-list file into a registry
///
/// Blank lines and `#` comment lines are skipped. The first invalid
/// declaration aborts the whole load; a sources list is configuration, and
/// silently dropping a broken line would mirror a different set of
/// repositories than the one asked for.
pub fn parse_sources_list(path: &Path) -> Result<SourceRegistry> {
    let file = File::open(path).map_err(|e| {
        Error::IoError(format!("Failed to open sources list {}: {e}", path.display()))
    })?;

    let mut registry = SourceRegistry::new();

    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| {
            Error::IoError(format!("Failed to read sources list {}: {e}", path.display()))
        })?;

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let entry = SourceEntry::from_line(&line, Uuid::new_v4)?;
        registry.add(entry);
    }

    Ok(registry)
}
