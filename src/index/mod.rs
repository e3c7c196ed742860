// src/index/mod.rs

//! Package index extraction
//!
//! Downloaded indexes land in the index directory as
//! `<sanitized-uri>_Packages.gz`. This module decompresses each of them
//! into a sibling file with the `.gz` suffix stripped, replacing any stale
//! output from an earlier run. Matching is by file name only; anything
//! else in the directory is left alone.

use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::error::{Error, Result};
use crate::report::Reporter;

/// File-name suffix identifying a compressed package index
pub const COMPRESSED_INDEX_SUFFIX: &str = "_Packages.gz";

/// Decompress every package index in `dir`
///
/// The directory is listed once; each `*_Packages.gz` entry is extracted
/// into the same directory with the `.gz` dropped. The first failure
/// (listing, open, gzip format, copy) aborts the pass and is returned;
/// files extracted before the failure remain on disk. One informational
/// message is reported per extracted file.
pub fn extract_indexes(dir: &Path, reporter: &dyn Reporter) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| {
        Error::ExtractError(format!("Failed to list index directory {}: {e}", dir.display()))
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| {
            Error::ExtractError(format!("Failed to list index directory {}: {e}", dir.display()))
        })?;

        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if !name.ends_with(COMPRESSED_INDEX_SUFFIX) {
            continue;
        }
        let Some(extracted_name) = name.strip_suffix(".gz") else {
            continue;
        };

        let source = entry.path();
        let destination = dir.join(extracted_name);

        if let Err(e) = extract_one(&source, &destination) {
            reporter.error(&format!("failed to extract {name}"));
            return Err(e);
        }

        reporter.info(&format!("extracted {name}"));
    }

    Ok(())
}

/// Decompress one index file, replacing any existing output
///
/// Extraction is a full overwrite, never a merge: stale output is deleted
/// before the fresh destination is created.
fn extract_one(source: &Path, destination: &Path) -> Result<()> {
    if destination.exists() {
        fs::remove_file(destination).map_err(|e| {
            Error::ExtractError(format!(
                "Failed to remove stale index {}: {e}",
                destination.display()
            ))
        })?;
    }

    let mut output = File::create(destination).map_err(|e| {
        Error::ExtractError(format!("Failed to create {}: {e}", destination.display()))
    })?;

    let input = File::open(source)
        .map_err(|e| Error::ExtractError(format!("Failed to open {}: {e}", source.display())))?;

    let mut decoder = GzDecoder::new(BufReader::new(input));
    io::copy(&mut decoder, &mut output).map_err(|e| {
        Error::ExtractError(format!("Failed to decompress {}: {e}", source.display()))
    })?;

    Ok(())
}
