// src/mirror/mod.rs

//! Mirror orchestration
//!
//! [`Mirror`] ties the pipeline together: it owns the on-disk layout under
//! a single root directory, the configured sources, and the download
//! manager. An update run derives the repository URIs, fetches every
//! component's `Packages.gz` into `<root>/index/`, and extracts the
//! downloaded indexes in place.
//!
//! Layout produced under the root:
//!
//! ```text
//! <root>/index/<sanitized-uri>_Packages.gz   downloaded
//! <root>/index/<sanitized-uri>_Packages      extracted
//! <root>/trust/keys/                         scaffolding only
//! <root>/trust/hashes/releases               scaffolding only
//! ```

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::fetch::{DownloadManager, DownloadRequest};
use crate::index::{extract_indexes, COMPRESSED_INDEX_SUFFIX};
use crate::report::Reporter;
use crate::sources::SourceRegistry;

/// The single binary architecture mirrored
pub const BINARY_ARCH: &str = "amd64";

const INDEX_DIR: &str = "index";
const TRUST_DIR: &str = "trust";
const KEYS_DIR: &str = "keys";
const HASHES_DIR: &str = "hashes";
const RELEASES_FILE: &str = "releases";

/// Map a repository URI to a flat, filesystem-safe file name
///
/// Scheme prefix and trailing slash are stripped, `/` becomes `_` and `:`
/// becomes `-`. The mapping is deterministic, so re-running an update
/// overwrites the same files instead of accumulating new ones.
pub fn uri_to_filename(uri: &str) -> String {
    let stripped = uri
        .strip_prefix("http://")
        .or_else(|| uri.strip_prefix("https://"))
        .unwrap_or(uri);

    stripped.trim_end_matches('/').replace('/', "_").replace(':', "-")
}

/// Create a directory if it does not exist yet
fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| {
        Error::IoError(format!("Failed to create directory {}: {e}", path.display()))
    })
}

/// A local mirror of APT package indexes
pub struct Mirror {
    root: PathBuf,
    /// Configured source declarations
    pub sources: SourceRegistry,
    downloader: DownloadManager,
}

impl Mirror {
    /// Create a mirror rooted at `root` with the given download worker count
    ///
    /// The root directory is created if absent.
    pub fn new(root: impl Into<PathBuf>, workers: usize) -> Result<Self> {
        let root = root.into();
        ensure_dir(&root)?;

        Ok(Self {
            root,
            sources: SourceRegistry::new(),
            downloader: DownloadManager::new(workers)?,
        })
    }

    /// The mirror root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The directory downloaded and extracted indexes live in
    pub fn index_dir(&self) -> PathBuf {
        self.root.join(INDEX_DIR)
    }

    /// Scaffold the trust directory layout
    ///
    /// Creates `<root>/trust/keys/`, `<root>/trust/hashes/` and an empty
    /// `<root>/trust/hashes/releases` placeholder. Idempotent; performs no
    /// cryptographic setup, the directories exist for later consumers.
    pub fn init_trust_dir(&self) -> Result<()> {
        let trust_dir = self.root.join(TRUST_DIR);
        ensure_dir(&trust_dir)?;
        ensure_dir(&trust_dir.join(KEYS_DIR))?;

        let hashes_dir = trust_dir.join(HASHES_DIR);
        ensure_dir(&hashes_dir)?;

        let releases_file = hashes_dir.join(RELEASES_FILE);
        if !releases_file.exists() {
            File::create(&releases_file).map_err(|e| {
                Error::IoError(format!(
                    "Failed to create releases file {}: {e}",
                    releases_file.display()
                ))
            })?;
        }

        Ok(())
    }

    /// Fetch and extract the package indexes for all configured sources
    ///
    /// Steps run strictly in sequence: ensure the index directory, derive
    /// repository URIs, download every index, then extract. Individual
    /// download failures are reported and absorbed (a partial mirror is
    /// still useful); a directory-provisioning or extraction failure aborts
    /// the run.
    pub fn update(&self, reporter: &dyn Reporter) -> Result<()> {
        info!("Updating package indexes under {}", self.root.display());

        let index_dir = self.index_dir();
        ensure_dir(&index_dir)?;

        let repo_uris = self.sources.repo_uris();
        debug!("derived {} repository uri(s)", repo_uris.len());

        let requests: Vec<DownloadRequest> = repo_uris
            .iter()
            .map(|uri| {
                DownloadRequest::new(
                    format!("{uri}/binary-{BINARY_ARCH}/Packages.gz"),
                    index_dir.join(format!("{}{}", uri_to_filename(uri), COMPRESSED_INDEX_SUFFIX)),
                )
            })
            .collect();

        let stats = self.downloader.download(requests, reporter)?;
        if stats.failed > 0 {
            warn!(
                "{} of {} index download(s) failed",
                stats.failed,
                stats.completed + stats.failed
            );
        }

        extract_indexes(&index_dir, reporter)?;

        info!(
            "Update finished: {} index(es) downloaded, {} failed",
            stats.completed, stats.failed
        );
        Ok(())
    }
}
