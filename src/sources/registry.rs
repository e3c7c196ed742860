// src/sources/registry.rs

//! Insertion-ordered collection of source entries
//!
//! The registry holds parsed declarations and answers the derived list of
//! per-component repository URIs. The URI list is not cached: it is derived
//! fresh on every read, so there is no stale state to regenerate after
//! mutations.

use uuid::Uuid;

use super::SourceEntry;

/// Derive the repository URIs implied by a set of source entries
///
/// For each entry, for each of its components in order, one URI of the form
/// `<uri>/dists/<suite>/<component>`. Pure function of its input.
pub fn derive_repo_uris(entries: &[SourceEntry]) -> Vec<String> {
    let mut uris = Vec::new();
    for entry in entries {
        for component in &entry.components {
            uris.push(format!("{}/dists/{}/{}", entry.uri, entry.suite, component));
        }
    }
    uris
}

/// Ordered collection of source declarations
///
/// Entries keep insertion order and are not de-duplicated; the same
/// declaration added twice is mirrored twice.
#[derive(Debug, Default, Clone)]
pub struct SourceRegistry {
    entries: Vec<SourceEntry>,
}

impl SourceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry
    pub fn add(&mut self, entry: SourceEntry) {
        self.entries.push(entry);
    }

    /// Append several entries, preserving their order
    pub fn add_all(&mut self, entries: impl IntoIterator<Item = SourceEntry>) {
        self.entries.extend(entries);
    }

    /// Remove the first entry equal to `entry`
    ///
    /// Removing an entry that is not present is a silent no-op.
    pub fn remove(&mut self, entry: &SourceEntry) {
        if let Some(pos) = self.entries.iter().position(|e| e == entry) {
            self.entries.remove(pos);
        }
    }

    /// Remove the first entry with the given identifier
    ///
    /// Removing an unknown identifier is a silent no-op.
    pub fn remove_by_id(&mut self, id: Uuid) {
        if let Some(pos) = self.entries.iter().position(|e| e.id == id) {
            self.entries.remove(pos);
        }
    }

    /// The entries in insertion order
    pub fn entries(&self) -> &[SourceEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The derived repository URIs for the current entry set
    ///
    /// Derived fresh on every call; see [`derive_repo_uris`].
    pub fn repo_uris(&self) -> Vec<String> {
        derive_repo_uris(&self.entries)
    }
}
