// src/commands.rs
//! Command handlers for the aptsync CLI

use std::path::{Path, PathBuf};

use anyhow::Result;
use aptsync::report::LogReporter;
use aptsync::{parse_sources_list, Mirror};
use tracing::info;

/// Create the mirror root and trust scaffolding
pub fn init(root: &str) -> Result<()> {
    // No downloads happen during init; the worker count is irrelevant.
    let mirror = Mirror::new(root, 1)?;
    mirror.init_trust_dir()?;
    info!("Initialized mirror layout under {}", root);
    Ok(())
}

/// Parse a sources list and print what it declares
pub fn sources(sources_path: &str) -> Result<()> {
    let registry = parse_sources_list(Path::new(sources_path))?;

    for entry in registry.entries() {
        println!(
            "{}  deb {} {} {}",
            entry.id,
            entry.uri,
            entry.suite,
            entry.components.join(" ")
        );
    }
    println!(
        "{} source(s), {} repository uri(s)",
        registry.len(),
        registry.repo_uris().len()
    );
    Ok(())
}

/// Run the full index synchronization pipeline
pub fn update(root: &str, sources_path: Option<&str>, workers: usize) -> Result<()> {
    let sources_path = sources_path
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(root).join("sources.list"));

    info!("Loading sources from {}", sources_path.display());
    let registry = parse_sources_list(&sources_path)?;
    info!("Loaded {} source(s)", registry.len());

    let mut mirror = Mirror::new(root, workers)?;
    mirror.sources = registry;
    mirror.update(&LogReporter)?;

    Ok(())
}
