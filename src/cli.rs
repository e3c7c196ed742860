// src/cli.rs
//! CLI definitions for aptsync
//!
//! This module contains the command-line interface definitions using clap.
//! The command implementations are in the `commands` module.

use clap::{Parser, Subcommand};

/// Default mirror root directory
pub const DEFAULT_ROOT: &str = "/var/lib/aptsync";

#[derive(Parser)]
#[command(name = "aptsync")]
#[command(author = "Aptsync Project")]
#[command(version)]
#[command(about = "Mirrors APT package indexes to local disk", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the mirror directory layout
    Init {
        /// Mirror root directory
        #[arg(short, long, default_value = DEFAULT_ROOT)]
        root: String,
    },

    /// Validate a sources list and print its entries
    Sources {
        /// Path to the sources list file
        #[arg(short, long, default_value = "/var/lib/aptsync/sources.list")]
        sources: String,
    },

    /// Fetch and extract package indexes for all configured sources
    Update {
        /// Mirror root directory
        #[arg(short, long, default_value = DEFAULT_ROOT)]
        root: String,

        /// Path to the sources list (default: sources.list under the root)
        #[arg(short, long)]
        sources: Option<String>,

        /// Number of concurrent download workers
        #[arg(short, long, default_value_t = 10)]
        workers: usize,
    },
}
