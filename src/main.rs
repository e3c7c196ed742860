// src/main.rs

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { root } => {
            commands::init(&root)?;
            println!("Mirror initialized at: {}", root);
            Ok(())
        }
        Commands::Sources { sources } => commands::sources(&sources),
        Commands::Update {
            root,
            sources,
            workers,
        } => {
            commands::update(&root, sources.as_deref(), workers)?;
            println!("Index update complete");
            Ok(())
        }
    }
}
