//! Kubernetes Capacity Sizer CLI
//!
//! A command-line tool for estimating node counts and hardware totals for
//! a workload on Kubernetes-family platforms, from a JSON sizing input.

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{calculate, catalog};
use std::path::PathBuf;

/// Kubernetes Capacity Sizer CLI
#[derive(Parser)]
#[command(name = "ksize")]
#[command(author, version, about = "Capacity sizing for Kubernetes-family platforms", long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long, short, default_value = "table")]
    pub format: output::OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a sizing calculation from a JSON input file
    Calculate {
        /// Path to the sizing input (JSON)
        #[arg(long, short)]
        input: PathBuf,
    },

    /// Inspect the built-in distribution and technology catalog
    #[command(subcommand)]
    Catalog(CatalogCommands),
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List known distributions and their capabilities
    Distributions,

    /// List known technologies and their per-tier demand
    Technologies,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Calculate { input } => calculate::run(&input, cli.format),
        Commands::Catalog(catalog_cmd) => match catalog_cmd {
            CatalogCommands::Distributions => catalog::list_distributions(cli.format),
            CatalogCommands::Technologies => catalog::list_technologies(cli.format),
        },
    }
}
