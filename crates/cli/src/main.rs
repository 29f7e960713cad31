// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! kj - save and preview infrastructure blocks for launching jobs

mod color;
mod commands;
mod env;
mod exit_error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use kj_storage::FileRegistry;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::save::SaveCommand;
use exit_error::{exit_code, ExitError, EXIT_FAILURE};
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "kj", version, styles = color::styles())]
#[command(about = "Save named infrastructure blocks and preview how they launch")]
struct Cli {
    /// Directory holding saved blocks
    #[arg(long, global = true, value_name = "DIR")]
    registry: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save a block from command-line flags
    #[command(subcommand)]
    Save(SaveCommand),
    /// Save every block declared in an HCL, TOML or JSON file (or a directory of them)
    Apply {
        path: PathBuf,
        /// Replace blocks that already exist
        #[arg(long)]
        overwrite: bool,
    },
    /// Show one saved block
    Show { name: String },
    /// List saved blocks
    List,
    /// Delete a saved block
    Delete { name: String },
    /// Print what launching a block would run
    Preview { name: String },
}

fn main() {
    init_tracing();
    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {err:#}");
        std::process::exit(exit_code(&err));
    }
}

fn run(cli: Cli) -> Result<()> {
    let registry = open_registry(cli.registry)?;
    let format = cli.output;
    match cli.command {
        Commands::Save(command) => commands::save::handle(&registry, command, format),
        Commands::Apply { path, overwrite } => {
            commands::apply::handle(&registry, &path, overwrite, format)
        }
        Commands::Show { name } => commands::block::show(&registry, &name, format),
        Commands::List => commands::block::list(&registry, format),
        Commands::Delete { name } => commands::block::delete(&registry, &name, format),
        Commands::Preview { name } => commands::block::preview(&registry, &name),
    }
}

fn open_registry(flag: Option<PathBuf>) -> Result<FileRegistry> {
    let dir = env::registry_dir(flag).ok_or_else(|| {
        ExitError::new(
            EXIT_FAILURE,
            "cannot locate a data directory; pass --registry or set KJ_REGISTRY_DIR",
        )
    })?;
    Ok(FileRegistry::open(dir)?)
}

fn init_tracing() {
    let filter = EnvFilter::try_new(env::log_filter())
        .unwrap_or_else(|_| EnvFilter::new(env::DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
