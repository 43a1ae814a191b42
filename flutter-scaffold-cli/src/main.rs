//! flutter-scaffold CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use flutter_scaffold::observability;
use flutter_scaffold_cli::{GenerateCommand, LayoutCommand};

#[derive(Parser)]
#[command(name = "flutter-scaffold")]
#[command(version)]
#[command(about = "Generate a Flutter clean-architecture project structure", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the missing directories and files of the project structure
    Generate {
        /// Project root (defaults to the current directory)
        #[arg(long)]
        root: Option<PathBuf>,
        /// Replace pubspec.yaml without asking
        #[arg(short, long)]
        yes: bool,
        /// Leave pubspec.yaml untouched
        #[arg(long)]
        skip_manifest: bool,
    },
    /// Print the directories and files that would be generated
    Layout {
        /// Project root whose configuration to use
        #[arg(long)]
        root: Option<PathBuf>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

fn current_root(root: Option<PathBuf>) -> Option<PathBuf> {
    root.or_else(|| std::env::current_dir().ok())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    observability::init(cli.verbose)?;

    match cli.command {
        Commands::Generate {
            root,
            yes,
            skip_manifest,
        } => {
            let cmd = GenerateCommand::new(current_root(root), yes, skip_manifest);
            cmd.execute()?;
        }
        Commands::Layout { root, json } => {
            LayoutCommand::new(current_root(root), json).execute()?;
        }
    }

    Ok(())
}
