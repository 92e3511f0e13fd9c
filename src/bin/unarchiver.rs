// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Unarchiver CLI
//!
//! Command-line tool for loading and maintaining archive files.
//!
//! ## Usage
//!
//! ```sh
//! # Print an archive as JSON
//! unarchiver inspect state.msgpack
//!
//! # Check that archives load
//! unarchiver check cache/*.archive
//!
//! # Show the detected format
//! unarchiver detect state.msgpack
//!
//! # Drop undecodable entries from a cache directory
//! unarchiver store purge ~/.cache/app
//! ```

mod cmd;
mod common;

use std::process;

use clap::{Parser, Subcommand};
use cmd::{CheckArgs, DetectArgs, InspectArgs, StoreCmd};
use common::Result;

/// Unarchiver - safe archive loading
///
/// Load MessagePack and JSON archives without crashing on bad input.
#[derive(Parser, Clone)]
#[command(name = "unarchiver")]
#[command(about = "Safe archive loading for MessagePack and JSON files", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "ArcheBase")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Clone)]
enum Commands {
    /// Print an archive's contents as JSON
    Inspect(InspectArgs),

    /// Check that one or more archives load
    Check(CheckArgs),

    /// Show the detected archive format
    Detect(DetectArgs),

    /// Archive store maintenance (stats, purge, trim)
    #[command(subcommand)]
    Store(StoreCmd),
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect(args) => args.run(),
        Commands::Check(args) => args.run(),
        Commands::Detect(args) => args.run(),
        Commands::Store(cmd) => cmd.run(),
    }
}

fn main() {
    common::init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
