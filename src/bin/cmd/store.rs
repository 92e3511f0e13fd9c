// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Store command - maintain archive cache directories.

use std::path::PathBuf;

use clap::Subcommand;

use crate::common::{format_size, Result};
use unarchiver::ArchiveStore;

/// Archive store maintenance.
#[derive(Subcommand, Clone, Debug)]
pub enum StoreCmd {
    /// Show entry count and disk usage
    Stats {
        /// Store directory
        #[arg(value_name = "DIR")]
        dir: PathBuf,
    },

    /// Delete entries that no longer decode
    Purge {
        /// Store directory
        #[arg(value_name = "DIR")]
        dir: PathBuf,
    },

    /// Evict least recently used entries until the store fits
    Trim {
        /// Store directory
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Maximum total size in bytes
        #[arg(short, long)]
        capacity: u64,
    },
}

impl StoreCmd {
    pub fn run(self) -> Result<()> {
        match self {
            StoreCmd::Stats { dir } => cmd_stats(dir),
            StoreCmd::Purge { dir } => cmd_purge(dir),
            StoreCmd::Trim { dir, capacity } => cmd_trim(dir, capacity),
        }
    }
}

/// Cmd: Show store stats
fn cmd_stats(dir: PathBuf) -> Result<()> {
    let store = ArchiveStore::open(&dir)?;
    let stats = store.stats();

    println!("=== {} ===", dir.display());
    println!("Entries: {}", stats.entries);
    println!("Size: {}", format_size(stats.bytes));
    Ok(())
}

/// Cmd: Purge undecodable entries
fn cmd_purge(dir: PathBuf) -> Result<()> {
    let store = ArchiveStore::open(&dir)?;
    let removed = store.purge_undecodable()?;
    println!("Purged {removed} entries");
    Ok(())
}

/// Cmd: Trim to capacity
fn cmd_trim(dir: PathBuf, capacity: u64) -> Result<()> {
    let store = ArchiveStore::open(&dir)?;
    let removed = store.enforce_capacity(capacity)?;
    println!(
        "Evicted {removed} entries, {} remaining",
        format_size(store.size_on_disk())
    );
    Ok(())
}
