// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Inspect, check, and detect commands for single archive files.

use std::path::PathBuf;

use anyhow::anyhow;
use clap::Args;

use crate::common::{decoder, Result};
use unarchiver::{detect_format, ArchiveFormat};

/// Flags shared by commands that decode archives.
#[derive(Args, Clone, Debug)]
pub struct DecodeFlags {
    /// Archive format (auto, msgpack, json)
    #[arg(short, long, default_value = "auto")]
    pub format: ArchiveFormat,

    /// Refuse archives larger than this many bytes
    #[arg(long, value_name = "BYTES")]
    pub max_bytes: Option<u64>,
}

/// Print an archive's decoded contents as JSON.
#[derive(Args, Clone, Debug)]
pub struct InspectArgs {
    /// Archive file
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Print on one line instead of pretty-printing
    #[arg(long)]
    pub compact: bool,

    #[command(flatten)]
    pub flags: DecodeFlags,
}

/// Check whether archives load.
#[derive(Args, Clone, Debug)]
pub struct CheckArgs {
    /// Archive files
    #[arg(value_name = "FILE", required = true)]
    pub inputs: Vec<PathBuf>,

    #[command(flatten)]
    pub flags: DecodeFlags,
}

/// Show the detected format of a file.
#[derive(Args, Clone, Debug)]
pub struct DetectArgs {
    /// Input file
    #[arg(value_name = "FILE")]
    pub input: PathBuf,
}

impl InspectArgs {
    pub fn run(self) -> Result<()> {
        let decoder = decoder(self.flags.format, self.flags.max_bytes);
        let value = match decoder.unarchive_value(&self.input) {
            Some(value) => value,
            None if decoder.check(&self.input).is_ok() => {
                return Err(anyhow!(
                    "{} is a valid archive but cannot be shown as JSON",
                    self.input.display()
                ));
            }
            None => return Err(anyhow!("could not load {}", self.input.display())),
        };

        if self.compact {
            println!("{}", serde_json::to_string(&value)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        Ok(())
    }
}

impl CheckArgs {
    pub fn run(self) -> Result<()> {
        let decoder = decoder(self.flags.format, self.flags.max_bytes);

        let mut failed = 0usize;
        for input in &self.inputs {
            match decoder.check(input) {
                Ok(_) => println!("{}: ok", input.display()),
                Err(e) => {
                    failed += 1;
                    println!("{}: failed ({})", input.display(), e.kind());
                }
            }
        }

        if failed > 0 {
            return Err(anyhow!("{failed} of {} archives failed to load", self.inputs.len()));
        }
        Ok(())
    }
}

impl DetectArgs {
    pub fn run(self) -> Result<()> {
        match detect_format(&self.input) {
            Some(format) => println!("{format}"),
            None => println!("unknown"),
        }
        Ok(())
    }
}
