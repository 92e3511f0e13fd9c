// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout unarchiver.
//!
//! - [`UnarchiveError`] - Why an archive failed to load
//! - [`ArchiveFormat`] - Archive format identifier
//! - [`ArchiveValue`] - Dynamically-typed decoded object graph

pub mod error;

pub use error::{Result, UnarchiveError};

/// A decoded object graph whose shape is not known at compile time.
///
/// This is the JSON data model: map keys are strings and there is no byte
/// string type. MessagePack archives outside that model still load into
/// concrete types.
pub type ArchiveValue = serde_json::Value;

/// Archive format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArchiveFormat {
    /// Detect the format from the archive bytes
    #[default]
    Auto,
    /// MessagePack, keyed (map) or positional (array) encoding
    MessagePack,
    /// JSON text
    Json,
}

/// Error returned when parsing an `ArchiveFormat` from string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseArchiveFormatError {
    _private: (),
}

impl std::fmt::Display for ParseArchiveFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid archive format, expected 'auto', 'msgpack', or 'json'"
        )
    }
}

impl std::error::Error for ParseArchiveFormatError {}

impl std::str::FromStr for ArchiveFormat {
    type Err = ParseArchiveFormatError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ArchiveFormat::Auto),
            "msgpack" | "messagepack" => Ok(ArchiveFormat::MessagePack),
            "json" => Ok(ArchiveFormat::Json),
            _ => Err(ParseArchiveFormatError { _private: () }),
        }
    }
}

impl std::fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ArchiveFormat {
    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ArchiveFormat::Auto => "auto",
            ArchiveFormat::MessagePack => "msgpack",
            ArchiveFormat::Json => "json",
        }
    }

    /// Name used in error messages.
    pub fn codec_name(&self) -> &'static str {
        match self {
            ArchiveFormat::Auto => "Auto",
            ArchiveFormat::MessagePack => "MessagePack",
            ArchiveFormat::Json => "JSON",
        }
    }
}
