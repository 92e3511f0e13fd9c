// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Decoder interface for archive formats.
//!
//! An [`ArchiveDecoder`] turns the raw bytes of an archive into a typed value
//! or reports why it could not. Decoders are free to fail in any way,
//! including panicking; containment happens one layer up in
//! [`SafeDecoder`](crate::SafeDecoder).
//!
//! ## Example
//!
//! ```no_run
//! use unarchiver::encoding::{ArchiveDecoder, AutoDecoder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let decoder = AutoDecoder::new();
//! let value: Vec<u32> = decoder.decode(b"[1, 2, 3]")?;
//! assert_eq!(value, vec![1, 2, 3]);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::de::DeserializeOwned;

use super::json::JsonDecoder;
use super::msgpack::MessagePackDecoder;
use crate::core::{ArchiveFormat, Result, UnarchiveError};
use crate::io::detection::{detect_format_from_bytes, detect_from_extension};

// =============================================================================
// Archive Decoder Trait
// =============================================================================

/// Decodes archive bytes into values.
pub trait ArchiveDecoder: Send + Sync {
    /// Get the format this decoder reads.
    fn format(&self) -> ArchiveFormat;

    /// Decode a complete archive.
    ///
    /// # Arguments
    ///
    /// * `bytes` - The whole archive content
    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T>;

    /// Decode an archive that was read from `path`.
    ///
    /// Decoders that can use the path as a hint (e.g. its extension) override
    /// this; the default ignores it.
    fn decode_at<T: DeserializeOwned>(&self, path: &Path, bytes: &[u8]) -> Result<T> {
        let _ = path;
        self.decode(bytes)
    }
}

// =============================================================================
// Auto Decoder
// =============================================================================

/// Decoder that picks the archive format per input.
///
/// With [`ArchiveFormat::Auto`] the format is detected from the leading
/// bytes, then from the file extension when decoding through
/// [`decode_at`](ArchiveDecoder::decode_at). Input that is still
/// unidentified (a bare JSON scalar or a MessagePack positive fixint) is
/// tried as JSON and then as MessagePack. A fixed format skips detection.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoDecoder {
    format: ArchiveFormat,
    msgpack: MessagePackDecoder,
    json: JsonDecoder,
}

impl AutoDecoder {
    /// Create a decoder that detects the format.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder that always uses `format`.
    pub fn with_format(format: ArchiveFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    fn decode_as<T: DeserializeOwned>(&self, format: ArchiveFormat, bytes: &[u8]) -> Result<T> {
        match format {
            ArchiveFormat::MessagePack => self.msgpack.decode(bytes),
            ArchiveFormat::Json => self.json.decode(bytes),
            ArchiveFormat::Auto => self.decode_undetected(bytes),
        }
    }

    /// Decode ASCII-led input that neither the bytes nor the name identify.
    fn decode_undetected<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T> {
        self.json
            .decode(bytes)
            .or_else(|_| self.msgpack.decode(bytes))
            .map_err(|_| UnarchiveError::UnknownFormat)
    }
}

impl ArchiveDecoder for AutoDecoder {
    fn format(&self) -> ArchiveFormat {
        self.format
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T> {
        let format = match self.format {
            ArchiveFormat::Auto => detect_format_from_bytes(bytes).unwrap_or(ArchiveFormat::Auto),
            fixed => fixed,
        };
        self.decode_as(format, bytes)
    }

    fn decode_at<T: DeserializeOwned>(&self, path: &Path, bytes: &[u8]) -> Result<T> {
        let format = match self.format {
            ArchiveFormat::Auto => detect_format_from_bytes(bytes)
                .or_else(|| detect_from_extension(path))
                .unwrap_or(ArchiveFormat::Auto),
            fixed => fixed,
        };
        self.decode_as(format, bytes)
    }
}
