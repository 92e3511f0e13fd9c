// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Builder pattern for configuring a [`SafeDecoder`].

use crate::core::ArchiveFormat;
use crate::encoding::{ArchiveDecoder, AutoDecoder};

use super::SafeDecoder;

/// Default cap on the size of an archive file (100 MiB).
pub const DEFAULT_MAX_ARCHIVE_BYTES: u64 = 100 * 1024 * 1024;

/// Configuration for loading archives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnarchiveOptions {
    /// Archive format; `Auto` detects it per file
    pub format: ArchiveFormat,
    /// Files larger than this are rejected without being read
    pub max_archive_bytes: u64,
}

impl Default for UnarchiveOptions {
    fn default() -> Self {
        Self {
            format: ArchiveFormat::Auto,
            max_archive_bytes: DEFAULT_MAX_ARCHIVE_BYTES,
        }
    }
}

/// Builder for [`SafeDecoder`].
///
/// # Example
///
/// ```rust,no_run
/// use unarchiver::{ArchiveFormat, SafeDecoder};
///
/// let decoder = SafeDecoder::builder()
///     .format(ArchiveFormat::Json)
///     .max_archive_bytes(1024 * 1024)
///     .build();
///
/// let settings: Option<serde_json::Value> = decoder.unarchive("settings.json");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SafeDecoderBuilder {
    options: UnarchiveOptions,
}

impl SafeDecoderBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the archive format.
    ///
    /// Only used by [`build`](Self::build); a decoder passed to
    /// [`build_with`](Self::build_with) decides its own format.
    pub fn format(mut self, format: ArchiveFormat) -> Self {
        self.options.format = format;
        self
    }

    /// Set the maximum archive size in bytes.
    pub fn max_archive_bytes(mut self, limit: u64) -> Self {
        self.options.max_archive_bytes = limit;
        self
    }

    /// Replace all options at once.
    pub fn options(mut self, options: UnarchiveOptions) -> Self {
        self.options = options;
        self
    }

    /// Build a decoder for the built-in formats.
    pub fn build(self) -> SafeDecoder<AutoDecoder> {
        SafeDecoder {
            decoder: AutoDecoder::with_format(self.options.format),
            options: self.options,
        }
    }

    /// Build around a caller-supplied decoder.
    pub fn build_with<D: ArchiveDecoder>(self, decoder: D) -> SafeDecoder<D> {
        let options = UnarchiveOptions {
            format: decoder.format(),
            ..self.options
        };
        SafeDecoder { decoder, options }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::JsonDecoder;

    #[test]
    fn test_default_options() {
        let options = UnarchiveOptions::default();
        assert_eq!(options.format, ArchiveFormat::Auto);
        assert_eq!(options.max_archive_bytes, 100 * 1024 * 1024);
    }

    #[test]
    fn test_builder_sets_options() {
        let decoder = SafeDecoderBuilder::new()
            .format(ArchiveFormat::MessagePack)
            .max_archive_bytes(4096)
            .build();
        assert_eq!(decoder.options().format, ArchiveFormat::MessagePack);
        assert_eq!(decoder.options().max_archive_bytes, 4096);
        assert_eq!(decoder.decoder().format(), ArchiveFormat::MessagePack);
    }

    #[test]
    fn test_build_with_takes_format_from_decoder() {
        let decoder = SafeDecoderBuilder::new()
            .format(ArchiveFormat::MessagePack)
            .max_archive_bytes(10)
            .build_with(JsonDecoder::new());
        assert_eq!(decoder.options().format, ArchiveFormat::Json);
        assert_eq!(decoder.options().max_archive_bytes, 10);
    }
}
