// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Error types for archive loading.
//!
//! Every variant describes one reason an archive could not be turned into a
//! value. [`SafeDecoder::unarchive`](crate::SafeDecoder::unarchive) collapses
//! all of them into `None`; [`SafeDecoder::try_unarchive`](crate::SafeDecoder::try_unarchive)
//! hands them back for diagnostics.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Reasons an archive failed to load.
#[derive(Debug, Error)]
pub enum UnarchiveError {
    /// The path was the empty string
    #[error("Archive path is empty")]
    EmptyPath,

    /// Nothing exists at the path
    #[error("Archive not found: '{}'", .path.display())]
    NotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// The process may not read the path
    #[error("Permission denied reading '{}'", .path.display())]
    PermissionDenied {
        /// Path that was refused
        path: PathBuf,
    },

    /// Any other I/O failure while reading the archive
    #[error("I/O error reading '{}': {source}", .path.display())]
    Io {
        /// Path being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// The archive has no bytes
    #[error("Archive is empty")]
    Empty,

    /// The archive is larger than the configured limit
    #[error("Archive is {size} bytes, limit is {limit} bytes")]
    TooLarge {
        /// Size on disk
        size: u64,
        /// Configured maximum
        limit: u64,
    },

    /// Input ended before the decoder finished
    #[error("{codec} archive is truncated: {message}")]
    Truncated {
        /// Decoder that hit the end of input
        codec: &'static str,
        /// Decoder message
        message: String,
    },

    /// The bytes are not a valid archive
    #[error("{codec} archive is corrupt: {message}")]
    Corrupt {
        /// Decoder that rejected the input
        codec: &'static str,
        /// Decoder message
        message: String,
    },

    /// The archive is well-formed but does not hold the requested type
    #[error("{codec} archive holds an unexpected type: {message}")]
    TypeMismatch {
        /// Decoder that rejected the value
        codec: &'static str,
        /// Decoder message
        message: String,
    },

    /// A complete value was decoded but bytes remain after it
    #[error("{codec} archive has {remaining} trailing bytes")]
    TrailingBytes {
        /// Decoder that found the extra bytes
        codec: &'static str,
        /// Number of unread bytes
        remaining: usize,
    },

    /// The archive format could not be identified
    #[error("Unknown archive format")]
    UnknownFormat,

    /// The decoder panicked
    #[error("Decoder panicked: {message}")]
    DecoderPanicked {
        /// Panic payload, when it was a string
        message: String,
    },
}

impl UnarchiveError {
    /// Classify an I/O error raised while accessing `path`.
    pub fn from_io(path: impl Into<PathBuf>, err: io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound => UnarchiveError::NotFound { path },
            io::ErrorKind::PermissionDenied => UnarchiveError::PermissionDenied { path },
            _ => UnarchiveError::Io { path, source: err },
        }
    }

    /// Create a truncated-input error.
    pub fn truncated(codec: &'static str, message: impl Into<String>) -> Self {
        UnarchiveError::Truncated {
            codec,
            message: message.into(),
        }
    }

    /// Create a corrupt-input error.
    pub fn corrupt(codec: &'static str, message: impl Into<String>) -> Self {
        UnarchiveError::Corrupt {
            codec,
            message: message.into(),
        }
    }

    /// Create a type mismatch error.
    pub fn type_mismatch(codec: &'static str, message: impl Into<String>) -> Self {
        UnarchiveError::TypeMismatch {
            codec,
            message: message.into(),
        }
    }

    /// Build a panic error from a `catch_unwind` payload.
    pub fn from_panic(payload: &(dyn std::any::Any + Send)) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        UnarchiveError::DecoderPanicked { message }
    }

    /// Short, stable name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            UnarchiveError::EmptyPath => "empty_path",
            UnarchiveError::NotFound { .. } => "not_found",
            UnarchiveError::PermissionDenied { .. } => "permission_denied",
            UnarchiveError::Io { .. } => "io",
            UnarchiveError::Empty => "empty",
            UnarchiveError::TooLarge { .. } => "too_large",
            UnarchiveError::Truncated { .. } => "truncated",
            UnarchiveError::Corrupt { .. } => "corrupt",
            UnarchiveError::TypeMismatch { .. } => "type_mismatch",
            UnarchiveError::TrailingBytes { .. } => "trailing_bytes",
            UnarchiveError::UnknownFormat => "unknown_format",
            UnarchiveError::DecoderPanicked { .. } => "decoder_panicked",
        }
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("kind", self.kind().to_string())];
        match self {
            UnarchiveError::EmptyPath | UnarchiveError::Empty | UnarchiveError::UnknownFormat => {}
            UnarchiveError::NotFound { path } | UnarchiveError::PermissionDenied { path } => {
                fields.push(("path", path.display().to_string()));
            }
            UnarchiveError::Io { path, source } => {
                fields.push(("path", path.display().to_string()));
                fields.push(("cause", source.to_string()));
            }
            UnarchiveError::TooLarge { size, limit } => {
                fields.push(("size", size.to_string()));
                fields.push(("limit", limit.to_string()));
            }
            UnarchiveError::Truncated { codec, message }
            | UnarchiveError::Corrupt { codec, message }
            | UnarchiveError::TypeMismatch { codec, message } => {
                fields.push(("codec", codec.to_string()));
                fields.push(("message", message.clone()));
            }
            UnarchiveError::TrailingBytes { codec, remaining } => {
                fields.push(("codec", codec.to_string()));
                fields.push(("remaining", remaining.to_string()));
            }
            UnarchiveError::DecoderPanicked { message } => {
                fields.push(("message", message.clone()));
            }
        }
        fields
    }
}

/// Result type for archive loading.
pub type Result<T> = std::result::Result<T, UnarchiveError>;
