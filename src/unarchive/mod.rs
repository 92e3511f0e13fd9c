// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Failure-containing archive loading.
//!
//! [`SafeDecoder`] reads an archive from disk and hands it to an
//! [`ArchiveDecoder`]. Whatever goes wrong on the way (missing file, empty
//! file, corrupt or truncated bytes, an unexpected type, or a panic inside
//! the decoder) stops here: [`SafeDecoder::unarchive`] returns `None` and
//! nothing unwinds into the caller.
//!
//! Panic containment relies on unwinding; a binary built with
//! `panic = "abort"` still aborts on a decoder panic.

pub mod builder;

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use serde::de::{DeserializeOwned, IgnoredAny};
use tracing::debug;

use crate::core::{ArchiveValue, Result, UnarchiveError};
use crate::encoding::{ArchiveDecoder, AutoDecoder};
use crate::io::source::read_archive;

pub use builder::{SafeDecoderBuilder, UnarchiveOptions, DEFAULT_MAX_ARCHIVE_BYTES};

/// Loads archives without ever failing loudly.
///
/// Holds no mutable state; one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct SafeDecoder<D = AutoDecoder> {
    decoder: D,
    options: UnarchiveOptions,
}

impl SafeDecoder<AutoDecoder> {
    /// Create a decoder with format detection and the default size limit.
    pub fn new() -> Self {
        SafeDecoderBuilder::new().build()
    }

    /// Start configuring a decoder.
    pub fn builder() -> SafeDecoderBuilder {
        SafeDecoderBuilder::new()
    }
}

impl Default for SafeDecoder<AutoDecoder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: ArchiveDecoder> SafeDecoder<D> {
    /// Wrap a caller-supplied decoder with default options.
    pub fn with_decoder(decoder: D) -> Self {
        SafeDecoderBuilder::new().build_with(decoder)
    }

    /// Options in effect.
    pub fn options(&self) -> &UnarchiveOptions {
        &self.options
    }

    /// The wrapped decoder.
    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    /// Load the archive at `path`.
    ///
    /// Returns `None` if the archive cannot be read or decoded for any
    /// reason. Treat `None` as "could not load"; use
    /// [`try_unarchive`](Self::try_unarchive) to find out why. A contained
    /// decoder panic still reaches the panic hook (see
    /// [`try_unarchive`](Self::try_unarchive)).
    pub fn unarchive<T: DeserializeOwned>(&self, path: impl AsRef<Path>) -> Option<T> {
        self.try_unarchive(path).ok()
    }

    /// Load the archive at `path` as a dynamically-typed object graph.
    ///
    /// [`ArchiveValue`] only holds what JSON can express. A MessagePack
    /// archive with non-string map keys, bin or ext payloads yields `None`
    /// here even though [`check`](Self::check) accepts it.
    pub fn unarchive_value(&self, path: impl AsRef<Path>) -> Option<ArchiveValue> {
        self.unarchive(path)
    }

    /// Check that the archive at `path` reads and decodes as one complete
    /// value of its format, without building that value.
    pub fn check(&self, path: impl AsRef<Path>) -> Result<()> {
        self.try_unarchive::<IgnoredAny>(path).map(|_| ())
    }

    /// Load the archive at `path`, keeping the failure reason.
    ///
    /// Panics raised while reading or decoding are caught and returned as
    /// [`UnarchiveError::DecoderPanicked`]. The process-wide panic hook
    /// still runs before the panic is caught, so with the default hook
    /// installed the panic message is printed to stderr. Callers that need
    /// a silent failure must install their own hook with
    /// [`std::panic::set_hook`].
    pub fn try_unarchive<T: DeserializeOwned>(&self, path: impl AsRef<Path>) -> Result<T> {
        let path = path.as_ref();

        let result = panic::catch_unwind(AssertUnwindSafe(|| self.load::<T>(path)))
            .unwrap_or_else(|payload| Err(UnarchiveError::from_panic(&*payload)));

        if let Err(err) = &result {
            debug!(
                path = %path.display(),
                kind = err.kind(),
                error = %err,
                "archive could not be loaded"
            );
        }
        result
    }

    fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let bytes = read_archive(path, self.options.max_archive_bytes)?;
        self.decoder.decode_at(path, &bytes)
    }
}

/// Load the archive at `path` with a default [`SafeDecoder`].
///
/// # Example
///
/// ```rust,no_run
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Session {
///     user: String,
///     token: String,
/// }
///
/// match unarchiver::unarchive::<Session>("session.msgpack") {
///     Some(session) => println!("restored session for {}", session.user),
///     None => println!("no saved session"),
/// }
/// ```
pub fn unarchive<T: DeserializeOwned>(path: impl AsRef<Path>) -> Option<T> {
    SafeDecoder::new().unarchive(path)
}
