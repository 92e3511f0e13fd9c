// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Unarchiver
//!
//! Safe loading of keyed archives from disk.
//!
//! Loading an archive can fail in many ways: the file is missing or
//! unreadable, empty, truncated, not an archive at all, or holds a value of
//! a different type. A decoder may even panic. [`SafeDecoder::unarchive`]
//! absorbs every one of these and returns `None`, so callers only ever see
//! "loaded" or "could not load".
//!
//! ## Architecture
//!
//! - `unarchive/` - [`SafeDecoder`], the failure-containing boundary, and its builder
//! - `encoding/` - [`ArchiveDecoder`] implementations (MessagePack, JSON, auto-detect)
//! - `io/` - Bounded file reads and format detection
//! - `store` - [`ArchiveStore`], a keyed directory cache built on [`SafeDecoder`]
//!
//! ## Example
//!
//! ```rust,no_run
//! use serde::Deserialize;
//! use unarchiver::SafeDecoder;
//!
//! #[derive(Deserialize)]
//! struct Preferences {
//!     theme: String,
//!     font_size: u32,
//! }
//!
//! let decoder = SafeDecoder::new();
//! let prefs: Preferences = decoder
//!     .unarchive("prefs.msgpack")
//!     .unwrap_or(Preferences {
//!         theme: "light".to_string(),
//!         font_size: 12,
//!     });
//! # let _ = prefs;
//! ```
//!
//! ## Example: Finding out why a load failed
//!
//! ```rust,no_run
//! use unarchiver::{SafeDecoder, UnarchiveError};
//!
//! match SafeDecoder::new().try_unarchive::<serde_json::Value>("state.json") {
//!     Ok(state) => println!("{state}"),
//!     Err(UnarchiveError::NotFound { .. }) => println!("no saved state"),
//!     Err(e) => println!("saved state is unusable: {e}"),
//! }
//! ```

// Core types
pub mod core;

pub use core::{ArchiveFormat, ArchiveValue, Result, UnarchiveError};

// Decoders
pub mod encoding;

pub use encoding::{ArchiveDecoder, AutoDecoder, JsonDecoder, MessagePackDecoder};

// File reads and format detection
pub mod io;

pub use io::detect_format;

// Safe loading boundary
pub mod unarchive;

pub use unarchive::{unarchive, SafeDecoder, SafeDecoderBuilder, UnarchiveOptions};

// Keyed directory cache
pub mod store;

pub use store::{ArchiveStore, StoreEntry, StoreStats};
