// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Archive decoder implementations.
//!
//! - [`decoder`] - The [`ArchiveDecoder`] interface and format auto-detection
//! - [`msgpack`] - MessagePack keyed archives
//! - [`json`] - JSON archives

pub mod decoder;
pub mod json;
pub mod msgpack;

pub use decoder::{ArchiveDecoder, AutoDecoder};
pub use json::JsonDecoder;
pub use msgpack::MessagePackDecoder;
