// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! MessagePack decoder module.
//!
//! Provides decoding of MessagePack keyed archives.

pub mod decoder;

pub use decoder::MessagePackDecoder;
