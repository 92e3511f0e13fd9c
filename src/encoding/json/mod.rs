// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! JSON decoder module.
//!
//! Provides JSON archive decoding support.

pub mod decoder;

pub use decoder::JsonDecoder;
