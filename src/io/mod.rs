// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! I/O layer: reading archive bytes from disk and identifying their format.

pub mod detection;
pub mod source;

// Re-exports
pub use detection::{detect_format, detect_format_from_bytes, detect_from_extension};
pub use source::read_archive;
