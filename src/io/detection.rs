// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Format detection using leading bytes and file extensions.
//!
//! # Supported Formats
//!
//! - **MessagePack**: first byte is outside ASCII and is a valid MessagePack
//!   marker (anything but the reserved `0xc1`)
//! - **JSON**: first non-whitespace byte is `{` or `[`
//!
//! JSON text is always ASCII-led while every MessagePack value except a
//! positive fixint starts with a byte `>= 0x80`. Archives holding a top-level
//! positive fixint or a bare JSON scalar are left undetected here; the
//! extension or [`AutoDecoder`](crate::AutoDecoder) resolves them.
//!
//! # Example
//!
//! ```rust,no_run
//! use unarchiver::io::detection::detect_format;
//! use unarchiver::ArchiveFormat;
//!
//! assert_eq!(detect_format("settings.json"), Some(ArchiveFormat::Json));
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::core::ArchiveFormat;

/// How many bytes are read from a file to detect its format.
const HEADER_LEN: u64 = 64;

/// Try to detect the format of the archive at `path`.
///
/// Reads the file header and checks for format markers, falling back to the
/// file extension if the header is unreadable or inconclusive.
pub fn detect_format<P: AsRef<Path>>(path: P) -> Option<ArchiveFormat> {
    let path_ref = path.as_ref();

    // First try the content, then the name
    detect_from_header(path_ref).or_else(|| detect_from_extension(path_ref))
}

fn detect_from_header(path: &Path) -> Option<ArchiveFormat> {
    let file = File::open(path).ok()?;
    let mut header = Vec::with_capacity(HEADER_LEN as usize);
    file.take(HEADER_LEN).read_to_end(&mut header).ok()?;
    detect_format_from_bytes(&header)
}

/// Detect the format from the first bytes of an archive.
pub fn detect_format_from_bytes(bytes: &[u8]) -> Option<ArchiveFormat> {
    let first = *bytes.first()?;
    if is_msgpack_leading_byte(first) {
        return Some(ArchiveFormat::MessagePack);
    }

    let first_text = bytes.iter().find(|b| !b.is_ascii_whitespace())?;
    match first_text {
        b'{' | b'[' => Some(ArchiveFormat::Json),
        _ => None,
    }
}

/// Check for a non-ASCII byte that can start a MessagePack value.
///
/// Covers fixmap, fixarray and fixstr (`0x80..=0xbf`), nil (`0xc0`), every
/// typed marker from `0xc2` to `0xdf` (bool, bin, ext, float, int, str,
/// array, map) and negative fixints (`0xe0..=0xff`). `0xc1` is never used.
fn is_msgpack_leading_byte(byte: u8) -> bool {
    matches!(byte, 0x80..=0xc0 | 0xc2..=0xff)
}

/// Detect format from file extension (fallback).
pub fn detect_from_extension(path: &Path) -> Option<ArchiveFormat> {
    path.extension()
        .and_then(|e| e.to_str())
        .and_then(|ext| match ext.to_lowercase().as_str() {
            "json" => Some(ArchiveFormat::Json),
            "msgpack" | "mpk" | "archive" => Some(ArchiveFormat::MessagePack),
            _ => None,
        })
}
