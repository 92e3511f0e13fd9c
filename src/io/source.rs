// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Bounded reads of archive files.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use crate::core::{Result, UnarchiveError};

/// Read the whole archive at `path`, refusing anything over `limit` bytes.
///
/// The limit is checked against the file metadata before reading and again
/// while reading, so a file that grows mid-read is still bounded.
pub fn read_archive(path: &Path, limit: u64) -> Result<Vec<u8>> {
    if path.as_os_str().is_empty() {
        return Err(UnarchiveError::EmptyPath);
    }

    let metadata = fs::metadata(path).map_err(|e| UnarchiveError::from_io(path, e))?;
    if metadata.is_dir() {
        return Err(UnarchiveError::Io {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::Other, "path is a directory"),
        });
    }
    if metadata.len() > limit {
        return Err(UnarchiveError::TooLarge {
            size: metadata.len(),
            limit,
        });
    }

    let file = File::open(path).map_err(|e| UnarchiveError::from_io(path, e))?;
    let mut bytes = Vec::with_capacity(usize::try_from(metadata.len()).unwrap_or(0));
    file.take(limit.saturating_add(1))
        .read_to_end(&mut bytes)
        .map_err(|e| UnarchiveError::from_io(path, e))?;

    let read = bytes.len() as u64;
    if read > limit {
        return Err(UnarchiveError::TooLarge { size: read, limit });
    }
    if bytes.is_empty() {
        return Err(UnarchiveError::Empty);
    }

    Ok(bytes)
}
