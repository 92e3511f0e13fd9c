// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Directory-backed archive cache.
//!
//! An [`ArchiveStore`] maps string keys to archive files in one directory.
//! Entries are written by other producers; the store loads them through a
//! [`SafeDecoder`], drops entries that no longer decode, and keeps the
//! directory under a size budget by evicting the least recently used files.
//!
//! Recency is tracked through file modification times: a successful
//! [`load`](ArchiveStore::load) touches the entry.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde::de::DeserializeOwned;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::core::{ArchiveValue, Result, UnarchiveError};
use crate::encoding::{ArchiveDecoder, AutoDecoder};
use crate::unarchive::SafeDecoder;

/// A file in the store directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreEntry {
    /// Full path of the entry
    pub path: PathBuf,
    /// Size in bytes
    pub size: u64,
    /// Last modification (or use) time
    pub modified: SystemTime,
}

/// Summary returned by [`ArchiveStore::stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreStats {
    /// Number of entries
    pub entries: usize,
    /// Total size of all entries in bytes
    pub bytes: u64,
}

/// Keyed archive cache rooted at a directory.
#[derive(Debug, Clone)]
pub struct ArchiveStore<D = AutoDecoder> {
    root: PathBuf,
    decoder: SafeDecoder<D>,
}

impl ArchiveStore<AutoDecoder> {
    /// Open (creating if needed) a store at `root` with the default decoder.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        Self::with_decoder(root, SafeDecoder::new())
    }
}

impl<D: ArchiveDecoder> ArchiveStore<D> {
    /// Open (creating if needed) a store at `root` using `decoder`.
    pub fn with_decoder(root: impl AsRef<Path>, decoder: SafeDecoder<D>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        if root.as_os_str().is_empty() {
            return Err(UnarchiveError::EmptyPath);
        }
        fs::create_dir_all(&root).map_err(|e| UnarchiveError::from_io(&root, e))?;
        Ok(Self { root, decoder })
    }

    /// Directory holding the entries.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File name an entry for `key` is stored under.
    ///
    /// Keys are hashed so any string is a valid key.
    pub fn path_for_key(&self, key: &str) -> PathBuf {
        self.root.join(hex::encode(Sha256::digest(key.as_bytes())))
    }

    /// Load the entry for `key`.
    ///
    /// An entry that exists but fails to load is deleted so it is not
    /// retried on every lookup.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.path_for_key(key);
        match self.decoder.try_unarchive(&path) {
            Ok(value) => {
                touch(&path);
                Some(value)
            }
            Err(UnarchiveError::NotFound { .. }) => None,
            Err(err) => {
                if fs::remove_file(&path).is_ok() {
                    warn!(key, path = %path.display(), error = %err, "purged undecodable archive");
                }
                None
            }
        }
    }

    /// Load the entry for `key` as a dynamically-typed object graph.
    pub fn load_value(&self, key: &str) -> Option<ArchiveValue> {
        self.load(key)
    }

    /// Whether an entry file exists for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.path_for_key(key).is_file()
    }

    /// Delete the entry for `key`. Returns `true` if a file was removed.
    pub fn remove(&self, key: &str) -> bool {
        fs::remove_file(self.path_for_key(key)).is_ok()
    }

    /// All entry files, in no particular order.
    pub fn entries(&self) -> Result<Vec<StoreEntry>> {
        let dir = fs::read_dir(&self.root).map_err(|e| UnarchiveError::from_io(&self.root, e))?;

        let mut entries = Vec::new();
        for item in dir.flatten() {
            let Ok(metadata) = item.metadata() else {
                continue;
            };
            if !metadata.is_file() {
                continue;
            }
            entries.push(StoreEntry {
                path: item.path(),
                size: metadata.len(),
                modified: metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH),
            });
        }
        Ok(entries)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries().map(|e| e.len()).unwrap_or(0)
    }

    /// Whether the store has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total size of all entries in bytes.
    pub fn size_on_disk(&self) -> u64 {
        self.stats().bytes
    }

    /// Entry count and total size.
    pub fn stats(&self) -> StoreStats {
        self.entries()
            .map(|entries| StoreStats {
                entries: entries.len(),
                bytes: entries.iter().map(|e| e.size).sum(),
            })
            .unwrap_or_default()
    }

    /// Delete every entry. Returns the number of files removed.
    pub fn clear(&self) -> Result<usize> {
        let removed = self
            .entries()?
            .iter()
            .filter(|entry| fs::remove_file(&entry.path).is_ok())
            .count();
        debug!(root = %self.root.display(), removed, "cleared archive store");
        Ok(removed)
    }

    /// Delete every entry that is not one complete, well-formed archive.
    /// Returns the number removed.
    ///
    /// Entries are checked against their format only; an entry that no
    /// [`ArchiveValue`] can hold (e.g. MessagePack with integer map keys)
    /// is kept.
    pub fn purge_undecodable(&self) -> Result<usize> {
        let mut removed = 0;
        for entry in self.entries()? {
            if let Err(err) = self.decoder.check(&entry.path) {
                if fs::remove_file(&entry.path).is_ok() {
                    warn!(path = %entry.path.display(), error = %err, "purged undecodable archive");
                    removed += 1;
                }
            }
        }
        Ok(removed)
    }

    /// Evict least recently used entries until the store fits in
    /// `capacity` bytes. Returns the number of entries removed.
    pub fn enforce_capacity(&self, capacity: u64) -> Result<usize> {
        let mut entries = self.entries()?;
        let mut size: u64 = entries.iter().map(|e| e.size).sum();
        if size <= capacity {
            return Ok(0);
        }

        entries.sort_by_key(|e| e.modified);

        let mut removed = 0;
        for entry in entries {
            if size <= capacity {
                break;
            }
            if fs::remove_file(&entry.path).is_ok() {
                size = size.saturating_sub(entry.size);
                removed += 1;
            }
        }
        debug!(root = %self.root.display(), removed, size, capacity, "enforced store capacity");
        Ok(removed)
    }
}

/// Mark an entry as recently used. Failures are ignored.
fn touch(path: &Path) {
    if let Ok(file) = File::options().write(true).open(path) {
        let _ = file.set_modified(SystemTime::now());
    }
}
