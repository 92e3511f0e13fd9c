// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # MessagePack Archive Decoder
//!
//! Reads archives written by `rmp_serde::to_vec_named` (structs as keyed
//! maps) as well as `rmp_serde::to_vec` (structs as positional arrays).
//! The whole input must be consumed by exactly one value.

use std::io;

use serde::de::DeserializeOwned;

use crate::core::{ArchiveFormat, Result, UnarchiveError};
use crate::encoding::ArchiveDecoder;

const CODEC: &str = "MessagePack";

/// Decoder for MessagePack archives.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessagePackDecoder {
    _private: (),
}

impl MessagePackDecoder {
    /// Create a new MessagePack decoder.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ArchiveDecoder for MessagePackDecoder {
    fn format(&self) -> ArchiveFormat {
        ArchiveFormat::MessagePack
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T> {
        let mut remaining = bytes;
        let mut de = rmp_serde::Deserializer::new(&mut remaining);
        let value = T::deserialize(&mut de).map_err(classify)?;
        drop(de);

        if !remaining.is_empty() {
            return Err(UnarchiveError::TrailingBytes {
                codec: CODEC,
                remaining: remaining.len(),
            });
        }
        Ok(value)
    }
}

/// Map an rmp_serde error onto the failure taxonomy.
fn classify(err: rmp_serde::decode::Error) -> UnarchiveError {
    use rmp_serde::decode::Error;

    let message = err.to_string();
    match err {
        Error::InvalidMarkerRead(ref io_err) | Error::InvalidDataRead(ref io_err)
            if io_err.kind() == io::ErrorKind::UnexpectedEof =>
        {
            UnarchiveError::truncated(CODEC, message)
        }
        Error::TypeMismatch(_) | Error::OutOfRange | Error::Syntax(_) => {
            UnarchiveError::type_mismatch(CODEC, message)
        }
        _ => UnarchiveError::corrupt(CODEC, message),
    }
}
