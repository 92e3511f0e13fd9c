// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # JSON Archive Decoder
//!
//! ## Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use unarchiver::encoding::{ArchiveDecoder, JsonDecoder};
//!
//! let decoder = JsonDecoder::new();
//! let value: serde_json::Value = decoder.decode(br#"{"x": 1, "y": 2}"#)?;
//! # Ok(())
//! # }
//! ```

use serde::de::DeserializeOwned;
use serde_json::error::Category;

use crate::core::{ArchiveFormat, Result, UnarchiveError};
use crate::encoding::ArchiveDecoder;

const CODEC: &str = "JSON";

/// Decoder for JSON archives.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder {
    _private: (),
}

impl JsonDecoder {
    /// Create a new JSON decoder.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ArchiveDecoder for JsonDecoder {
    fn format(&self) -> ArchiveFormat {
        ArchiveFormat::Json
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T> {
        serde_json::from_slice(bytes).map_err(classify)
    }
}

/// Map a serde_json error onto the failure taxonomy.
fn classify(err: serde_json::Error) -> UnarchiveError {
    let message = err.to_string();
    match err.classify() {
        Category::Eof => UnarchiveError::truncated(CODEC, message),
        Category::Data => UnarchiveError::type_mismatch(CODEC, message),
        Category::Syntax | Category::Io => UnarchiveError::corrupt(CODEC, message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Sample {
        name: String,
        tags: Vec<String>,
    }

    #[test]
    fn test_decode_struct() {
        let decoder = JsonDecoder::new();
        let sample: Sample = decoder
            .decode(br#"{"name": "lidar", "tags": ["front", "3d"]}"#)
            .unwrap();
        assert_eq!(sample.name, "lidar");
        assert_eq!(sample.tags, vec!["front", "3d"]);
    }

    #[test]
    fn test_decode_dynamic_value() {
        let decoder = JsonDecoder::new();
        let value: serde_json::Value = decoder.decode(br#"{"a": [1, 2, {"b": null}]}"#).unwrap();
        assert_eq!(value["a"][1], 2);
        assert!(value["a"][2]["b"].is_null());
    }

    #[test]
    fn test_truncated_input() {
        let decoder = JsonDecoder::new();
        let result: Result<Sample> = decoder.decode(br#"{"name": "lid"#);
        assert!(matches!(result, Err(UnarchiveError::Truncated { .. })));
    }

    #[test]
    fn test_syntax_error_is_corrupt() {
        let decoder = JsonDecoder::new();
        let result: Result<serde_json::Value> = decoder.decode(b"{not json}");
        assert!(matches!(result, Err(UnarchiveError::Corrupt { .. })));
    }

    #[test]
    fn test_trailing_characters_are_corrupt() {
        let decoder = JsonDecoder::new();
        let result: Result<serde_json::Value> = decoder.decode(b"[1, 2] garbage");
        assert!(matches!(result, Err(UnarchiveError::Corrupt { .. })));
    }

    #[test]
    fn test_wrong_shape_is_type_mismatch() {
        let decoder = JsonDecoder::new();
        let result: Result<Sample> = decoder.decode(br#"{"name": 5, "tags": []}"#);
        match result {
            Err(UnarchiveError::TypeMismatch { codec, .. }) => assert_eq!(codec, "JSON"),
            other => panic!("expected type mismatch, got {other:?}"),
        }
    }
}
