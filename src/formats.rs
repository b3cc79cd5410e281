// SPDX-License-Identifier: MIT
// Copyright 2026 The BioImageIT developers

//! Data format registry.
//!
//! BioImageIT identifies data formats by name (`tif`, `csv`, ...) and
//! needs the matching file extension when composing workspace paths.
//! Definitions come from a JSON file shipped with the platform; a
//! built-in table covers the common formats when no file is configured.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// One data format definition.
#[derive(Debug, Clone, Deserialize)]
pub struct Format {
    /// Format name used in metadata (ex: tif)
    pub name: String,
    /// File extension without the dot (ex: tif)
    pub extension: String,
    /// Human readable description
    #[serde(default)]
    pub description: String,
}

/// File shape of a formats definition document.
#[derive(Debug, Deserialize)]
struct FormatsFile {
    formats: Vec<Format>,
}

/// Registry resolving format names to their definitions.
///
/// Lookups are case-insensitive on the format name.
#[derive(Debug, Clone, Default)]
pub struct FormatRegistry {
    formats: HashMap<String, Format>,
}

impl FormatRegistry {
    /// Load format definitions from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, FormatError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| FormatError::Io(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load format definitions from a JSON string.
    ///
    /// Duplicate names keep the last definition.
    pub fn load_from_json(json_data: &str) -> Result<Self, FormatError> {
        let file: FormatsFile =
            serde_json::from_str(json_data).map_err(|e| FormatError::Parse(e.to_string()))?;

        let mut formats = HashMap::new();
        for format in file.formats {
            formats.insert(format.name.to_lowercase(), format);
        }

        tracing::info!(count = formats.len(), "Loaded data formats");
        Ok(Self { formats })
    }

    /// Built-in table used when no formats file is configured.
    pub fn defaults() -> Self {
        let defs = [
            ("tif", "tif", "TIFF image"),
            ("movietif", "tif", "Multi-page TIFF movie"),
            ("png", "png", "PNG image"),
            ("csv", "csv", "Comma separated values"),
            ("json", "json", "JSON document"),
            ("txt", "txt", "Plain text"),
            ("zip", "zip", "Zip archive"),
        ];

        let mut formats = HashMap::new();
        for (name, extension, description) in defs {
            formats.insert(
                name.to_string(),
                Format {
                    name: name.to_string(),
                    extension: extension.to_string(),
                    description: description.to_string(),
                },
            );
        }
        Self { formats }
    }

    /// Look up a format by name.
    pub fn get(&self, name: &str) -> Result<&Format, FormatError> {
        self.formats
            .get(&name.to_lowercase())
            .ok_or_else(|| FormatError::Unknown(name.to_string()))
    }

    /// File extension of a format.
    pub fn extension_of(&self, name: &str) -> Result<&str, FormatError> {
        Ok(self.get(name)?.extension.as_str())
    }
}

/// Errors from format registry operations.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("Failed to read formats file: {0}")]
    Io(String),

    #[error("Failed to parse formats file: {0}")]
    Parse(String),

    #[error("Unknown format: {0}")]
    Unknown(String),
}
