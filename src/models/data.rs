// SPDX-License-Identifier: MIT
// Copyright 2026 The BioImageIT developers

//! Raw and processed data containers.

use super::Container;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Kind of a stored data entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// Data imported from outside the platform
    #[default]
    Raw,
    /// Data produced by a processing run
    Processed,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Raw => write!(f, "raw"),
            DataType::Processed => write!(f, "processed"),
        }
    }
}

/// Data imported into an experiment's raw dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawData {
    /// Stable identifier
    pub uuid: String,
    /// Locator of the metadata entry
    pub md_uri: String,
    /// Data name
    pub name: String,
    /// Person who created the data
    pub author: String,
    /// Creation date (RFC3339)
    pub date: String,
    /// Format name (ex: tif)
    pub format: String,
    /// Storage location of the file content
    pub uri: String,
    /// Key/value annotations
    #[serde(default)]
    pub key_value_pairs: HashMap<String, String>,
}

/// Input reference recorded on a processed data entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessedDataInput {
    /// Input name declared by the processing tool
    pub name: String,
    /// Locator of the input data
    pub uri: String,
    /// Stable identifier of the input data
    pub uuid: String,
    /// Whether the input was raw or already processed
    pub data_type: DataType,
}

/// Data produced by a processing run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessedData {
    /// Stable identifier
    pub uuid: String,
    /// Locator of the metadata entry
    pub md_uri: String,
    /// Data name
    pub name: String,
    /// Person who ran the process
    pub author: String,
    /// Creation date (RFC3339)
    pub date: String,
    /// Format name (ex: tif)
    pub format: String,
    /// Location of the file content in the local workspace
    pub uri: String,
    /// Run that produced this data
    pub run: Container,
    /// Inputs consumed by the run for this output
    #[serde(default)]
    pub inputs: Vec<ProcessedDataInput>,
    /// Output slot name declared by the tool
    #[serde(default)]
    pub output_name: String,
    /// Output slot label
    #[serde(default)]
    pub output_label: String,
}
