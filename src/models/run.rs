// SPDX-License-Identifier: MIT
// Copyright 2026 The BioImageIT developers

//! Processing run containers.

use super::Container;
use serde::{Deserialize, Serialize};

/// Input selector recorded on a run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunInput {
    /// Input name declared by the tool
    pub name: String,
    /// Name of the dataset the input was taken from
    pub dataset: String,
    /// Query used to select the input data
    pub query: String,
    /// For processed inputs, the originating output name
    #[serde(default)]
    pub origin_output_name: String,
}

/// One tool parameter value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunParameter {
    /// Parameter name
    pub name: String,
    /// Parameter value, stringified
    pub value: String,
}

/// Metadata of one execution of a processing tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Run {
    /// Stable identifier
    pub uuid: String,
    /// Locator of the run entry
    pub md_uri: String,
    /// Name of the processing tool
    pub process_name: String,
    /// Locator of the processing tool definition
    pub process_uri: String,
    /// Dataset receiving the run outputs
    pub processed_dataset: Container,
    /// Input selectors
    #[serde(default)]
    pub inputs: Vec<RunInput>,
    /// Tool parameters
    #[serde(default)]
    pub parameters: Vec<RunParameter>,
}
