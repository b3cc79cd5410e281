// SPDX-License-Identifier: MIT
// Copyright 2026 The BioImageIT developers

//! Dataset container.

use super::Container;
use serde::{Deserialize, Serialize};

/// A named collection of data entries inside an experiment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    /// Stable identifier
    pub uuid: String,
    /// Locator of the dataset
    pub md_uri: String,
    /// Dataset name
    pub name: String,
    /// References to the contained data entries
    #[serde(default)]
    pub data: Vec<Container>,
}
