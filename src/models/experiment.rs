// SPDX-License-Identifier: MIT
// Copyright 2026 The BioImageIT developers

//! Experiment container.

use super::Container;
use serde::{Deserialize, Serialize};

/// Top-level experiment metadata (a CID project).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Experiment {
    /// Stable identifier
    pub uuid: String,
    /// Locator of the experiment
    pub md_uri: String,
    /// Experiment name
    pub name: String,
    /// Username of the experiment author
    pub author: String,
    /// Creation date (RFC3339)
    pub date: String,
    /// Reference to the raw dataset
    pub raw_dataset: Container,
    /// References to the processed datasets
    #[serde(default)]
    pub processed_datasets: Vec<Container>,
    /// Annotation key vocabulary
    #[serde(default)]
    pub keys: Vec<String>,
}

impl Experiment {
    /// Register a key in the annotation vocabulary.
    ///
    /// Keys are unique; registering an existing key is a no-op.
    pub fn add_key(&mut self, key: &str) {
        if !self.keys.iter().any(|k| k == key) {
            self.keys.push(key.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_key_deduplicates() {
        let mut experiment = Experiment::default();
        experiment.add_key("population");
        experiment.add_key("replica");
        experiment.add_key("population");

        assert_eq!(experiment.keys, vec!["population", "replica"]);
    }
}
