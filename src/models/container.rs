// SPDX-License-Identifier: MIT
// Copyright 2026 The BioImageIT developers

//! Entity reference containers.

use serde::{Deserialize, Serialize};

/// Reference to a stored metadata entity.
///
/// The CID backend uses the server record id both as locator (`md_uri`)
/// and as stable identifier (`uuid`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    /// Locator of the entity in the backend
    pub md_uri: String,
    /// Stable identifier of the entity
    pub uuid: String,
}

impl Container {
    /// Build a reference from a CID record id.
    pub fn from_id(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            md_uri: id.clone(),
            uuid: id,
        }
    }

    /// True when the reference points nowhere.
    pub fn is_empty(&self) -> bool {
        self.md_uri.is_empty()
    }
}

/// Lightweight dataset listing entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetInfo {
    /// Dataset name
    pub name: String,
    /// Locator of the dataset
    pub md_uri: String,
    /// Stable identifier of the dataset
    pub uuid: String,
}
