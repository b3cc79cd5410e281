// SPDX-License-Identifier: MIT
// Copyright 2026 The BioImageIT developers

//! Services module - the metadata service and its helpers.

pub mod import;
pub mod metadata;

pub use import::ImportObserver;
pub use metadata::{
    CidMetadataService, CidMetadataServiceBuilder, RAW_DATASET_NAME, SERVICE_NAME,
};
