// SPDX-License-Identifier: MIT
// Copyright 2026 The BioImageIT developers

//! BioImageIT CID storage plugin.
//!
//! This crate lets the BioImageIT platform use a CID database (SisNcom)
//! as the storage backend for experiment data and metadata. It provides
//! the full data-service contract: experiments, datasets, raw and
//! processed data, and processing runs, stored and queried through the
//! CID REST API.

pub mod client;
pub mod config;
pub mod error;
pub mod formats;
pub mod models;
pub mod services;
pub mod time_utils;
pub mod workspace;

pub use error::{DataServiceError, Result};
pub use services::{CidMetadataService, CidMetadataServiceBuilder};

/// Plugin name in the BioImageIT service registry.
pub const PLUGIN_NAME: &str = "CID";

/// Plugin kind: a data (metadata + storage) backend.
pub const PLUGIN_KIND: &str = "data";
