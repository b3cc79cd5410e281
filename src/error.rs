// SPDX-License-Identifier: MIT
// Copyright 2026 The BioImageIT developers

//! Data-service error type shared across the plugin.

use crate::config::ConfigError;
use crate::formats::FormatError;

/// Error raised by the CID metadata service.
#[derive(Debug, thiserror::Error)]
pub enum DataServiceError {
    #[error("Authentication with the CID database failed")]
    Unauthorized,

    #[error("CID communication error: {0}")]
    Connection(String),

    #[error("CID request failed with HTTP {status}: {body}")]
    CidApi { status: u16, body: String },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Unknown data format: {0}")]
    UnknownFormat(String),

    #[error("Invalid data: {0}")]
    Invalid(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl DataServiceError {
    /// True when the error means the CID session is no longer valid.
    ///
    /// The service layer re-authenticates once and retries on these.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, DataServiceError::Unauthorized)
    }
}

impl From<FormatError> for DataServiceError {
    fn from(err: FormatError) -> Self {
        match err {
            FormatError::Unknown(name) => DataServiceError::UnknownFormat(name),
            FormatError::Io(msg) | FormatError::Parse(msg) => DataServiceError::Invalid(msg),
        }
    }
}

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, DataServiceError>;
