//! Plugin configuration loaded from environment variables.
//!
//! BioImageIT passes backend settings through the environment; a local
//! `.env` file is honored for development setups.

use std::env;
use std::fmt;
use std::path::PathBuf;

/// CID backend configuration, loaded once when the service is built.
#[derive(Clone)]
pub struct Config {
    /// Root URL of the CID REST API (no trailing slash)
    pub cid_host: String,
    /// CID account used to authenticate
    pub cid_username: String,
    /// CID account password
    pub cid_password: String,
    /// Local directory where data files are materialized
    pub workspace: PathBuf,
    /// Optional path to a formats definition file
    pub formats_file: Option<PathBuf>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("cid_host", &self.cid_host)
            .field("cid_username", &self.cid_username)
            .field("cid_password", &"<redacted>")
            .field("workspace", &self.workspace)
            .field("formats_file", &self.formats_file)
            .finish()
    }
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            cid_host: "http://localhost:8080".to_string(),
            cid_username: "test_user".to_string(),
            cid_password: "test_password".to_string(),
            workspace: PathBuf::from("./workspace"),
            formats_file: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `CID_HOST`, `CID_USERNAME` and `CID_PASSWORD` are required.
    /// `BIOIMAGEIT_WORKSPACE` defaults to `./workspace`;
    /// `BIOIMAGEIT_FORMATS` is optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            cid_host: env::var("CID_HOST")
                .map(|v| v.trim_end_matches('/').to_string())
                .map_err(|_| ConfigError::Missing("CID_HOST"))?,
            cid_username: env::var("CID_USERNAME")
                .map_err(|_| ConfigError::Missing("CID_USERNAME"))?,
            cid_password: env::var("CID_PASSWORD")
                .map_err(|_| ConfigError::Missing("CID_PASSWORD"))?,
            workspace: env::var("BIOIMAGEIT_WORKSPACE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./workspace")),
            formats_file: env::var("BIOIMAGEIT_FORMATS").ok().map(PathBuf::from),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("CID_HOST", "https://cid.example.org/api/");
        env::set_var("CID_USERNAME", "alice");
        env::set_var("CID_PASSWORD", "s3cret");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.cid_host, "https://cid.example.org/api");
        assert_eq!(config.cid_username, "alice");
        assert_eq!(config.workspace, PathBuf::from("./workspace"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = Config::default();
        let printed = format!("{:?}", config);
        assert!(!printed.contains("test_password"));
        assert!(printed.contains("<redacted>"));
    }
}
