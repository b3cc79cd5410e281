// SPDX-License-Identifier: MIT
// Copyright 2026 The BioImageIT developers

//! Local workspace path handling.
//!
//! Data files are materialized in a local workspace directory before and
//! after processing; the host platform purges it between jobs.

use std::path::{Path, PathBuf};

/// Compose the workspace destination of a data file.
pub fn data_destination(workspace: &Path, name: &str, extension: &str) -> PathBuf {
    workspace.join(format!("{}.{}", name, extension))
}

/// Create the workspace directory tree if needed.
pub async fn ensure_workspace(path: &Path) -> std::io::Result<()> {
    tokio::fs::create_dir_all(path).await
}
