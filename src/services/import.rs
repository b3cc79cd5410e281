// SPDX-License-Identifier: MIT
// Copyright 2026 The BioImageIT developers

//! Bulk directory import.
//!
//! Imports every file of a local directory whose name matches a regular
//! expression into an experiment's raw dataset. Uploads run with bounded
//! concurrency; registered observers are notified as files settle.

use crate::error::{DataServiceError, Result};
use crate::models::{Experiment, RawData};
use crate::services::CidMetadataService;
use crate::time_utils::resolve_date;
use futures_util::{stream, StreamExt};
use regex::Regex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Upper bound on concurrent uploads during a directory import.
const MAX_CONCURRENT_IMPORTS: usize = 8;

/// Observer notified as a directory import progresses.
pub trait ImportObserver: Send + Sync {
    /// Called after each file upload settles, whatever its outcome.
    fn notify_progress(&self, done: usize, total: usize, file_name: &str);
}

/// List the files of `dir` whose names match `filter`, in name order.
///
/// Immediate children only; subdirectories are skipped.
fn list_dir_filtered(dir: &Path, filter: &Regex) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if filter.is_match(name) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

impl CidMetadataService {
    /// Import the matching files of a directory into the experiment.
    ///
    /// `filter` is a regular expression matched against file names. When
    /// `directory_tag_key` is not empty, every imported file is annotated
    /// `{directory_tag_key: <directory name>}` and the key is added to
    /// the experiment vocabulary.
    ///
    /// Results come back in file name order. The first failed upload
    /// aborts the import with that error once in-flight uploads settle.
    #[allow(clippy::too_many_arguments)]
    pub async fn import_dir(
        &self,
        experiment: &Experiment,
        dir_uri: &str,
        filter: &str,
        author: &str,
        format: &str,
        date: &str,
        directory_tag_key: &str,
        observers: &[&dyn ImportObserver],
    ) -> Result<Vec<RawData>> {
        let filter = Regex::new(filter)
            .map_err(|e| DataServiceError::Invalid(format!("Invalid import filter: {}", e)))?;
        // Fail on an unknown format before touching any file.
        self.formats().get(format)?;

        let dir = Path::new(dir_uri);
        let files = list_dir_filtered(dir, &filter)?;
        let total = files.len();
        let dir_name = dir
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        tracing::info!(dir = %dir_uri, count = total, "Importing directory");

        // One timestamp for the whole batch.
        let date = resolve_date(date);

        let mut key_value_pairs = HashMap::new();
        if !directory_tag_key.is_empty() {
            key_value_pairs.insert(directory_tag_key.to_string(), dir_name);
        }

        let done = AtomicUsize::new(0);
        let done_counter = &done;
        let mut results: Vec<(usize, Result<RawData>)> = stream::iter(files.iter().enumerate())
            .map(|(index, path)| {
                let key_value_pairs = key_value_pairs.clone();
                let date = date.clone();
                async move {
                    let name = path
                        .file_stem()
                        .and_then(|n| n.to_str())
                        .unwrap_or_default()
                        .to_string();
                    let result = self
                        .import_data(experiment, path, &name, author, format, &date, key_value_pairs)
                        .await;

                    let done = done_counter.fetch_add(1, Ordering::SeqCst) + 1;
                    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
                    for observer in observers {
                        observer.notify_progress(done, total, file_name);
                    }
                    (index, result)
                }
            })
            .buffer_unordered(MAX_CONCURRENT_IMPORTS)
            .collect()
            .await;

        results.sort_by_key(|(index, _)| *index);
        let mut imported = Vec::with_capacity(results.len());
        for (_, result) in results {
            imported.push(result?);
        }

        // Register the directory key in the experiment vocabulary.
        if !directory_tag_key.is_empty() {
            let mut updated = self.get_experiment(&experiment.md_uri).await?;
            if !updated.keys.iter().any(|k| k == directory_tag_key) {
                updated.add_key(directory_tag_key);
                self.update_experiment(&updated).await?;
            }
        }

        tracing::info!(count = imported.len(), "Directory import finished");
        Ok(imported)
    }
}
