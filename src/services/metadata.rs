// SPDX-License-Identifier: MIT
// Copyright 2026 The BioImageIT developers

//! CID metadata service.
//!
//! Implements the BioImageIT data-service contract (experiments,
//! datasets, raw and processed data, runs) on top of the low-level CID
//! client. The service owns:
//! - the session token, re-authenticating once behind a single-flight
//!   lock when CID reports the session expired
//! - an in-memory read cache for experiments and datasets, invalidated
//!   by the mutations that can stale it
//! - format resolution and workspace path composition for local files

use crate::client::CidClient;
use crate::config::Config;
use crate::error::{DataServiceError, Result};
use crate::formats::FormatRegistry;
use crate::models::{
    Container, DataType, Dataset, Experiment, ProcessedData, ProcessedDataInput, RawData, Run,
    RunInput, RunParameter,
};
use crate::time_utils::resolve_date;
use crate::workspace;
use dashmap::DashMap;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{Mutex, OnceCell, RwLock};

/// Service name reported to the host platform.
pub const SERVICE_NAME: &str = "CidMetadataService";

/// Name of the dataset receiving imported files.
///
/// Every experiment owns exactly one dataset with this label; all other
/// datasets of a project hold processed data.
pub const RAW_DATASET_NAME: &str = "data";

/// Metadata service backed by a CID database.
#[derive(Debug)]
pub struct CidMetadataService {
    client: CidClient,
    formats: FormatRegistry,
    workspace: PathBuf,
    username: String,
    password: String,
    /// Current session token; `None` after logout.
    token: RwLock<Option<String>>,
    /// Serializes re-authentication so concurrent 401s trigger one handshake.
    auth_lock: Mutex<()>,
    experiment_cache: DashMap<String, Experiment>,
    dataset_cache: DashMap<String, Dataset>,
}

impl CidMetadataService {
    /// Connect to the CID database described by `config`.
    ///
    /// Loads the format registry and performs the initial token handshake.
    pub async fn connect(config: &Config) -> Result<Self> {
        let formats = match &config.formats_file {
            Some(path) => FormatRegistry::load_from_file(path)?,
            None => FormatRegistry::defaults(),
        };

        let client = CidClient::new(&config.cid_host);
        tracing::info!(host = %config.cid_host, "Connecting to the CID database");
        let token = client
            .authenticate(&config.cid_username, &config.cid_password)
            .await?;
        tracing::info!(host = %config.cid_host, "CID session opened");

        Ok(Self {
            client,
            formats,
            workspace: config.workspace.clone(),
            username: config.cid_username.clone(),
            password: config.cid_password.clone(),
            token: RwLock::new(Some(token)),
            auth_lock: Mutex::new(()),
            experiment_cache: DashMap::new(),
            dataset_cache: DashMap::new(),
        })
    }

    /// Local workspace directory.
    pub fn workspace(&self) -> &Path {
        &self.workspace
    }

    /// Format registry in use.
    pub fn formats(&self) -> &FormatRegistry {
        &self.formats
    }

    /// Whether the host platform should purge workspace files after
    /// processing. Always true: the CID database is the storage of record.
    pub fn needs_cleaning(&self) -> bool {
        true
    }

    // ─── Session management ──────────────────────────────────────────────

    /// Current session token, authenticating if there is none.
    async fn current_token(&self) -> Result<String> {
        if let Some(token) = self.token.read().await.as_deref() {
            return Ok(token.to_string());
        }
        self.reauthenticate("").await
    }

    /// Re-authenticate after `stale` was rejected.
    ///
    /// Single-flight: concurrent callers wait on the lock, then re-check
    /// whether another task already obtained a fresh token.
    async fn reauthenticate(&self, stale: &str) -> Result<String> {
        let _guard = self.auth_lock.lock().await;

        {
            let current = self.token.read().await;
            if let Some(token) = current.as_deref() {
                if token != stale {
                    return Ok(token.to_string());
                }
            }
        }

        tracing::info!("CID session expired, re-authenticating");
        let token = self.client.authenticate(&self.username, &self.password).await?;
        *self.token.write().await = Some(token.clone());
        Ok(token)
    }

    /// Invalidate the CID session.
    pub async fn logout(&self) -> Result<()> {
        let token = self.token.write().await.take();
        if let Some(token) = token {
            self.client.logout(&token).await?;
            tracing::info!("CID session closed");
        }
        Ok(())
    }

    // ─── Authenticated request helpers ───────────────────────────────────
    // Each helper retries its request exactly once after a transparent
    // re-authentication when CID rejects the session token.

    async fn query<T: DeserializeOwned>(
        &self,
        action: &str,
        parameter: &str,
        value: &str,
    ) -> Result<T> {
        let token = self.current_token().await?;
        match self.client.get_entities(&token, action, parameter, value).await {
            Err(e) if e.is_auth_error() => {
                let token = self.reauthenticate(&token).await?;
                self.client.get_entities(&token, action, parameter, value).await
            }
            other => other,
        }
    }

    async fn create<T: DeserializeOwned>(&self, form: &[(&str, String)]) -> Result<T> {
        let token = self.current_token().await?;
        match self.client.create_entity(&token, form).await {
            Err(e) if e.is_auth_error() => {
                let token = self.reauthenticate(&token).await?;
                self.client.create_entity(&token, form).await
            }
            other => other,
        }
    }

    async fn write(&self, form: &[(&str, String)]) -> Result<()> {
        let token = self.current_token().await?;
        match self.client.update_entity(&token, form).await {
            Err(e) if e.is_auth_error() => {
                let token = self.reauthenticate(&token).await?;
                self.client.update_entity(&token, form).await
            }
            other => other,
        }
    }

    async fn upload<T: DeserializeOwned>(
        &self,
        fields: &[(&str, String)],
        file_name: &str,
        content: Vec<u8>,
    ) -> Result<T> {
        let token = self.current_token().await?;
        match self
            .client
            .upload_data(&token, fields, file_name, content.clone())
            .await
        {
            Err(e) if e.is_auth_error() => {
                let token = self.reauthenticate(&token).await?;
                self.client.upload_data(&token, fields, file_name, content).await
            }
            other => other,
        }
    }

    async fn fetch_bytes(&self, id_data: &str) -> Result<Vec<u8>> {
        let token = self.current_token().await?;
        match self.client.download_data(&token, id_data).await {
            Err(e) if e.is_auth_error() => {
                let token = self.reauthenticate(&token).await?;
                self.client.download_data(&token, id_data).await
            }
            other => other,
        }
    }

    /// Fetch one data record by id.
    async fn data_record(&self, md_uri: &str) -> Result<DataRecord> {
        let response: DataListResponse = self.query("data", "id_data", md_uri).await?;
        response
            .data
            .into_iter()
            .next()
            .ok_or_else(|| DataServiceError::NotFound(format!("data {}", md_uri)))
    }

    // ─── Experiments ─────────────────────────────────────────────────────

    /// Create a new experiment with its raw dataset.
    pub async fn create_experiment(
        &self,
        name: &str,
        author: &str,
        date: &str,
        keys: &[String],
    ) -> Result<Experiment> {
        let date = resolve_date(date);
        let form = [
            ("action", "new_project".to_string()),
            ("label", name.to_string()),
            ("owner", author.to_string()),
            ("date", date.clone()),
            ("keys", to_json(&keys)?),
        ];
        let created: CreatedResponse = self.create(&form).await?;

        // Every experiment owns a raw dataset receiving imported files.
        let raw_form = [
            ("action", "new_dataset".to_string()),
            ("id_project", created.id.clone()),
            ("label", RAW_DATASET_NAME.to_string()),
        ];
        let raw: CreatedResponse = self.create(&raw_form).await?;

        tracing::info!(id = %created.id, name, "Experiment created");
        Ok(Experiment {
            uuid: created.id.clone(),
            md_uri: created.id,
            name: name.to_string(),
            author: author.to_string(),
            date,
            raw_dataset: Container::from_id(raw.id),
            processed_datasets: Vec::new(),
            keys: keys.to_vec(),
        })
    }

    /// List the experiments owned by the authenticated user.
    ///
    /// Shallow listing: dataset references are not resolved.
    pub async fn get_workspace_experiments(&self) -> Result<Vec<Experiment>> {
        let response: ProjectsResponse = self.query("projects", "owner", &self.username).await?;
        Ok(response
            .projects
            .into_iter()
            .map(|record| experiment_from(record, Vec::new()))
            .collect())
    }

    /// Read an experiment and its dataset references.
    pub async fn get_experiment(&self, md_uri: &str) -> Result<Experiment> {
        if let Some(cached) = self.experiment_cache.get(md_uri) {
            return Ok(cached.clone());
        }

        let response: ProjectsResponse = self.query("project", "id_project", md_uri).await?;
        let record = response
            .projects
            .into_iter()
            .next()
            .ok_or_else(|| DataServiceError::NotFound(format!("experiment {}", md_uri)))?;

        let datasets: DatasetsResponse =
            self.query("project_datasets", "id_project", &record.id).await?;

        let experiment = experiment_from(record, datasets.datasets);
        self.experiment_cache
            .insert(md_uri.to_string(), experiment.clone());
        Ok(experiment)
    }

    /// Write an experiment back to the database.
    pub async fn update_experiment(&self, experiment: &Experiment) -> Result<()> {
        if experiment.md_uri.is_empty() {
            return Err(DataServiceError::Invalid(
                "experiment has no md_uri".to_string(),
            ));
        }

        let form = [
            ("action", "update_project".to_string()),
            ("id_project", experiment.md_uri.clone()),
            ("label", experiment.name.clone()),
            ("owner", experiment.author.clone()),
            ("date", experiment.date.clone()),
            ("keys", to_json(&experiment.keys)?),
        ];
        self.write(&form).await?;
        self.experiment_cache.remove(&experiment.md_uri);
        Ok(())
    }

    // ─── Raw data ────────────────────────────────────────────────────────

    /// Import one data file into the experiment's raw dataset.
    pub async fn import_data(
        &self,
        experiment: &Experiment,
        data_path: impl AsRef<Path>,
        name: &str,
        author: &str,
        format: &str,
        date: &str,
        key_value_pairs: HashMap<String, String>,
    ) -> Result<RawData> {
        // The format must be known before any file access.
        self.formats.get(format)?;
        if experiment.raw_dataset.is_empty() {
            return Err(DataServiceError::Invalid(format!(
                "experiment {} has no raw dataset",
                experiment.md_uri
            )));
        }

        let path = data_path.as_ref();
        let content = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(name)
            .to_string();
        let date = resolve_date(date);

        let fields = [
            ("id_dataset", experiment.raw_dataset.md_uri.clone()),
            ("label", name.to_string()),
            ("owner", author.to_string()),
            ("date", date.clone()),
            ("format", format.to_string()),
            ("key_value", to_json(&key_value_pairs)?),
        ];
        let created: CreatedResponse = self.upload(&fields, &file_name, content).await?;

        self.dataset_cache.remove(&experiment.raw_dataset.md_uri);
        tracing::info!(id = %created.id, name, "Data imported");
        Ok(RawData {
            uuid: created.id.clone(),
            md_uri: created.id,
            name: name.to_string(),
            author: author.to_string(),
            date,
            format: format.to_string(),
            uri: created.url,
            key_value_pairs,
        })
    }

    /// Read a raw data entry.
    pub async fn get_raw_data(&self, md_uri: &str) -> Result<RawData> {
        let record = self.data_record(md_uri).await?;
        Ok(raw_data_from(record))
    }

    /// Write a raw data entry back to the database.
    pub async fn update_raw_data(&self, raw_data: &RawData) -> Result<()> {
        if raw_data.md_uri.is_empty() {
            return Err(DataServiceError::Invalid(
                "raw data has no md_uri".to_string(),
            ));
        }

        let form = [
            ("action", "update_data".to_string()),
            ("id_data", raw_data.md_uri.clone()),
            ("label", raw_data.name.clone()),
            ("owner", raw_data.author.clone()),
            ("date", raw_data.date.clone()),
            ("format", raw_data.format.clone()),
            ("type", DataType::Raw.to_string()),
            ("key_value", to_json(&raw_data.key_value_pairs)?),
        ];
        self.write(&form).await
    }

    // ─── Processed data ──────────────────────────────────────────────────

    /// Read a processed data entry.
    pub async fn get_processed_data(&self, md_uri: &str) -> Result<ProcessedData> {
        let record = self.data_record(md_uri).await?;
        Ok(processed_data_from(record))
    }

    /// Write a processed data entry back to the database.
    pub async fn update_processed_data(&self, processed_data: &ProcessedData) -> Result<()> {
        if processed_data.md_uri.is_empty() {
            return Err(DataServiceError::Invalid(
                "processed data has no md_uri".to_string(),
            ));
        }

        let form = [
            ("action", "update_data".to_string()),
            ("id_data", processed_data.md_uri.clone()),
            ("label", processed_data.name.clone()),
            ("owner", processed_data.author.clone()),
            ("date", processed_data.date.clone()),
            ("format", processed_data.format.clone()),
            ("type", DataType::Processed.to_string()),
            ("id_run", processed_data.run.md_uri.clone()),
            ("inputs", to_json(&processed_data.inputs)?),
            ("output_name", processed_data.output_name.clone()),
            ("output_label", processed_data.output_label.clone()),
        ];
        self.write(&form).await
    }

    /// Register a processed data entry produced by `run` in `dataset`.
    ///
    /// The entry's locators are assigned by the database; when no local
    /// uri is set yet, it is composed from the workspace first.
    pub async fn create_data(
        &self,
        dataset: &Dataset,
        run: &Run,
        mut processed_data: ProcessedData,
    ) -> Result<ProcessedData> {
        if processed_data.uri.is_empty() {
            self.create_data_uri(&mut processed_data)?;
        }
        processed_data.date = resolve_date(&processed_data.date);

        let form = [
            ("action", "new_data".to_string()),
            ("id_dataset", dataset.md_uri.clone()),
            ("id_run", run.md_uri.clone()),
            ("label", processed_data.name.clone()),
            ("owner", processed_data.author.clone()),
            ("date", processed_data.date.clone()),
            ("format", processed_data.format.clone()),
            ("type", DataType::Processed.to_string()),
            ("inputs", to_json(&processed_data.inputs)?),
            ("output_name", processed_data.output_name.clone()),
            ("output_label", processed_data.output_label.clone()),
        ];
        let created: CreatedResponse = self.create(&form).await?;

        processed_data.uuid = created.id.clone();
        processed_data.md_uri = created.id;
        processed_data.run = Container::from_id(run.md_uri.clone());
        self.dataset_cache.remove(&dataset.md_uri);
        Ok(processed_data)
    }

    // ─── Datasets ────────────────────────────────────────────────────────

    /// Read a dataset and its data references.
    pub async fn get_dataset(&self, md_uri: &str) -> Result<Dataset> {
        if let Some(cached) = self.dataset_cache.get(md_uri) {
            return Ok(cached.clone());
        }

        let response: DatasetsResponse = self.query("dataset", "id_dataset", md_uri).await?;
        let record = response
            .datasets
            .into_iter()
            .next()
            .ok_or_else(|| DataServiceError::NotFound(format!("dataset {}", md_uri)))?;

        let data: DataListResponse = self.query("dataset_data", "id_dataset", &record.id).await?;

        let dataset = Dataset {
            uuid: record.id.clone(),
            md_uri: record.id,
            name: record.label,
            data: data.data.into_iter().map(|d| Container::from_id(d.id)).collect(),
        };
        self.dataset_cache.insert(md_uri.to_string(), dataset.clone());
        Ok(dataset)
    }

    /// Create a processed dataset in an experiment.
    pub async fn create_dataset(&self, experiment: &Experiment, name: &str) -> Result<Dataset> {
        let form = [
            ("action", "new_dataset".to_string()),
            ("id_project", experiment.md_uri.clone()),
            ("label", name.to_string()),
        ];
        let created: CreatedResponse = self.create(&form).await?;

        self.experiment_cache.remove(&experiment.md_uri);
        tracing::info!(id = %created.id, name, "Dataset created");
        Ok(Dataset {
            uuid: created.id.clone(),
            md_uri: created.id,
            name: name.to_string(),
            data: Vec::new(),
        })
    }

    /// Write a dataset back to the database.
    pub async fn update_dataset(&self, dataset: &Dataset) -> Result<()> {
        if dataset.md_uri.is_empty() {
            return Err(DataServiceError::Invalid(
                "dataset has no md_uri".to_string(),
            ));
        }

        let form = [
            ("action", "update_dataset".to_string()),
            ("id_dataset", dataset.md_uri.clone()),
            ("label", dataset.name.clone()),
        ];
        self.write(&form).await?;
        self.dataset_cache.remove(&dataset.md_uri);
        Ok(())
    }

    // ─── Runs ────────────────────────────────────────────────────────────

    /// Record a new run on a dataset.
    ///
    /// The run's locators are ignored and assigned by the database.
    pub async fn create_run(&self, dataset: &Dataset, run: &Run) -> Result<Run> {
        let form = [
            ("action", "new_run".to_string()),
            ("id_dataset", dataset.md_uri.clone()),
            ("process_name", run.process_name.clone()),
            ("process_uri", run.process_uri.clone()),
            ("inputs", to_json(&run.inputs)?),
            ("parameters", to_json(&run.parameters)?),
        ];
        let created: CreatedResponse = self.create(&form).await?;

        tracing::info!(id = %created.id, process = %run.process_name, "Run created");
        Ok(Run {
            uuid: created.id.clone(),
            md_uri: created.id,
            process_name: run.process_name.clone(),
            process_uri: run.process_uri.clone(),
            processed_dataset: Container::from_id(dataset.md_uri.clone()),
            inputs: run.inputs.clone(),
            parameters: run.parameters.clone(),
        })
    }

    /// Read one run entry.
    pub async fn get_run(&self, md_uri: &str) -> Result<Run> {
        let response: RunsResponse = self.query("run", "id_run", md_uri).await?;
        let record = response
            .runs
            .into_iter()
            .next()
            .ok_or_else(|| DataServiceError::NotFound(format!("run {}", md_uri)))?;
        Ok(run_from(record))
    }

    /// Read all runs recorded on a dataset.
    pub async fn get_dataset_runs(&self, dataset: &Dataset) -> Result<Vec<Run>> {
        let response: RunsResponse = self.query("runs", "id_dataset", &dataset.md_uri).await?;
        Ok(response.runs.into_iter().map(run_from).collect())
    }

    // ─── Local workspace ─────────────────────────────────────────────────

    /// Workspace destination of a data file, from its name and format.
    pub fn data_destination(&self, name: &str, format: &str) -> Result<PathBuf> {
        let extension = self.formats.extension_of(format)?;
        Ok(workspace::data_destination(&self.workspace, name, extension))
    }

    /// Assign the workspace destination of a processed data entry.
    pub fn create_data_uri(&self, processed_data: &mut ProcessedData) -> Result<()> {
        let destination =
            self.data_destination(&processed_data.name, &processed_data.format)?;
        processed_data.uri = destination.to_string_lossy().into_owned();
        Ok(())
    }

    /// Download the file content of a data entry.
    ///
    /// An empty `destination_file_uri` resolves to the workspace path for
    /// the data's name and format. Returns the written path.
    pub async fn download_data(
        &self,
        md_uri: &str,
        destination_file_uri: &str,
    ) -> Result<PathBuf> {
        let record = self.data_record(md_uri).await?;

        let destination = if destination_file_uri.is_empty() {
            self.data_destination(&record.label, &record.format)?
        } else {
            PathBuf::from(destination_file_uri)
        };

        let content = self.fetch_bytes(&record.id).await?;
        if let Some(parent) = destination.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&destination, &content).await?;

        tracing::info!(id = %record.id, destination = %destination.display(), "Data downloaded");
        Ok(destination)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// CidMetadataServiceBuilder - memoizing constructor
// ─────────────────────────────────────────────────────────────────────────────

/// Memoizing service constructor.
///
/// The host platform builds the service once per session and shares it;
/// the first `get_or_connect` call opens the CID session, later calls
/// return the same instance.
#[derive(Default)]
pub struct CidMetadataServiceBuilder {
    instance: OnceCell<Arc<CidMetadataService>>,
}

impl CidMetadataServiceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect on first call, then return the shared instance.
    pub async fn get_or_connect(&self, config: &Config) -> Result<Arc<CidMetadataService>> {
        self.instance
            .get_or_try_init(|| async {
                Ok(Arc::new(CidMetadataService::connect(config).await?))
            })
            .await
            .cloned()
    }
}

// ─── Wire records ────────────────────────────────────────────────────────

/// `set_data.php` / `upload_data.php` creation response.
#[derive(Debug, Deserialize)]
struct CreatedResponse {
    id: String,
    #[serde(default)]
    url: String,
}

/// Wire shape of a CID project record.
#[derive(Debug, Deserialize)]
struct ProjectRecord {
    id: String,
    label: String,
    #[serde(default)]
    owner: String,
    #[serde(default)]
    date: String,
    #[serde(default)]
    keys: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ProjectsResponse {
    #[serde(default)]
    projects: Vec<ProjectRecord>,
}

/// Wire shape of a CID dataset record.
#[derive(Debug, Deserialize)]
struct DatasetRecord {
    id: String,
    label: String,
}

#[derive(Debug, Deserialize)]
struct DatasetsResponse {
    #[serde(default)]
    datasets: Vec<DatasetRecord>,
}

/// Wire shape of a CID data record (raw or processed).
#[derive(Debug, Deserialize)]
struct DataRecord {
    id: String,
    #[serde(default)]
    label: String,
    #[serde(default)]
    owner: String,
    #[serde(default)]
    date: String,
    #[serde(default)]
    format: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    key_value: HashMap<String, String>,
    #[serde(default)]
    id_run: String,
    #[serde(default)]
    inputs: Vec<ProcessedDataInput>,
    #[serde(default)]
    output_name: String,
    #[serde(default)]
    output_label: String,
}

#[derive(Debug, Deserialize)]
struct DataListResponse {
    #[serde(default)]
    data: Vec<DataRecord>,
}

/// Wire shape of a CID run record.
#[derive(Debug, Deserialize)]
struct RunRecord {
    id: String,
    #[serde(default)]
    process_name: String,
    #[serde(default)]
    process_uri: String,
    #[serde(default)]
    id_dataset: String,
    #[serde(default)]
    inputs: Vec<RunInput>,
    #[serde(default)]
    parameters: Vec<RunParameter>,
}

#[derive(Debug, Deserialize)]
struct RunsResponse {
    #[serde(default)]
    runs: Vec<RunRecord>,
}

// ─── Record conversions ──────────────────────────────────────────────────

fn experiment_from(record: ProjectRecord, datasets: Vec<DatasetRecord>) -> Experiment {
    let mut raw_dataset = Container::default();
    let mut processed_datasets = Vec::new();
    for dataset in datasets {
        if dataset.label == RAW_DATASET_NAME {
            raw_dataset = Container::from_id(dataset.id);
        } else {
            processed_datasets.push(Container::from_id(dataset.id));
        }
    }

    Experiment {
        uuid: record.id.clone(),
        md_uri: record.id,
        name: record.label,
        author: record.owner,
        date: record.date,
        raw_dataset,
        processed_datasets,
        keys: record.keys,
    }
}

fn raw_data_from(record: DataRecord) -> RawData {
    RawData {
        uuid: record.id.clone(),
        md_uri: record.id,
        name: record.label,
        author: record.owner,
        date: record.date,
        format: record.format,
        uri: record.url,
        key_value_pairs: record.key_value,
    }
}

fn processed_data_from(record: DataRecord) -> ProcessedData {
    ProcessedData {
        uuid: record.id.clone(),
        md_uri: record.id,
        name: record.label,
        author: record.owner,
        date: record.date,
        format: record.format,
        uri: record.url,
        run: Container::from_id(record.id_run),
        inputs: record.inputs,
        output_name: record.output_name,
        output_label: record.output_label,
    }
}

fn run_from(record: RunRecord) -> Run {
    Run {
        uuid: record.id.clone(),
        md_uri: record.id,
        process_name: record.process_name,
        process_uri: record.process_uri,
        processed_dataset: Container::from_id(record.id_dataset),
        inputs: record.inputs,
        parameters: record.parameters,
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| DataServiceError::Invalid(e.to_string()))
}
