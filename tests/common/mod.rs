// SPDX-License-Identifier: MIT
// Copyright 2026 The BioImageIT developers

//! Shared test helpers: an in-process fake CID server backed by an
//! in-memory store, plus config/service constructors pointing at it.

use axum::extract::{Multipart, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use bioimageit_cid::config::Config;
use bioimageit_cid::services::CidMetadataService;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

pub const TEST_TOKEN: &str = "Bearer cid-test-token";
pub const TEST_USER: &str = "alice";
pub const TEST_PASSWORD: &str = "s3cret";

/// In-memory CID database state.
#[derive(Default)]
pub struct CidState {
    next_id: u64,
    /// Flip to false to simulate a server-side session expiry.
    pub token_valid: bool,
    /// Number of successful `authenticate.php` handshakes.
    pub auth_count: usize,
    pub projects: HashMap<String, Value>,
    pub datasets: HashMap<String, Value>,
    pub data: HashMap<String, Value>,
    pub runs: HashMap<String, Value>,
    /// Uploaded file content, keyed by data id.
    pub files: HashMap<String, Vec<u8>>,
}

impl CidState {
    fn alloc(&mut self) -> String {
        self.next_id += 1;
        self.next_id.to_string()
    }
}

pub type SharedState = Arc<Mutex<CidState>>;

/// Install a test subscriber once; `RUST_LOG` controls verbosity.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

/// Start a fake CID server on an ephemeral port.
///
/// Returns the base URL and a handle on the server state.
#[allow(dead_code)]
pub async fn spawn_cid_server() -> (String, SharedState) {
    init_tracing();
    let state: SharedState = Arc::new(Mutex::new(CidState::default()));
    let app = router(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test server");
    let addr = listener.local_addr().expect("test server address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });

    (format!("http://{}", addr), state)
}

/// Config pointing at the fake server.
#[allow(dead_code)]
pub fn test_config(host: &str, workspace: &Path) -> Config {
    Config {
        cid_host: host.to_string(),
        cid_username: TEST_USER.to_string(),
        cid_password: TEST_PASSWORD.to_string(),
        workspace: workspace.to_path_buf(),
        formats_file: None,
    }
}

/// Connect a service to the fake server.
#[allow(dead_code)]
pub async fn connect_service(host: &str, workspace: &Path) -> CidMetadataService {
    CidMetadataService::connect(&test_config(host, workspace))
        .await
        .expect("service should connect")
}

fn router(state: SharedState) -> Router {
    Router::new()
        .route("/authenticate.php", post(authenticate).delete(logout))
        .route("/get_data.php", get(get_data))
        .route("/set_data.php", post(set_data))
        .route("/upload_data.php", post(upload_data))
        .route("/download_data.php", get(download_data))
        .with_state(state)
}

fn authorized(headers: &HeaderMap, state: &CidState) -> bool {
    state.token_valid
        && headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            == Some(TEST_TOKEN)
}

#[derive(serde::Deserialize)]
struct AuthForm {
    username: String,
    password: String,
}

async fn authenticate(State(state): State<SharedState>, Form(form): Form<AuthForm>) -> Response {
    if form.username == TEST_USER && form.password == TEST_PASSWORD {
        let mut s = state.lock().unwrap();
        s.auth_count += 1;
        s.token_valid = true;
        Json(json!({ "httpHeaderValue": TEST_TOKEN })).into_response()
    } else {
        StatusCode::UNAUTHORIZED.into_response()
    }
}

async fn logout(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let mut s = state.lock().unwrap();
    if !authorized(&headers, &s) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    s.token_valid = false;
    StatusCode::NO_CONTENT.into_response()
}

async fn get_data(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let s = state.lock().unwrap();
    if !authorized(&headers, &s) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let action = params.get("action").cloned().unwrap_or_default();
    let value = params.get("value").cloned().unwrap_or_default();

    let body = match action.as_str() {
        "project" => {
            json!({ "projects": s.projects.get(&value).into_iter().collect::<Vec<_>>() })
        }
        "projects" => {
            let list: Vec<_> = s
                .projects
                .values()
                .filter(|p| p["owner"] == value.as_str())
                .collect();
            json!({ "projects": list })
        }
        "project_datasets" => {
            let list: Vec<_> = s
                .datasets
                .values()
                .filter(|d| d["id_project"] == value.as_str())
                .collect();
            json!({ "datasets": list })
        }
        "dataset" => {
            json!({ "datasets": s.datasets.get(&value).into_iter().collect::<Vec<_>>() })
        }
        "dataset_data" => {
            let list: Vec<_> = s
                .data
                .values()
                .filter(|d| d["id_dataset"] == value.as_str())
                .collect();
            json!({ "data": list })
        }
        "data" => {
            json!({ "data": s.data.get(&value).into_iter().collect::<Vec<_>>() })
        }
        "run" => {
            json!({ "runs": s.runs.get(&value).into_iter().collect::<Vec<_>>() })
        }
        "runs" => {
            let list: Vec<_> = s
                .runs
                .values()
                .filter(|r| r["id_dataset"] == value.as_str())
                .collect();
            json!({ "runs": list })
        }
        _ => return StatusCode::BAD_REQUEST.into_response(),
    };

    Json(body).into_response()
}

async fn set_data(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    let mut s = state.lock().unwrap();
    if !authorized(&headers, &s) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let field = |name: &str| fields.get(name).cloned().unwrap_or_default();
    let parse = |name: &str, default: Value| -> Value {
        fields
            .get(name)
            .and_then(|v| serde_json::from_str(v).ok())
            .unwrap_or(default)
    };

    match field("action").as_str() {
        "new_project" => {
            let id = s.alloc();
            let record = json!({
                "id": id,
                "label": field("label"),
                "owner": field("owner"),
                "date": field("date"),
                "keys": parse("keys", json!([])),
            });
            s.projects.insert(id.clone(), record);
            Json(json!({ "id": id })).into_response()
        }
        "update_project" => {
            let id = field("id_project");
            let keys = parse("keys", json!([]));
            match s.projects.get_mut(&id) {
                Some(record) => {
                    record["label"] = json!(field("label"));
                    record["owner"] = json!(field("owner"));
                    record["date"] = json!(field("date"));
                    record["keys"] = keys;
                    StatusCode::NO_CONTENT.into_response()
                }
                None => StatusCode::NOT_FOUND.into_response(),
            }
        }
        "new_dataset" => {
            let id = s.alloc();
            let record = json!({
                "id": id,
                "label": field("label"),
                "id_project": field("id_project"),
            });
            s.datasets.insert(id.clone(), record);
            Json(json!({ "id": id })).into_response()
        }
        "update_dataset" => {
            let id = field("id_dataset");
            match s.datasets.get_mut(&id) {
                Some(record) => {
                    record["label"] = json!(field("label"));
                    StatusCode::NO_CONTENT.into_response()
                }
                None => StatusCode::NOT_FOUND.into_response(),
            }
        }
        "update_data" => {
            let id = field("id_data");
            let key_value = parse("key_value", json!({}));
            let inputs = parse("inputs", json!([]));
            match s.data.get_mut(&id) {
                Some(record) => {
                    for name in ["label", "owner", "date", "format", "type", "id_run",
                                 "output_name", "output_label"] {
                        if let Some(value) = fields.get(name) {
                            record[name] = json!(value);
                        }
                    }
                    if fields.contains_key("key_value") {
                        record["key_value"] = key_value;
                    }
                    if fields.contains_key("inputs") {
                        record["inputs"] = inputs;
                    }
                    StatusCode::NO_CONTENT.into_response()
                }
                None => StatusCode::NOT_FOUND.into_response(),
            }
        }
        "new_run" => {
            let id = s.alloc();
            let record = json!({
                "id": id,
                "process_name": field("process_name"),
                "process_uri": field("process_uri"),
                "id_dataset": field("id_dataset"),
                "inputs": parse("inputs", json!([])),
                "parameters": parse("parameters", json!([])),
            });
            s.runs.insert(id.clone(), record);
            Json(json!({ "id": id })).into_response()
        }
        "new_data" => {
            let id = s.alloc();
            let url = format!("store/{}.dat", id);
            let record = json!({
                "id": id,
                "label": field("label"),
                "owner": field("owner"),
                "date": field("date"),
                "format": field("format"),
                "type": field("type"),
                "id_dataset": field("id_dataset"),
                "id_run": field("id_run"),
                "inputs": parse("inputs", json!([])),
                "output_name": field("output_name"),
                "output_label": field("output_label"),
                "url": url,
            });
            s.data.insert(id.clone(), record);
            Json(json!({ "id": id, "url": url })).into_response()
        }
        _ => StatusCode::BAD_REQUEST.into_response(),
    }
}

async fn upload_data(
    State(state): State<SharedState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    let mut fields: HashMap<String, String> = HashMap::new();
    let mut file_name = String::new();
    let mut content: Vec<u8> = Vec::new();

    while let Some(field) = multipart.next_field().await.expect("multipart field") {
        let name = field.name().unwrap_or_default().to_string();
        if name == "file" {
            file_name = field.file_name().unwrap_or_default().to_string();
            content = field.bytes().await.expect("file bytes").to_vec();
        } else {
            fields.insert(name, field.text().await.expect("field text"));
        }
    }

    let mut s = state.lock().unwrap();
    if !authorized(&headers, &s) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let id = s.alloc();
    let key_value: Value = fields
        .get("key_value")
        .and_then(|v| serde_json::from_str(v).ok())
        .unwrap_or_else(|| json!({}));
    let url = format!("store/{}/{}", id, file_name);
    let record = json!({
        "id": id,
        "label": fields.get("label").cloned().unwrap_or_default(),
        "owner": fields.get("owner").cloned().unwrap_or_default(),
        "date": fields.get("date").cloned().unwrap_or_default(),
        "format": fields.get("format").cloned().unwrap_or_default(),
        "type": "raw",
        "id_dataset": fields.get("id_dataset").cloned().unwrap_or_default(),
        "key_value": key_value,
        "url": url,
    });
    s.data.insert(id.clone(), record);
    s.files.insert(id.clone(), content);

    Json(json!({ "id": id, "url": url })).into_response()
}

async fn download_data(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let s = state.lock().unwrap();
    if !authorized(&headers, &s) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let id = params.get("id_data").cloned().unwrap_or_default();
    match s.files.get(&id) {
        Some(content) => content.clone().into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
