// SPDX-License-Identifier: MIT
// Copyright 2026 The BioImageIT developers

//! Low-level CID REST client.
//!
//! Handles:
//! - The `authenticate.php` token handshake
//! - Entity queries through `get_data.php`
//! - Entity writes through `set_data.php`
//! - File transfer through `upload_data.php` / `download_data.php`
//!
//! The session token returned by `authenticate.php` is sent verbatim as
//! the `Authorization` header on every authenticated request. Status
//! handling follows the CID conventions: 204 is success with no body,
//! 401 means the session is no longer valid.

use crate::error::DataServiceError;
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// CID API endpoints (PHP scripts at the API root).
pub mod endpoints {
    pub const AUTHENTICATE: &str = "authenticate.php";
    pub const GET_DATA: &str = "get_data.php";
    pub const SET_DATA: &str = "set_data.php";
    pub const UPLOAD_DATA: &str = "upload_data.php";
    pub const DOWNLOAD_DATA: &str = "download_data.php";
}

/// Low-level CID database client.
#[derive(Clone, Debug)]
pub struct CidClient {
    http: reqwest::Client,
    base_url: String,
}

impl CidClient {
    /// Create a client for the CID API rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Full URL of an endpoint.
    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    // ─── Session ─────────────────────────────────────────────────────────

    /// Obtain a session token for the given account.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<String, DataServiceError> {
        let response = self
            .http
            .post(self.url(endpoints::AUTHENTICATE))
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .map_err(|e| DataServiceError::Connection(e.to_string()))?;

        let body: AuthResponse = Self::check_response_json(response).await?;
        match body.http_header_value {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(DataServiceError::Unauthorized),
        }
    }

    /// Invalidate a session token.
    pub async fn logout(&self, token: &str) -> Result<(), DataServiceError> {
        let response = self
            .http
            .delete(self.url(endpoints::AUTHENTICATE))
            .header(AUTHORIZATION, token)
            .send()
            .await
            .map_err(|e| DataServiceError::Connection(e.to_string()))?;

        Self::check_response(response).await
    }

    // ─── Entities ────────────────────────────────────────────────────────

    /// Entity query through `get_data.php`.
    pub async fn get_entities<T: DeserializeOwned>(
        &self,
        token: &str,
        action: &str,
        parameter: &str,
        value: &str,
    ) -> Result<T, DataServiceError> {
        let response = self
            .http
            .get(self.url(endpoints::GET_DATA))
            .header(AUTHORIZATION, token)
            .query(&[("action", action), ("parameter", parameter), ("value", value)])
            .send()
            .await
            .map_err(|e| DataServiceError::Connection(e.to_string()))?;

        Self::check_response_json(response).await
    }

    /// Entity creation through `set_data.php`, returning the parsed body.
    pub async fn create_entity<T: DeserializeOwned>(
        &self,
        token: &str,
        form: &[(&str, String)],
    ) -> Result<T, DataServiceError> {
        let response = self
            .http
            .post(self.url(endpoints::SET_DATA))
            .header(AUTHORIZATION, token)
            .form(form)
            .send()
            .await
            .map_err(|e| DataServiceError::Connection(e.to_string()))?;

        Self::check_response_json(response).await
    }

    /// Entity update through `set_data.php`.
    ///
    /// Updates answer 200 or 204; any body is discarded.
    pub async fn update_entity(
        &self,
        token: &str,
        form: &[(&str, String)],
    ) -> Result<(), DataServiceError> {
        let response = self
            .http
            .post(self.url(endpoints::SET_DATA))
            .header(AUTHORIZATION, token)
            .form(form)
            .send()
            .await
            .map_err(|e| DataServiceError::Connection(e.to_string()))?;

        Self::check_response(response).await
    }

    // ─── File transfer ───────────────────────────────────────────────────

    /// Upload one data file with its metadata fields.
    pub async fn upload_data<T: DeserializeOwned>(
        &self,
        token: &str,
        fields: &[(&str, String)],
        file_name: &str,
        content: Vec<u8>,
    ) -> Result<T, DataServiceError> {
        let mut form = reqwest::multipart::Form::new();
        for (name, value) in fields {
            form = form.text(name.to_string(), value.clone());
        }
        form = form.part(
            "file",
            reqwest::multipart::Part::bytes(content).file_name(file_name.to_string()),
        );

        let response = self
            .http
            .post(self.url(endpoints::UPLOAD_DATA))
            .header(AUTHORIZATION, token)
            .multipart(form)
            .send()
            .await
            .map_err(|e| DataServiceError::Connection(e.to_string()))?;

        Self::check_response_json(response).await
    }

    /// Download the file content of a data entry.
    pub async fn download_data(
        &self,
        token: &str,
        id_data: &str,
    ) -> Result<Vec<u8>, DataServiceError> {
        let response = self
            .http
            .get(self.url(endpoints::DOWNLOAD_DATA))
            .header(AUTHORIZATION, token)
            .query(&[("id_data", id_data)])
            .send()
            .await
            .map_err(|e| DataServiceError::Connection(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| DataServiceError::Connection(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    // ─── Response handling ───────────────────────────────────────────────

    /// Map a non-2xx response to the matching error.
    async fn error_from(response: reqwest::Response) -> DataServiceError {
        let status = response.status();

        if status.as_u16() == 401 {
            return DataServiceError::Unauthorized;
        }

        let body = response.text().await.unwrap_or_default();
        DataServiceError::CidApi {
            status: status.as_u16(),
            body,
        }
    }

    /// Check response status, discarding any body.
    async fn check_response(response: reqwest::Response) -> Result<(), DataServiceError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from(response).await)
        }
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, DataServiceError> {
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| DataServiceError::Invalid(format!("JSON parse error: {}", e)))
    }
}

/// `authenticate.php` response body.
#[derive(Debug, Deserialize)]
struct AuthResponse {
    #[serde(rename = "httpHeaderValue")]
    http_header_value: Option<String>,
}
