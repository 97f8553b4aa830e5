//! HTTP client for the certificate ledger service

use std::time::Duration;

use api_core::{
    AddBlockRequest, AddBlockResponse, ApiError, CertificateApi, Endpoint, HealthResponse,
    ValidateCertificateRequest, ValidateCertificateResponse,
};
use async_trait::async_trait;
use reqwest::{header, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::ApiConfig;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct HttpClient {
    base_url: Url,
    timeout: Duration,
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::build(base_url, DEFAULT_TIMEOUT, None)
    }

    pub fn with_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::build(&config.base_url, config.timeout(), Some(&config.user_agent))
    }

    fn build(base_url: &str, timeout: Duration, user_agent: Option<&str>) -> Result<Self, ApiError> {
        let mut base_url =
            Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(format!("{} cannot be a base URL", base_url)));
        }
        // Endpoint paths are joined relative to the base, so keep any prefix.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut builder = reqwest::Client::builder().timeout(timeout);
        if let Some(agent) = user_agent {
            builder = builder.user_agent(agent.to_string());
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { base_url, timeout, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url, ApiError> {
        self.base_url
            .join(endpoint.path().trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))
    }

    async fn post_json<B, T>(&self, endpoint: Endpoint, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint_url(endpoint)?;
        debug!(method = endpoint.method(), url = %url, "Sending request");

        let response = self
            .client
            .post(url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        self.decode(endpoint, response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, ApiError> {
        let url = self.endpoint_url(endpoint)?;
        debug!(method = endpoint.method(), url = %url, "Sending request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        self.decode(endpoint, response).await
    }

    async fn decode<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        debug!(endpoint = endpoint.path(), status = status.as_u16(), "Received response");

        if status.is_success() {
            serde_json::from_str(&body).map_err(|e| ApiError::Decode(format!("{}: {}", endpoint.path(), e)))
        } else {
            Err(ApiError::Http {
                status: status.as_u16(),
                detail: error_detail(status, &body),
            })
        }
    }

    fn transport_error(&self, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::Transport(format!("request timed out after {}s", self.timeout.as_secs()))
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// Message to show for a non-2xx response.
///
/// Uses the `detail` field when it is a string, its JSON text when it is
/// structured, then the raw body, then the status reason.
fn error_detail(status: StatusCode, body: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        match map.get("detail") {
            Some(Value::String(detail)) => return detail.clone(),
            Some(other) => return other.to_string(),
            None => {}
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        status.canonical_reason().unwrap_or("Unknown error").to_string()
    } else {
        trimmed.to_string()
    }
}

#[async_trait]
impl CertificateApi for HttpClient {
    async fn add_block(&self, request: &AddBlockRequest) -> Result<AddBlockResponse, ApiError> {
        self.post_json(Endpoint::AddBlock, request).await
    }

    async fn validate_certificate(
        &self,
        request: &ValidateCertificateRequest,
    ) -> Result<ValidateCertificateResponse, ApiError> {
        self.post_json(Endpoint::ValidateCertificate, request).await
    }

    async fn health(&self) -> Result<HealthResponse, ApiError> {
        self.get_json(Endpoint::Health).await
    }
}
