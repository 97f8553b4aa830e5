//! Certificate service data models and types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Certificate service error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The service answered with a non-2xx status.
    #[error("HTTP {status}: {detail}")]
    Http { status: u16, detail: String },

    /// The request never produced a response (refused, reset, timed out).
    #[error("Transport error: {0}")]
    Transport(String),

    /// A 2xx body did not match the expected schema.
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Status code of a server-reported error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Endpoints exposed by the certificate service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Health,
    AddBlock,
    ValidateCertificate,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Health => "/",
            Endpoint::AddBlock => "/add_block",
            Endpoint::ValidateCertificate => "/validate_certificate",
        }
    }

    pub fn method(&self) -> &'static str {
        match self {
            Endpoint::Health => "GET",
            Endpoint::AddBlock | Endpoint::ValidateCertificate => "POST",
        }
    }
}

/// Certificate fields recorded in a block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockTokens {
    pub name: String,
    pub position: String,
    pub guests: String,
    pub institution: String,
}

/// Body of `POST /add_block`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddBlockRequest {
    pub tokens: BlockTokens,
    pub additional_token: String,
}

/// Body of `POST /validate_certificate`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateCertificateRequest {
    pub certificate_id: String,
}

/// Successful `POST /add_block` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddBlockResponse {
    pub verification_hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Successful `POST /validate_certificate` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidateCertificateResponse {
    pub block_details: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ValidateCertificateResponse {
    /// Typed view of `block_details` in the shape the ledger emits.
    pub fn details(&self) -> Result<BlockDetails, ApiError> {
        serde_json::from_value(Value::Object(self.block_details.clone()))
            .map_err(|e| ApiError::Decode(format!("block_details: {}", e)))
    }

    /// `block_details` as two-space indented JSON.
    pub fn pretty_details(&self) -> String {
        serde_json::to_string_pretty(&self.block_details).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Block record as stored on the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockDetails {
    pub block_id: u64,
    pub tokens: Value,
    pub previous_hash: String,
    pub nonce: u64,
    pub total_hash: String,
    pub verification_hash: String,
}

/// Error body returned with any non-2xx status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// `GET /` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}
