//! Certificate service API trait definitions

use async_trait::async_trait;
use crate::model::*;

/// Operations offered by the certificate ledger service
#[async_trait]
pub trait CertificateApi: Send + Sync {
    /// Record a new block; the ledger answers with its verification hash.
    async fn add_block(&self, request: &AddBlockRequest) -> Result<AddBlockResponse, ApiError>;

    /// Look up the block a certificate id refers to.
    async fn validate_certificate(
        &self,
        request: &ValidateCertificateRequest,
    ) -> Result<ValidateCertificateResponse, ApiError>;

    async fn health(&self) -> Result<HealthResponse, ApiError>;
}
