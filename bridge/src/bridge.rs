//! Form submission handling
//!
//! Each submission is a one-shot cycle: prevent the default navigation,
//! build the request body from the form, call the service once and write
//! the rendered outcome into the form's response element.

use std::sync::Arc;

use api_core::{AddBlockResponse, ApiError, CertificateApi, ValidateCertificateResponse};
use tracing::{debug, info, warn};

use crate::dom::{ElementRef, Event};
use crate::form::FormData;
use crate::render;

/// Result of one submission, after it has been rendered
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<T> {
    /// The service accepted the request.
    Rendered(T),
    /// The service answered with a non-2xx status.
    Rejected { status: u16, detail: String },
    /// No response was received.
    Unreachable { reason: String },
    /// A response arrived but could not be used.
    Malformed { reason: String },
}

impl<T> SubmitOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Rendered(_))
    }
}

impl<T> From<Result<T, ApiError>> for SubmitOutcome<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => SubmitOutcome::Rendered(value),
            Err(ApiError::Http { status, detail }) => SubmitOutcome::Rejected { status, detail },
            Err(ApiError::Transport(reason)) => SubmitOutcome::Unreachable { reason },
            Err(ApiError::Decode(reason)) | Err(ApiError::InvalidUrl(reason)) => {
                SubmitOutcome::Malformed { reason }
            }
        }
    }
}

/// Wires the two certificate forms to the service
pub struct FormBridge {
    api: Arc<dyn CertificateApi>,
    add_block_response: ElementRef,
    validate_block_response: ElementRef,
}

impl FormBridge {
    pub fn new(
        api: Arc<dyn CertificateApi>,
        add_block_response: ElementRef,
        validate_block_response: ElementRef,
    ) -> Self {
        Self { api, add_block_response, validate_block_response }
    }

    pub fn add_block_response(&self) -> &ElementRef {
        &self.add_block_response
    }

    pub fn validate_block_response(&self) -> &ElementRef {
        &self.validate_block_response
    }

    /// Handles a submit of the add-block form.
    pub async fn submit_add_block(
        &self,
        event: &mut Event,
        form: &FormData,
    ) -> SubmitOutcome<AddBlockResponse> {
        event.prevent_default();

        let request = form.to_add_block_request();
        debug!(institution = %request.tokens.institution, "Submitting add_block");

        let result = self.api.add_block(&request).await;
        let html = match &result {
            Ok(response) => {
                info!(verification_hash = %response.verification_hash, "Block added");
                render::add_block_success(response)
            }
            Err(err) => {
                log_failure("add_block", err);
                render::error(err)
            }
        };
        self.add_block_response.set_inner_html(html);

        result.into()
    }

    /// Handles a submit of the certificate validation form.
    pub async fn submit_validate_certificate(
        &self,
        event: &mut Event,
        form: &FormData,
    ) -> SubmitOutcome<ValidateCertificateResponse> {
        event.prevent_default();

        let request = form.to_validate_certificate_request();
        debug!(certificate_id = %request.certificate_id, "Submitting validate_certificate");

        let result = self.api.validate_certificate(&request).await;
        let html = match &result {
            Ok(response) => {
                info!(certificate_id = %request.certificate_id, "Certificate is valid");
                render::validate_success(response)
            }
            Err(err) => {
                log_failure("validate_certificate", err);
                render::error(err)
            }
        };
        self.validate_block_response.set_inner_html(html);

        result.into()
    }
}

fn log_failure(endpoint: &str, err: &ApiError) {
    match err {
        ApiError::Http { status, detail } => {
            info!(endpoint, status, detail = %detail, "Request rejected by service");
        }
        _ => warn!(endpoint, error = %err, "Request failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Element;
    use api_core::{AddBlockRequest, HealthResponse, ValidateCertificateRequest};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Canned service that records what it was asked
    struct StubApi {
        add_block: Result<AddBlockResponse, ApiError>,
        validate: Result<ValidateCertificateResponse, ApiError>,
        seen: Mutex<Vec<String>>,
    }

    impl StubApi {
        fn new(
            add_block: Result<AddBlockResponse, ApiError>,
            validate: Result<ValidateCertificateResponse, ApiError>,
        ) -> Self {
            Self { add_block, validate, seen: Mutex::new(Vec::new()) }
        }
    }

    #[async_trait]
    impl CertificateApi for StubApi {
        async fn add_block(&self, request: &AddBlockRequest) -> Result<AddBlockResponse, ApiError> {
            self.seen.lock().unwrap().push(request.tokens.name.clone());
            self.add_block.clone()
        }

        async fn validate_certificate(
            &self,
            request: &ValidateCertificateRequest,
        ) -> Result<ValidateCertificateResponse, ApiError> {
            self.seen.lock().unwrap().push(request.certificate_id.clone());
            self.validate.clone()
        }

        async fn health(&self) -> Result<HealthResponse, ApiError> {
            Ok(HealthResponse { message: "API is working!".to_string() })
        }
    }

    fn bridge_with(api: Arc<StubApi>) -> FormBridge {
        FormBridge::new(
            api,
            ElementRef::new(Element::new("div").with_id("addBlockResponse")),
            ElementRef::new(Element::new("div").with_id("validateBlockResponse")),
        )
    }

    fn valid_details() -> ValidateCertificateResponse {
        serde_json::from_value(json!({ "block_details": { "status": "valid" } })).unwrap()
    }

    #[tokio::test]
    async fn test_add_block_success_renders_hash() {
        let api = Arc::new(StubApi::new(
            Ok(AddBlockResponse {
                verification_hash: "abc123".to_string(),
                status: Some("success".to_string()),
                message: None,
            }),
            Ok(valid_details()),
        ));
        let bridge = bridge_with(api.clone());
        let form: FormData = [("name", "Ada")].into_iter().collect();
        let mut event = Event::submit();

        let outcome = bridge.submit_add_block(&mut event, &form).await;

        assert!(outcome.is_success());
        assert!(event.default_prevented());
        assert!(bridge.add_block_response().inner_html().contains("abc123"));
        assert_eq!(bridge.validate_block_response().inner_html(), "");
        assert_eq!(api.seen.lock().unwrap().as_slice(), &["Ada".to_string()]);
    }

    #[tokio::test]
    async fn test_add_block_rejection_renders_detail() {
        let api = Arc::new(StubApi::new(
            Err(ApiError::Http { status: 400, detail: "invalid institution".to_string() }),
            Ok(valid_details()),
        ));
        let bridge = bridge_with(api);
        let mut event = Event::submit();

        let outcome = bridge.submit_add_block(&mut event, &FormData::new()).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected { status: 400, detail: "invalid institution".to_string() }
        );
        assert_eq!(bridge.add_block_response().inner_html(), "Error: invalid institution");
    }

    #[tokio::test]
    async fn test_validate_transport_failure_is_rendered() {
        let api = Arc::new(StubApi::new(
            Err(ApiError::Transport("unused".to_string())),
            Err(ApiError::Transport("connection refused".to_string())),
        ));
        let bridge = bridge_with(api);
        let form: FormData = [("certificateId", "CERT-42")].into_iter().collect();
        let mut event = Event::submit();

        let outcome = bridge.submit_validate_certificate(&mut event, &form).await;

        assert!(matches!(outcome, SubmitOutcome::Unreachable { .. }));
        assert!(bridge
            .validate_block_response()
            .inner_html()
            .contains("unable to reach certificate service"));
    }

    #[tokio::test]
    async fn test_validate_success_renders_details() {
        let api = Arc::new(StubApi::new(
            Err(ApiError::Transport("unused".to_string())),
            Ok(valid_details()),
        ));
        let bridge = bridge_with(api.clone());
        let form: FormData = [("certificateId", "CERT-42")].into_iter().collect();
        let mut event = Event::submit();

        let outcome = bridge.submit_validate_certificate(&mut event, &form).await;

        assert!(outcome.is_success());
        let html = bridge.validate_block_response().inner_html();
        assert!(html.contains("\"status\": \"valid\""));
        assert_eq!(api.seen.lock().unwrap().as_slice(), &["CERT-42".to_string()]);
    }

    #[test]
    fn test_outcome_from_decode_error() {
        let outcome: SubmitOutcome<()> = Err(ApiError::Decode("bad json".to_string())).into();
        assert_eq!(outcome, SubmitOutcome::Malformed { reason: "bad json".to_string() });
        assert!(!outcome.is_success());
    }
}
