//! HTML written into the response areas

use api_core::{AddBlockResponse, ApiError, ValidateCertificateResponse};

/// Escapes text for use as HTML content. Quotes are left alone so JSON
/// stays readable.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn add_block_success(response: &AddBlockResponse) -> String {
    format!(
        "Block added successfully.<br>Verification Hash: {}",
        escape_html(&response.verification_hash)
    )
}

pub fn validate_success(response: &ValidateCertificateResponse) -> String {
    format!(
        "Certificate is valid. Details:<br>{}",
        escape_html(&response.pretty_details())
    )
}

pub fn error(err: &ApiError) -> String {
    let message = match err {
        ApiError::Http { detail, .. } => detail.clone(),
        ApiError::Transport(reason) => format!("unable to reach certificate service ({})", reason),
        ApiError::Decode(_) => "unexpected response from certificate service".to_string(),
        ApiError::InvalidUrl(reason) => format!("invalid service address ({})", reason),
    };
    format!("Error: {}", escape_html(&message))
}
