//! Submitted form values and their mapping onto request bodies

use api_core::{AddBlockRequest, BlockTokens, ValidateCertificateRequest};
use tracing::debug;

/// Field names used by the certificate page forms
pub mod fields {
    pub const NAME: &str = "name";
    pub const POSITION: &str = "position";
    pub const GUESTS: &str = "guests";
    pub const INSTITUTION: &str = "institution";
    pub const ADDITIONAL_TOKEN: &str = "additionalToken";
    pub const CERTIFICATE_ID: &str = "certificateId";
}

/// Ordered name/value pairs of a submitted form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    entries: Vec<(String, String)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, name: &str, value: &str) {
        self.entries.push((name.to_string(), value.to_string()));
    }

    /// First value submitted under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    // Values are taken raw. A missing field becomes an empty string.
    fn text(&self, name: &str) -> String {
        match self.get(name) {
            Some(value) => value.to_string(),
            None => {
                debug!(field = name, "form field missing, sending empty string");
                String::new()
            }
        }
    }

    /// Body for `POST /add_block`.
    pub fn to_add_block_request(&self) -> AddBlockRequest {
        AddBlockRequest {
            tokens: BlockTokens {
                name: self.text(fields::NAME),
                position: self.text(fields::POSITION),
                guests: self.text(fields::GUESTS),
                institution: self.text(fields::INSTITUTION),
            },
            additional_token: self.text(fields::ADDITIONAL_TOKEN),
        }
    }

    /// Body for `POST /validate_certificate`.
    pub fn to_validate_certificate_request(&self) -> ValidateCertificateRequest {
        ValidateCertificateRequest {
            certificate_id: self.text(fields::CERTIFICATE_ID),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_block_request_mirrors_fields() {
        let form: FormData = [
            ("name", "Grace Hopper"),
            ("position", "Rear Admiral"),
            ("guests", "3"),
            ("institution", "US Navy"),
            ("additionalToken", "cobol"),
        ]
        .into_iter()
        .collect();

        let request = form.to_add_block_request();
        assert_eq!(request.tokens.name, "Grace Hopper");
        assert_eq!(request.tokens.position, "Rear Admiral");
        assert_eq!(request.tokens.guests, "3");
        assert_eq!(request.tokens.institution, "US Navy");
        assert_eq!(request.additional_token, "cobol");
    }

    #[test]
    fn test_values_are_not_normalized() {
        let form: FormData = [("name", "  padded  "), ("guests", "three"), ("institution", "")]
            .into_iter()
            .collect();

        let request = form.to_add_block_request();
        assert_eq!(request.tokens.name, "  padded  ");
        assert_eq!(request.tokens.guests, "three");
        assert_eq!(request.tokens.institution, "");
        assert_eq!(request.tokens.position, "");
        assert_eq!(request.additional_token, "");
    }

    #[test]
    fn test_get_returns_first_value() {
        let mut form = FormData::new();
        form.append("certificateId", "first");
        form.append("certificateId", "second");
        assert_eq!(form.get("certificateId"), Some("first"));
        assert_eq!(form.len(), 2);
        assert_eq!(form.to_validate_certificate_request().certificate_id, "first");
    }

    #[test]
    fn test_missing_certificate_id() {
        let form = FormData::new();
        assert!(form.is_empty());
        assert_eq!(form.to_validate_certificate_request().certificate_id, "");
    }
}
