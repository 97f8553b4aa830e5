//! Binding the form and tab handlers to a page

use std::sync::Arc;

use api_core::CertificateApi;
use thiserror::Error;
use tracing::debug;

use crate::bridge::FormBridge;
use crate::dom::{ElementRef, Page, TAB_CONTENT_CLASS};
use crate::tabs::TabSwitcher;

/// Element ids the page must provide
pub mod ids {
    pub const ADD_BLOCK_FORM: &str = "addBlockForm";
    pub const VALIDATE_BLOCK_FORM: &str = "validateBlockForm";
    pub const ADD_BLOCK_RESPONSE: &str = "addBlockResponse";
    pub const VALIDATE_BLOCK_RESPONSE: &str = "validateBlockResponse";
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    #[error("Missing element #{0}")]
    MissingElement(String),
}

/// Handlers bound to one page
pub struct App {
    add_block_form: ElementRef,
    validate_block_form: ElementRef,
    bridge: FormBridge,
    tabs: TabSwitcher,
}

impl App {
    pub fn bridge(&self) -> &FormBridge {
        &self.bridge
    }

    pub fn tabs(&self) -> &TabSwitcher {
        &self.tabs
    }

    pub fn add_block_form(&self) -> &ElementRef {
        &self.add_block_form
    }

    pub fn validate_block_form(&self) -> &ElementRef {
        &self.validate_block_form
    }
}

/// Resolves every element the handlers need, once.
pub fn mount(page: &Page, api: Arc<dyn CertificateApi>) -> Result<App, MountError> {
    let require = |id: &str| {
        page.get_element_by_id(id)
            .ok_or_else(|| MountError::MissingElement(id.to_string()))
    };

    let add_block_form = require(ids::ADD_BLOCK_FORM)?;
    let validate_block_form = require(ids::VALIDATE_BLOCK_FORM)?;
    let add_block_response = require(ids::ADD_BLOCK_RESPONSE)?;
    let validate_block_response = require(ids::VALIDATE_BLOCK_RESPONSE)?;

    let tabs = TabSwitcher::new(page.query_tab_links(), page.query_by_class(TAB_CONTENT_CLASS));
    debug!(links = tabs.links().len(), panels = tabs.panels().len(), "Page mounted");

    Ok(App {
        add_block_form,
        validate_block_form,
        bridge: FormBridge::new(api, add_block_response, validate_block_response),
        tabs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Element;
    use crate::http_client::HttpClient;

    fn api() -> Arc<dyn CertificateApi> {
        Arc::new(HttpClient::new("http://127.0.0.1:8000").unwrap())
    }

    #[test]
    fn test_mount_standard_page() {
        let page = Page::standard();
        let app = mount(&page, api()).unwrap();

        let response = page.get_element_by_id(ids::ADD_BLOCK_RESPONSE).unwrap();
        assert!(app.bridge().add_block_response().ptr_eq(&response));
        assert_eq!(app.add_block_form().id().as_deref(), Some(ids::ADD_BLOCK_FORM));
        assert_eq!(app.tabs().links().len(), 2);
    }

    #[test]
    fn test_mount_reports_missing_element() {
        let mut page = Page::new();
        page.push(Element::new("form").with_id(ids::ADD_BLOCK_FORM));
        page.push(Element::new("form").with_id(ids::VALIDATE_BLOCK_FORM));
        page.push(Element::new("div").with_id(ids::ADD_BLOCK_RESPONSE));

        let err = mount(&page, api()).err().unwrap();
        assert_eq!(err, MountError::MissingElement(ids::VALIDATE_BLOCK_RESPONSE.to_string()));
        assert_eq!(err.to_string(), "Missing element #validateBlockResponse");
    }
}
