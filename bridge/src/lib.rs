//! Certbridge - certificate ledger form client
//!
//! Binds the add-block and certificate validation forms of the certificate
//! page to the ledger service, and drives the page's tab links. The page is
//! an in-memory model so the same handlers run from the CLI and from tests.

pub mod app;
pub mod bridge;
pub mod cli;
pub mod config;
pub mod dom;
pub mod form;
pub mod http_client;
pub mod render;
pub mod tabs;
pub mod ui;

pub use app::{mount, App, MountError};
pub use bridge::{FormBridge, SubmitOutcome};
pub use cli::Args;
pub use config::Config;
pub use dom::{Element, ElementRef, Event, Page};
pub use form::FormData;
pub use http_client::HttpClient;
pub use tabs::TabSwitcher;
