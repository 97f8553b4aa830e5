//! Shared types for talking to the certificate ledger service.
//!
//! The request and response bodies of every endpoint live in [`model`], the
//! client-facing trait in [`api`].

pub mod api;
pub mod model;

pub use api::CertificateApi;
pub use model::*;
