//! Transfluent API client
//!
//! This library provides an asynchronous client for the Transfluent
//! translation-management service: authentication, customer account fields,
//! file and text-fragment translation orders, status polling and content
//! retrieval.
//!
//! Every call is a single awaited round-trip with no internal retries. The
//! client holds one piece of mutable state, the session token; concurrent
//! `authenticate` calls on a shared instance are last-write-wins and need
//! external synchronization if that matters to the caller.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod core;

// Re-export key types for convenience
pub use crate::core::{
    client::Transfluent,
    config::{ClientConfig, TRANSFLUENT_URL},
    errors::{Result, TransfluentError},
    models::{FileSaveOptions, FileSource, Payload, TranslateOptions},
    params::Params,
};

pub use reqwest::Method;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
