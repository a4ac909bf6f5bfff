//! lhci-notify - Post Lighthouse CI assertion results to Slack or a GitHub Check Run
//!
//! Reads `.lighthouseci/assertion-results.json`, groups the records by page URL,
//! formats a summary and delivers it to exactly one sink.
//!
//! - [`core`] - Domain models, formatting and the notification pipeline
//! - [`adapters`] - Results file, Slack webhook, GitHub Checks and git access
//! - [`config`] - Layered configuration (flags, environment, `.lhci-notify.toml`)
//! - [`output`] - Human and JSON run reports

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
