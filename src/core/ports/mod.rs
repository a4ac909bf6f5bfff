//! Port traits (interfaces) for external dependencies
//!
//! The pipeline depends only on these traits. The results file and both
//! notification sinks implement them in the `adapters` module; tests swap in
//! in-memory versions.

mod notifier;
mod result_source;

pub use notifier::{DeliveryError, Notifier, Sink};
pub use result_source::{LoadError, ResultSource};
