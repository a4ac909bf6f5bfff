//! Business logic services
//!
//! - [`grouper`] - Group assertion results by page URL
//! - [`formatter`] - Turn grouped results into a notification payload
//! - [`pipeline`] - Load → format → send through the port traits

pub mod formatter;
pub mod grouper;
pub mod pipeline;

pub use formatter::{format, format_field, section_label};
pub use grouper::group_by_url;
pub use pipeline::{Outcome, notify, prepare};
