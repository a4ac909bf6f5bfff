//! Lighthouse CI artifacts on disk
//!
//! Implements `ResultSource` over `assertion-results.json` and reads the
//! optional `links.json` written by `lhci upload`.

mod links;
mod loader;

pub use links::load_report_links;
pub use loader::FileResultLoader;
