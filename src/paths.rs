//! Centralized path definitions for lhci-notify
//!
//! ## Layout
//!
//! ```text
//! repo/
//! ├── .lhci-notify.toml              # Optional notifier configuration
//! └── .lighthouseci/                 # Written by `lhci assert` / `lhci upload`
//!     ├── assertion-results.json     # Assertion records (absent when none ran)
//!     └── links.json                 # URL -> uploaded report link
//! ```

use std::path::{Path, PathBuf};

/// Directory Lighthouse CI writes its artifacts to
pub const LHCI_DIR: &str = ".lighthouseci";

/// Assertion results filename
pub const ASSERTION_RESULTS_FILE: &str = "assertion-results.json";

/// Uploaded report links filename
pub const LINKS_FILE: &str = "links.json";

/// Notifier configuration filename
pub const CONFIG_FILE: &str = ".lhci-notify.toml";

/// Path to the assertion results file under `root`
#[must_use]
pub fn assertion_results(root: &Path) -> PathBuf {
    root.join(LHCI_DIR).join(ASSERTION_RESULTS_FILE)
}

/// Path to the report links file under `root`
#[must_use]
pub fn links(root: &Path) -> PathBuf {
    root.join(LHCI_DIR).join(LINKS_FILE)
}

/// Path to the configuration file under `root`
#[must_use]
pub fn config_file(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}
