//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing lhci-notify components.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use lhci_notify::core::models::{AssertionResult, GroupedResults, NotificationPayload};
use lhci_notify::core::ports::{DeliveryError, LoadError, Notifier, ResultSource, Sink};
use lhci_notify::core::services::group_by_url;
use lhci_notify::paths;
use tempfile::TempDir;

/// The single-record input used throughout the scenario tests
pub const SCENARIO_JSON: &str = r#"[
  {
    "url": "https://a.com",
    "auditId": "x",
    "auditProperty": "y",
    "auditTitle": "Title",
    "operator": "<=",
    "expected": "100",
    "actual": "150"
  }
]"#;

/// Build a result with a `<=` comparison
pub fn result(url: &str, audit_id: &str) -> AssertionResult {
    AssertionResult::new(url, audit_id, format!("{audit_id} title"), "<=", "1", "2")
}

/// A scratch working directory laid out like a Lighthouse CI checkout:
/// ```text
/// /
/// ├── .lighthouseci/
/// │   ├── assertion-results.json   (optional)
/// │   └── links.json               (optional)
/// └── .lhci-notify.toml            (optional)
/// ```
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        fs::create_dir_all(dir.path().join(paths::LHCI_DIR)).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn results_path(&self) -> PathBuf {
        paths::assertion_results(self.dir.path())
    }

    pub fn write_results(&self, content: &str) {
        fs::write(self.results_path(), content).unwrap();
    }

    pub fn write_links(&self, content: &str) {
        fs::write(paths::links(self.dir.path()), content).unwrap();
    }

    pub fn write_config(&self, content: &str) {
        fs::write(paths::config_file(self.dir.path()), content).unwrap();
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory result source
pub enum MockSource {
    Results(Vec<AssertionResult>),
    Missing,
    Malformed,
}

impl ResultSource for MockSource {
    fn load(&self) -> Result<GroupedResults, LoadError> {
        match self {
            Self::Results(results) => Ok(group_by_url(results.clone())),
            Self::Missing => Err(LoadError::NotFound {
                path: PathBuf::from("assertion-results.json"),
            }),
            Self::Malformed => Err(LoadError::Parse {
                path: PathBuf::from("assertion-results.json"),
                source: serde_json::from_str::<serde_json::Value>("[{").unwrap_err(),
            }),
        }
    }
}

/// Notifier that records every payload and optionally rejects it
pub struct RecordingNotifier {
    sent: RefCell<Vec<NotificationPayload>>,
    reject_with: Option<u16>,
}

impl RecordingNotifier {
    pub fn accepting() -> Self {
        Self {
            sent: RefCell::new(Vec::new()),
            reject_with: None,
        }
    }

    pub fn rejecting(status: u16) -> Self {
        Self {
            sent: RefCell::new(Vec::new()),
            reject_with: Some(status),
        }
    }

    pub fn sent(&self) -> Vec<NotificationPayload> {
        self.sent.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn sink(&self) -> Sink {
        Sink::Slack
    }

    fn send(&self, payload: &NotificationPayload) -> Result<(), DeliveryError> {
        self.sent.borrow_mut().push(payload.clone());
        match self.reject_with {
            Some(status) => Err(DeliveryError::Rejected {
                sink: Sink::Slack,
                status,
                body: "invalid_payload".to_string(),
            }),
            None => Ok(()),
        }
    }
}
