//! Uploaded report links (`links.json`)
//!
//! `lhci upload` writes an object mapping each audited URL to its report.
//! The file is optional decoration: when it is missing or unreadable the
//! notification simply goes out without per-URL report links.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Load the URL → report link mapping, or an empty map
#[must_use]
pub fn load_report_links(path: &Path) -> HashMap<String, String> {
    if !path.exists() {
        return HashMap::new();
    }

    let parsed: Result<HashMap<String, String>, String> = fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|content| serde_json::from_str(&content).map_err(|e| e.to_string()));

    match parsed {
        Ok(links) => links,
        Err(e) => {
            log::warn!("Ignoring report links in {}: {e}", path.display());
            HashMap::new()
        },
    }
}
