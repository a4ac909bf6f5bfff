//! Result source port
//!
//! Defines where assertion results come from.

use std::path::PathBuf;

use thiserror::Error;

use super::super::models::GroupedResults;

/// Errors raised while loading assertion results
#[derive(Debug, Error)]
pub enum LoadError {
    /// The results file does not exist (no assertions were configured)
    #[error("no assertion results at {}", path.display())]
    NotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// The results file is not a JSON array of well-formed records
    #[error("malformed assertion results in {}: {source}", path.display())]
    Parse {
        /// File being parsed
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The results file exists but could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// True for the recoverable "nothing to report" case
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Source of assertion results for one run
pub trait ResultSource {
    /// Load and group every result
    fn load(&self) -> Result<GroupedResults, LoadError>;

    /// Load results, treating a missing source as an empty result set
    fn load_or_empty(&self) -> Result<GroupedResults, LoadError> {
        match self.load() {
            Err(LoadError::NotFound { path }) => {
                log::info!("No assertion results at {}; nothing to report", path.display());
                Ok(GroupedResults::new())
            },
            other => other,
        }
    }
}
