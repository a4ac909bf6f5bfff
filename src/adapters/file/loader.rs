//! JSON results file loader

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::core::models::{AssertionResult, GroupedResults};
use crate::core::ports::{LoadError, ResultSource};
use crate::core::services::group_by_url;

/// Loads `assertion-results.json`
#[derive(Debug, Clone)]
pub struct FileResultLoader {
    path: PathBuf,
}

impl FileResultLoader {
    /// Loader for the results file at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this loader reads
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ResultSource for FileResultLoader {
    fn load(&self) -> Result<GroupedResults, LoadError> {
        log::debug!("Reading assertion results from {}", self.path.display());

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(LoadError::NotFound {
                    path: self.path.clone(),
                });
            },
            Err(source) => {
                return Err(LoadError::Io {
                    path: self.path.clone(),
                    source,
                });
            },
        };

        let results: Vec<AssertionResult> =
            serde_json::from_str(&content).map_err(|source| LoadError::Parse {
                path: self.path.clone(),
                source,
            })?;

        Ok(group_by_url(results))
    }
}
