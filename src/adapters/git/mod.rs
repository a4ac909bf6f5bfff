//! Git integration
//!
//! Used to find the commit a check run belongs to when the CI environment
//! does not provide one.

use std::path::Path;

/// Full SHA of `HEAD` for the repository containing `dir`
#[must_use]
pub fn head_sha(dir: &Path) -> Option<String> {
    let repo = git2::Repository::discover(dir).ok()?;
    let commit = repo.head().ok()?.peel_to_commit().ok()?;
    Some(commit.id().to_string())
}
