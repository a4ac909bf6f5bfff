//! Repository identifiers

use thiserror::Error;

/// Errors that can occur when parsing `owner/repo`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoSlugError {
    /// No `/` separator
    #[error("repository must look like owner/repo, got {0:?}")]
    MissingSeparator(String),

    /// Owner or repository name was empty
    #[error("repository owner and name must be non-empty, got {0:?}")]
    EmptyPart(String),
}

/// A GitHub repository, split from `GITHUB_REPOSITORY`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    /// Account or organization
    pub owner: String,
    /// Repository name
    pub repo: String,
}

impl RepoSlug {
    /// Split `owner/repo` on the first `/`
    pub fn parse(slug: &str) -> Result<Self, RepoSlugError> {
        let trimmed = slug.trim();
        let (owner, repo) = trimmed
            .split_once('/')
            .ok_or_else(|| RepoSlugError::MissingSeparator(slug.to_string()))?;

        if owner.is_empty() || repo.is_empty() {
            return Err(RepoSlugError::EmptyPart(slug.to_string()));
        }

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }
}

impl std::str::FromStr for RepoSlug {
    type Err = RepoSlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
