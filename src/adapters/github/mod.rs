//! GitHub Check Run sink
//!
//! - [`RepoSlug`] - `owner/repo` parsing
//! - [`markdown`] - Payload → check run summary
//! - [`GithubCheckNotifier`] - One `POST /repos/{owner}/{repo}/check-runs`

mod checks;
pub mod markdown;
mod slug;

pub use checks::{CheckOutput, CheckRunRequest, DEFAULT_API_URL, DEFAULT_CHECK_NAME, GithubCheckNotifier};
pub use slug::{RepoSlug, RepoSlugError};
