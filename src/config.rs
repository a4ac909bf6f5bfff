//! Configuration management
//!
//! Settings are layered, highest precedence first:
//!
//! 1. Command-line flags
//! 2. Environment variables (bound to the same flags)
//! 3. `.lhci-notify.toml` in the working directory, or `--config <path>`
//! 4. Built-in defaults
//!
//! ```toml
//! target = "slack"
//! timeout_secs = 30
//!
//! [slack]
//! webhook_url = "https://hooks.slack.com/services/..."
//! show_all_fields = false
//!
//! [github]
//! repository = "owner/repo"
//! api_url = "https://api.github.com"
//! check_name = "Lighthouse CI Action"
//! ```
//!
//! Credentials are validated only for the selected target.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::adapters::git;
use crate::adapters::github::{DEFAULT_API_URL, DEFAULT_CHECK_NAME, RepoSlug, RepoSlugError};
use crate::adapters::http::DEFAULT_TIMEOUT;
use crate::adapters::slack::render::DEFAULT_PRETEXT;
use crate::core::models::PayloadLinks;
use crate::core::ports::Sink;
use crate::paths;

const DEFAULT_SERVER_URL: &str = "https://github.com";

/// Errors raised while building settings
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// Neither flag, environment nor config file named a target
    #[error("no notification target configured (pass --target or set LHCI_NOTIFY_TARGET)")]
    MissingTarget,

    /// The selected target lacks a required value
    #[error("{target} target requires {what}")]
    Missing {
        /// Selected target
        target: Sink,
        /// What is missing, with the flag/variable that provides it
        what: &'static str,
    },

    /// A zero timeout would fail every request before it is sent
    #[error("timeout must be at least one second")]
    ZeroTimeout,

    /// `GITHUB_REPOSITORY` is not `owner/repo`
    #[error(transparent)]
    Repository(#[from] RepoSlugError),
}

/// A credential that never appears in `Debug` output or logs
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    /// Wrap a credential
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw credential, for the request that needs it
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}

impl std::str::FromStr for Secret {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

// =============================================================================
// Config file
// =============================================================================

/// Contents of `.lhci-notify.toml`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    /// Notification target
    #[serde(default)]
    pub target: Option<Sink>,
    /// HTTP timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Results file, relative to the working directory
    #[serde(default)]
    pub results: Option<PathBuf>,
    /// Slack settings
    #[serde(default)]
    pub slack: SlackFileConfig,
    /// GitHub settings
    #[serde(default)]
    pub github: GithubFileConfig,
}

/// `[slack]` table
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlackFileConfig {
    /// Incoming webhook URL
    #[serde(default)]
    pub webhook_url: Option<Secret>,
    /// Send every field instead of truncating
    #[serde(default)]
    pub show_all_fields: Option<bool>,
    /// Text above the headline attachment
    #[serde(default)]
    pub pretext: Option<String>,
}

/// `[github]` table
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GithubFileConfig {
    /// `owner/repo`
    #[serde(default)]
    pub repository: Option<String>,
    /// REST API root (GitHub Enterprise Server)
    #[serde(default)]
    pub api_url: Option<String>,
    /// Web root used for derived links
    #[serde(default)]
    pub server_url: Option<String>,
    /// Check run name
    #[serde(default)]
    pub check_name: Option<String>,
}

impl FileConfig {
    /// Parse a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `explicit` if given, else `.lhci-notify.toml` under `root` if present
    pub fn discover(root: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let default_path = paths::config_file(root);
        if default_path.exists() {
            log::debug!("Using config {}", default_path.display());
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }
}

// =============================================================================
// Resolved settings
// =============================================================================

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Notification target
    pub target: Option<Sink>,
    /// Results file
    pub results: Option<PathBuf>,
    /// Report links file
    pub links: Option<PathBuf>,
    /// Slack webhook URL
    pub slack_webhook_url: Option<Secret>,
    /// Send every Slack field
    pub slack_show_all_fields: bool,
    /// GitHub token
    pub github_token: Option<Secret>,
    /// `owner/repo`
    pub repository: Option<String>,
    /// Commit SHA
    pub sha: Option<String>,
    /// GitHub REST API root
    pub github_api_url: Option<String>,
    /// GitHub web root
    pub github_server_url: Option<String>,
    /// Workflow run ID
    pub run_id: Option<String>,
    /// Headline link
    pub link: Option<String>,
    /// "View Details" link
    pub details_url: Option<String>,
    /// HTTP timeout in seconds
    pub timeout_secs: Option<u64>,
}

/// Slack delivery settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlackSettings {
    /// Incoming webhook URL
    pub webhook_url: Secret,
    /// Send every field instead of truncating
    pub show_all_fields: bool,
    /// Text above the headline attachment
    pub pretext: String,
}

/// GitHub Check Run settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubSettings {
    /// Token with `checks:write`
    pub token: Secret,
    /// Target repository
    pub repository: RepoSlug,
    /// Commit the check run is attached to
    pub head_sha: String,
    /// REST API root
    pub api_url: String,
    /// Check run name
    pub check_name: String,
}

/// Validated settings for the selected sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkSettings {
    /// Slack incoming webhook
    Slack(SlackSettings),
    /// GitHub Check Run
    GithubCheck(GithubSettings),
}

/// Fully layered settings for one run
#[derive(Debug, Clone)]
pub struct Settings {
    /// Selected target
    pub target: Sink,
    /// Results file
    pub results_path: PathBuf,
    /// Report links file
    pub links_path: PathBuf,
    /// HTTP timeout
    pub timeout: Duration,
    /// Headline link
    pub link: Option<String>,
    /// "View Details" link
    pub details_url: Option<String>,
    /// Slack webhook URL
    pub slack_webhook_url: Option<Secret>,
    /// Send every Slack field
    pub slack_show_all_fields: bool,
    /// Slack pretext
    pub slack_pretext: String,
    /// GitHub token
    pub github_token: Option<Secret>,
    /// `owner/repo`, unparsed
    pub repository: Option<String>,
    /// Commit SHA (flag, environment, or `HEAD`)
    pub sha: Option<String>,
    /// GitHub REST API root
    pub github_api_url: String,
    /// Check run name
    pub check_name: String,
}

impl Settings {
    /// Layer `overrides` over `file` for a run in `root`
    pub fn resolve(root: &Path, overrides: Overrides, file: FileConfig) -> Result<Self, ConfigError> {
        let target = overrides.target.or(file.target).ok_or(ConfigError::MissingTarget)?;

        let results_path = overrides
            .results
            .or(file.results)
            .map_or_else(|| paths::assertion_results(root), |p| root.join(p));
        let links_path = overrides.links.map_or_else(|| paths::links(root), |p| root.join(p));

        let timeout = match overrides.timeout_secs.or(file.timeout_secs) {
            Some(0) => return Err(ConfigError::ZeroTimeout),
            Some(secs) => Duration::from_secs(secs),
            None => DEFAULT_TIMEOUT,
        };

        let repository = overrides.repository.or(file.github.repository);
        let sha = overrides.sha.or_else(|| {
            let head = git::head_sha(root);
            if let Some(sha) = &head {
                log::debug!("No commit SHA given; using HEAD {sha}");
            }
            head
        });

        let server_url = overrides
            .github_server_url
            .or(file.github.server_url)
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        let server_url = server_url.trim_end_matches('/');

        let link = overrides.link.or_else(|| {
            Some(format!("{server_url}/{}/commit/{}", repository.as_deref()?, sha.as_deref()?))
        });
        let details_url = overrides.details_url.or_else(|| {
            Some(format!(
                "{server_url}/{}/actions/runs/{}",
                repository.as_deref()?,
                overrides.run_id.as_deref()?
            ))
        });

        let slack_pretext = file.slack.pretext.unwrap_or_else(|| match &repository {
            Some(repo) => format!("{DEFAULT_PRETEXT} for {repo}"),
            None => DEFAULT_PRETEXT.to_string(),
        });

        Ok(Self {
            target,
            results_path,
            links_path,
            timeout,
            link,
            details_url,
            slack_webhook_url: overrides.slack_webhook_url.or(file.slack.webhook_url),
            slack_show_all_fields: overrides.slack_show_all_fields
                || file.slack.show_all_fields.unwrap_or(false),
            slack_pretext,
            github_token: overrides.github_token,
            repository,
            sha,
            github_api_url: overrides
                .github_api_url
                .or(file.github.api_url)
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            check_name: file.github.check_name.unwrap_or_else(|| DEFAULT_CHECK_NAME.to_string()),
        })
    }

    /// Validate the credentials of the selected target
    pub fn sink_settings(&self) -> Result<SinkSettings, ConfigError> {
        match self.target {
            Sink::Slack => {
                let webhook_url = self.slack_webhook_url.clone().ok_or(ConfigError::Missing {
                    target: Sink::Slack,
                    what: "a webhook URL (--slack-webhook-url or SLACK_WEBHOOK_URL)",
                })?;
                Ok(SinkSettings::Slack(SlackSettings {
                    webhook_url,
                    show_all_fields: self.slack_show_all_fields,
                    pretext: self.slack_pretext.clone(),
                }))
            },
            Sink::GithubCheck => {
                let missing = |what| ConfigError::Missing {
                    target: Sink::GithubCheck,
                    what,
                };
                let token = self
                    .github_token
                    .clone()
                    .ok_or_else(|| missing("a token (--github-token or GITHUB_TOKEN)"))?;
                let repository = self
                    .repository
                    .as_deref()
                    .ok_or_else(|| missing("a repository (--repository or GITHUB_REPOSITORY)"))?;
                let head_sha = self
                    .sha
                    .clone()
                    .ok_or_else(|| missing("a commit SHA (--sha or GITHUB_SHA)"))?;

                Ok(SinkSettings::GithubCheck(GithubSettings {
                    token,
                    repository: RepoSlug::parse(repository)?,
                    head_sha,
                    api_url: self.github_api_url.clone(),
                    check_name: self.check_name.clone(),
                }))
            },
        }
    }

    /// Links to decorate the payload with, including per-URL reports
    #[must_use]
    pub fn payload_links(&self) -> PayloadLinks {
        PayloadLinks {
            link: self.link.clone(),
            details_url: self.details_url.clone(),
            reports: crate::adapters::file::load_report_links(&self.links_path),
        }
    }
}
