//! Check Run creation through the GitHub REST API

use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::blocking::Client;
use serde::Serialize;

use crate::adapters::http;
use crate::config::{GithubSettings, Secret};
use crate::core::models::{Conclusion, NotificationPayload};
use crate::core::ports::{DeliveryError, Notifier, Sink};

use super::markdown;

/// Public GitHub API root
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Check run name shown on the Checks tab
pub const DEFAULT_CHECK_NAME: &str = "Lighthouse CI Action";

/// GitHub caps `output.summary` at this many characters
const MAX_SUMMARY_CHARS: usize = 65_535;

const TRUNCATION_NOTICE: &str = "\n\n_Summary truncated._\n";

/// Request body for `POST /repos/{owner}/{repo}/check-runs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckRunRequest {
    /// Check run name
    pub name: String,
    /// Commit the check is attached to
    pub head_sha: String,
    /// Always `completed`
    pub status: &'static str,
    /// `success` or `failure`
    pub conclusion: Conclusion,
    /// RFC 3339 completion time
    pub completed_at: String,
    /// Link behind the "Details" button
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details_url: Option<String>,
    /// Rendered summary
    pub output: CheckOutput,
}

/// `output` object of a check run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutput {
    /// Output title
    pub title: String,
    /// Markdown summary
    pub summary: String,
}

impl CheckRunRequest {
    /// Build a completed check run for `payload`
    #[must_use]
    pub fn new(
        payload: &NotificationPayload,
        name: &str,
        head_sha: &str,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.to_string(),
            head_sha: head_sha.to_string(),
            status: "completed",
            conclusion: payload.conclusion,
            completed_at: completed_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            details_url: payload.details_url.clone(),
            output: CheckOutput {
                title: payload.title.clone(),
                summary: limit_summary(markdown::render(payload)),
            },
        }
    }
}

fn limit_summary(summary: String) -> String {
    if summary.chars().count() <= MAX_SUMMARY_CHARS {
        return summary;
    }
    let keep = MAX_SUMMARY_CHARS - TRUNCATION_NOTICE.chars().count();
    let mut cut: String = summary.chars().take(keep).collect();
    cut.push_str(TRUNCATION_NOTICE);
    cut
}

/// Creates one completed check run per notification
#[derive(Debug)]
pub struct GithubCheckNotifier {
    endpoint: String,
    token: Secret,
    check_name: String,
    head_sha: String,
    client: Client,
}

impl GithubCheckNotifier {
    /// Notifier for the configured repository and commit
    pub fn new(settings: &GithubSettings, timeout: Duration) -> Result<Self, DeliveryError> {
        let endpoint = format!(
            "{}/repos/{}/{}/check-runs",
            settings.api_url.trim_end_matches('/'),
            settings.repository.owner,
            settings.repository.repo
        );

        Ok(Self {
            endpoint,
            token: settings.token.clone(),
            check_name: settings.check_name.clone(),
            head_sha: settings.head_sha.clone(),
            client: http::client(Sink::GithubCheck, timeout)?,
        })
    }

    /// URL the check run is posted to
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Notifier for GithubCheckNotifier {
    fn sink(&self) -> Sink {
        Sink::GithubCheck
    }

    fn send(&self, payload: &NotificationPayload) -> Result<(), DeliveryError> {
        let body = CheckRunRequest::new(payload, &self.check_name, &self.head_sha, Utc::now());
        let request = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.token.expose())
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .json(&body);

        http::send_once(Sink::GithubCheck, request)
    }
}
