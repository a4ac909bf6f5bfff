//! Notification sink port
//!
//! Defines the interface every delivery target implements.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::super::models::NotificationPayload;

/// Supported notification targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sink {
    /// Slack incoming webhook
    Slack,
    /// GitHub Check Run
    #[serde(alias = "github")]
    GithubCheck,
}

impl Sink {
    /// Sink name as accepted on the command line
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Slack => "slack",
            Self::GithubCheck => "github-check",
        }
    }
}

impl std::fmt::Display for Sink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Sink {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "slack" => Ok(Self::Slack),
            "github-check" | "github" => Ok(Self::GithubCheck),
            _ => Err(format!("Invalid target: {s}. Use: slack, github-check")),
        }
    }
}

/// Errors raised while delivering a notification
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The HTTP client could not be constructed
    #[error("failed to build {sink} client: {source}")]
    Client {
        /// Sink being configured
        sink: Sink,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// The request never produced a response (DNS, TLS, timeout, ...)
    #[error("{sink} request failed: {source}")]
    Transport {
        /// Sink being called
        sink: Sink,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// The sink answered with a non-2xx status
    #[error("{sink} rejected the notification with HTTP {status}: {body}")]
    Rejected {
        /// Sink being called
        sink: Sink,
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },
}

impl DeliveryError {
    /// Sink the failure belongs to
    #[must_use]
    pub const fn sink(&self) -> Sink {
        match self {
            Self::Client { sink, .. } | Self::Transport { sink, .. } | Self::Rejected { sink, .. } => {
                *sink
            },
        }
    }
}

/// A delivery target for notification payloads
///
/// Each call makes exactly one delivery attempt.
pub trait Notifier {
    /// Which sink this notifier delivers to
    fn sink(&self) -> Sink;

    /// Deliver the payload
    fn send(&self, payload: &NotificationPayload) -> Result<(), DeliveryError>;
}
