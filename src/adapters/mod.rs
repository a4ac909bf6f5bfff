//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `file/` - `.lighthouseci/` results and report links
//! - `slack/` - Slack incoming webhook rendering and delivery
//! - `github/` - GitHub Check Run rendering and delivery
//! - `git/` - Commit lookup for the checked-out repository
//! - `http` - Shared blocking HTTP client setup

pub mod file;
pub mod git;
pub mod github;
pub mod http;
pub mod slack;

use std::time::Duration;

use crate::config::SinkSettings;
use crate::core::ports::{DeliveryError, Notifier};

/// Build the notifier for the configured sink
pub fn notifier(settings: &SinkSettings, timeout: Duration) -> Result<Box<dyn Notifier>, DeliveryError> {
    match settings {
        SinkSettings::Slack(slack) => Ok(Box::new(slack::SlackNotifier::new(slack, timeout)?)),
        SinkSettings::GithubCheck(github) => Ok(Box::new(github::GithubCheckNotifier::new(github, timeout)?)),
    }
}
