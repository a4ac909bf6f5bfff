//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Conclusion, NotificationPayload};
use crate::core::ports::Sink;
use crate::core::services::Outcome;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a notify run
#[derive(Debug, Serialize)]
pub struct NotifyReport {
    /// Sink the payload was sent to
    pub target: Sink,
    /// Verdict that was reported
    pub conclusion: Conclusion,
    /// Number of URLs with results
    pub urls: usize,
    /// Number of results across all URLs
    pub results: usize,
    /// Whether the sink accepted the notification
    pub delivered: bool,
    /// Delivery error, when not delivered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl NotifyReport {
    /// Summarize a pipeline outcome
    #[must_use]
    pub fn from_outcome(target: Sink, outcome: &Outcome) -> Self {
        Self::new(target, &outcome.payload, outcome.delivery.as_ref().err().map(ToString::to_string))
    }

    /// Summarize a payload and optional delivery error
    #[must_use]
    pub fn new(target: Sink, payload: &NotificationPayload, error: Option<String>) -> Self {
        Self {
            target,
            conclusion: payload.conclusion,
            urls: payload.sections.len(),
            results: payload.total_fields(),
            delivered: error.is_none(),
            error,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        let conclusion = match self.conclusion {
            Conclusion::Success => self.conclusion.as_str().green(),
            Conclusion::Failure => self.conclusion.as_str().red(),
        };

        if self.results == 0 {
            println!("No assertion results ({conclusion}).");
        } else {
            println!(
                "{} result(s) across {} URL(s) ({conclusion}).",
                self.results, self.urls
            );
        }

        match &self.error {
            None => println!("Sent to {}.", self.target),
            Some(error) => {
                println!("{} {}", "Not delivered:".yellow().bold(), error);
            },
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
