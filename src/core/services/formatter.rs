//! Notification formatting
//!
//! Pure functions from grouped results to a [`NotificationPayload`]. The text
//! produced here is what users read in Slack and on the Checks tab, so the
//! wording is fixed:
//!
//! ```text
//! 1 result(s) for https://a.com
//! x.y
//! Title
//! Expected 100  less than  actual 150
//! ```

use crate::core::models::{AssertionResult, Conclusion, Field, GroupedResults, NotificationPayload, Section};

/// Format grouped results for a run that exited with `status`
///
/// `0` is success, anything else is failure. The output depends only on the
/// inputs.
#[must_use]
pub fn format(grouped: &GroupedResults, status: i32) -> NotificationPayload {
    let conclusion = Conclusion::from_status(status);

    let sections = grouped
        .iter()
        .map(|group| Section {
            url: group.url.clone(),
            label: section_label(group.results.len(), &group.url),
            fields: group.results.iter().map(format_field).collect(),
            report_url: None,
        })
        .collect();

    NotificationPayload {
        title: format!("Pull Request {conclusion}"),
        conclusion,
        link: None,
        details_url: None,
        sections,
    }
}

/// Section label for a URL group
#[must_use]
pub fn section_label(count: usize, url: &str) -> String {
    format!("{count} result(s) for {url}")
}

/// Format a single result as a titled field
#[must_use]
pub fn format_field(result: &AssertionResult) -> Field {
    Field {
        title: result.key(),
        value: format!(
            "{}\nExpected {} {} actual {}",
            result.audit_title,
            result.expected,
            result.operator.comparison_phrase(),
            result.actual
        ),
    }
}
