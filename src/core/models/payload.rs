//! Render-agnostic notification payload
//!
//! Both sinks read the same section data: Slack flattens it into attachments,
//! GitHub renders it as one Markdown document.

use std::collections::HashMap;

use serde::Serialize;

use super::{Color, Conclusion};

/// Fields shown inline per section; the rest are collapsed
pub const INLINE_FIELD_LIMIT: usize = 2;

/// One formatted assertion result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    /// `auditId` or `auditId.auditProperty`
    pub title: String,
    /// Audit title and the expected/actual comparison, newline separated
    pub value: String,
}

/// All formatted results for one page URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Page URL
    pub url: String,
    /// `"{count} result(s) for {url}"`
    pub label: String,
    /// Every field, in result order
    pub fields: Vec<Field>,
    /// Uploaded Lighthouse report for this URL, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_url: Option<String>,
}

impl Section {
    /// Fields shown inline
    #[must_use]
    pub fn inline_fields(&self) -> &[Field] {
        &self.fields[..self.fields.len().min(INLINE_FIELD_LIMIT)]
    }

    /// Fields collapsed behind the "view more" marker
    #[must_use]
    pub fn collapsed_fields(&self) -> &[Field] {
        &self.fields[self.fields.len().min(INLINE_FIELD_LIMIT)..]
    }

    /// True when some fields are collapsed
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.fields.len() > INLINE_FIELD_LIMIT
    }
}

/// Formatted summary of one Lighthouse CI run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationPayload {
    /// Headline, e.g. `Pull Request failure`
    pub title: String,
    /// Verdict of the run
    pub conclusion: Conclusion,
    /// Link attached to the headline (commit or pull request)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Target of the trailing "View Details" link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details_url: Option<String>,
    /// One section per URL, first-seen order
    pub sections: Vec<Section>,
}

impl NotificationPayload {
    /// Attachment color derived from the conclusion
    #[must_use]
    pub const fn color(&self) -> Color {
        self.conclusion.color()
    }

    /// Number of formatted results across all sections
    #[must_use]
    pub fn total_fields(&self) -> usize {
        self.sections.iter().map(|s| s.fields.len()).sum()
    }
}

/// Links decorating a payload after formatting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayloadLinks {
    /// Headline link
    pub link: Option<String>,
    /// "View Details" link
    pub details_url: Option<String>,
    /// Report link per page URL
    pub reports: HashMap<String, String>,
}

impl PayloadLinks {
    /// Attach the links to `payload`
    pub fn apply(&self, payload: &mut NotificationPayload) {
        payload.link.clone_from(&self.link);
        payload.details_url.clone_from(&self.details_url);
        for section in &mut payload.sections {
            section.report_url = self.reports.get(&section.url).cloned();
        }
    }
}
