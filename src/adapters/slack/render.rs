//! Slack attachment rendering
//!
//! Message layout:
//!
//! ```text
//! [pretext + "Pull Request <conclusion> - <link>"]
//! ["N result(s) for <url>" + fields]     one per URL
//! ["View Details"]                        when a details link is known
//! ```
//!
//! Slack attachments only hold flat fields, so sections longer than the
//! inline limit keep their first fields and end with a single "…" marker.
//! The collapsed results are not sent unless `show_all_fields` is set.

use serde::Serialize;

use crate::core::models::{Field, NotificationPayload, Section};

/// Pretext used when none is configured
pub const DEFAULT_PRETEXT: &str = "Lighthouse CI assertion results";

/// Title of the marker field standing in for collapsed results
pub const MORE_MARKER: &str = "…";

/// Rendering options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlackOptions {
    /// Text shown above the headline attachment
    pub pretext: String,
    /// Send every field instead of truncating after the inline limit
    pub show_all_fields: bool,
}

impl Default for SlackOptions {
    fn default() -> Self {
        Self {
            pretext: DEFAULT_PRETEXT.to_string(),
            show_all_fields: false,
        }
    }
}

/// Webhook request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlackMessage {
    /// Attachments in display order
    pub attachments: Vec<Attachment>,
}

/// One colored attachment block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attachment {
    /// Text above the block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretext: Option<String>,
    /// Bold block title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Link on the title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_link: Option<String>,
    /// Body text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// `good` or `danger`
    pub color: &'static str,
    /// Titled values
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<AttachmentField>,
}

/// A titled value inside an attachment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttachmentField {
    /// Field title
    pub title: String,
    /// Field value
    pub value: String,
    /// Whether Slack may lay the field out side by side
    pub short: bool,
}

impl From<&Field> for AttachmentField {
    fn from(field: &Field) -> Self {
        Self {
            title: field.title.clone(),
            value: field.value.clone(),
            short: false,
        }
    }
}

/// Render a payload as a webhook message
#[must_use]
pub fn render(payload: &NotificationPayload, options: &SlackOptions) -> SlackMessage {
    let color = payload.color().as_str();

    let title = match &payload.link {
        Some(link) => format!("{} - {link}", payload.title),
        None => payload.title.clone(),
    };

    let mut attachments = vec![Attachment {
        pretext: Some(options.pretext.clone()),
        title: Some(title),
        title_link: payload.link.clone(),
        text: None,
        color,
        fields: Vec::new(),
    }];

    attachments.extend(
        payload
            .sections
            .iter()
            .map(|section| section_attachment(section, color, options.show_all_fields)),
    );

    if let Some(details_url) = &payload.details_url {
        attachments.push(Attachment {
            pretext: None,
            title: Some("View Details".to_string()),
            title_link: Some(details_url.clone()),
            text: None,
            color,
            fields: Vec::new(),
        });
    }

    SlackMessage { attachments }
}

fn section_attachment(section: &Section, color: &'static str, show_all: bool) -> Attachment {
    let mut fields: Vec<AttachmentField> = if show_all {
        section.fields.iter().map(AttachmentField::from).collect()
    } else {
        section.inline_fields().iter().map(AttachmentField::from).collect()
    };

    if !show_all && section.is_truncated() {
        fields.push(AttachmentField {
            title: MORE_MARKER.to_string(),
            value: format!("{} more result(s) not shown", section.collapsed_fields().len()),
            short: false,
        });
    }

    // Slack ignores `title_link` without a title, so a report link turns the
    // label into the title.
    let (title, text) = match section.report_url {
        Some(_) => (Some(section.label.clone()), None),
        None => (None, Some(section.label.clone())),
    };

    Attachment {
        pretext: None,
        title,
        title_link: section.report_url.clone(),
        text,
        color,
        fields,
    }
}
