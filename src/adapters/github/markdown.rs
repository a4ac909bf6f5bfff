//! Check run summary rendering
//!
//! ```markdown
//! ## [Pull Request failure](https://github.com/o/r/commit/abc)
//!
//! ### 3 result(s) for https://a.com
//!
//! - **x.y**: Title<br>Expected 100  less than  actual 150
//! - **z**: ...
//!
//! <details>
//! <summary>View more (1)</summary>
//!
//! - **w**: ...
//!
//! </details>
//!
//! [View Details](https://github.com/o/r/actions/runs/1)
//! ```
//!
//! Unlike Slack, nothing is dropped: collapsed results sit in the
//! `<details>` block.

use crate::core::models::{Field, NotificationPayload, Section};

/// Render the whole summary document
#[must_use]
pub fn render(payload: &NotificationPayload) -> String {
    let mut lines = vec![heading(payload), String::new()];

    if payload.sections.is_empty() {
        lines.push("No assertion results were reported.".to_string());
        lines.push(String::new());
    }

    for section in &payload.sections {
        lines.extend(section_block(section));
    }

    if let Some(details_url) = &payload.details_url {
        lines.push(format!("[View Details]({details_url})"));
        lines.push(String::new());
    }

    lines.join("\n")
}

fn heading(payload: &NotificationPayload) -> String {
    match &payload.link {
        Some(link) => format!("## [{}]({link})", payload.title),
        None => format!("## {}", payload.title),
    }
}

/// Render one URL section, including the `<details>` expander when truncated
#[must_use]
pub fn section_block(section: &Section) -> Vec<String> {
    let mut lines = vec![format!("### {}", section.label), String::new()];

    if let Some(report) = &section.report_url {
        lines.push(format!("[Lighthouse report]({report})"));
        lines.push(String::new());
    }

    lines.extend(section.inline_fields().iter().map(bullet));
    lines.push(String::new());

    if section.is_truncated() {
        let collapsed = section.collapsed_fields();
        lines.push("<details>".to_string());
        lines.push(format!("<summary>View more ({})</summary>", collapsed.len()));
        lines.push(String::new());
        lines.extend(collapsed.iter().map(bullet));
        lines.push(String::new());
        lines.push("</details>".to_string());
        lines.push(String::new());
    }

    lines
}

/// Render one field as a list item
#[must_use]
pub fn bullet(field: &Field) -> String {
    format!("- **{}**: {}", field.title, field.value.replace('\n', "<br>"))
}
