//! Property-based tests for grouping and formatting
//!
//! Uses proptest to verify properties that should hold for all inputs.

use lhci_notify::core::models::AssertionResult;
use lhci_notify::core::services::{format, group_by_url};
use proptest::prelude::*;

fn results_strategy() -> impl Strategy<Value = Vec<AssertionResult>> {
    prop::collection::vec(("[a-d]", "[a-z]{1,8}", prop::bool::ANY), 0..40).prop_map(|rows| {
        rows.into_iter()
            .map(|(host, audit, at_most)| {
                AssertionResult::new(
                    format!("https://{host}.com"),
                    audit,
                    "Title",
                    if at_most { "<=" } else { ">" },
                    "1",
                    "2",
                )
            })
            .collect()
    })
}

proptest! {
    /// URLs come out in first-seen order
    #[test]
    fn urls_keep_first_seen_order(results in results_strategy()) {
        let grouped = group_by_url(results.clone());

        let mut expected: Vec<&str> = Vec::new();
        for r in &results {
            if !expected.contains(&r.url.as_str()) {
                expected.push(&r.url);
            }
        }
        prop_assert_eq!(grouped.urls().collect::<Vec<_>>(), expected);
    }

    /// Each group keeps the original relative order of its records
    #[test]
    fn groups_keep_relative_order(results in results_strategy()) {
        let grouped = group_by_url(results.clone());

        for group in &grouped {
            let expected: Vec<_> = results.iter().filter(|r| r.url == group.url).cloned().collect();
            prop_assert_eq!(&group.results, &expected);
        }
        prop_assert_eq!(grouped.total_results(), results.len());
    }

    /// Formatting twice gives identical payloads
    #[test]
    fn format_is_deterministic(results in results_strategy(), status in -2i32..3) {
        let grouped = group_by_url(results);
        prop_assert_eq!(format(&grouped, status), format(&grouped, status));
    }

    /// No field is ever lost from the payload, whatever the truncation
    #[test]
    fn payload_keeps_every_field(results in results_strategy()) {
        let count = results.len();
        let payload = format(&group_by_url(results), 1);

        prop_assert_eq!(payload.total_fields(), count);
        for section in &payload.sections {
            prop_assert_eq!(
                section.inline_fields().len() + section.collapsed_fields().len(),
                section.fields.len()
            );
        }
    }
}
