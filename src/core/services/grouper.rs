//! Stable grouping of results by page URL

use crate::core::models::{AssertionResult, GroupedResults};

/// Group results by `url`
///
/// URLs keep their first-seen order and each group keeps the original
/// relative order of its results.
pub fn group_by_url<I>(results: I) -> GroupedResults
where
    I: IntoIterator<Item = AssertionResult>,
{
    results.into_iter().collect()
}
