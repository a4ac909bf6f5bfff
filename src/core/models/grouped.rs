//! Assertion results grouped by page URL

use std::collections::HashMap;

use super::AssertionResult;

/// All results recorded for one page URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlGroup {
    /// Page URL shared by every result in the group
    pub url: String,
    /// Results in their original relative order (never empty)
    pub results: Vec<AssertionResult>,
}

/// Ordered mapping from URL to its results
///
/// Iteration yields URLs in first-seen order. Nothing is sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedResults {
    groups: Vec<UrlGroup>,
    index: HashMap<String, usize>,
}

impl GroupedResults {
    /// Create an empty mapping
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a result to its URL group, opening a new group on first sight
    pub fn push(&mut self, result: AssertionResult) {
        if let Some(&i) = self.index.get(&result.url) {
            self.groups[i].results.push(result);
            return;
        }
        self.index.insert(result.url.clone(), self.groups.len());
        self.groups.push(UrlGroup {
            url: result.url.clone(),
            results: vec![result],
        });
    }

    /// Results for a URL, if any were recorded
    #[must_use]
    pub fn get(&self, url: &str) -> Option<&[AssertionResult]> {
        self.index.get(url).map(|&i| self.groups[i].results.as_slice())
    }

    /// Iterate groups in first-seen order
    pub fn iter(&self) -> std::slice::Iter<'_, UrlGroup> {
        self.groups.iter()
    }

    /// URLs in first-seen order
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.url.as_str())
    }

    /// Number of distinct URLs
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True when no results were recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of results across all URLs
    #[must_use]
    pub fn total_results(&self) -> usize {
        self.groups.iter().map(|g| g.results.len()).sum()
    }
}

impl FromIterator<AssertionResult> for GroupedResults {
    fn from_iter<I: IntoIterator<Item = AssertionResult>>(iter: I) -> Self {
        let mut grouped = Self::new();
        for result in iter {
            grouped.push(result);
        }
        grouped
    }
}

impl<'a> IntoIterator for &'a GroupedResults {
    type Item = &'a UrlGroup;
    type IntoIter = std::slice::Iter<'a, UrlGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
