//! Assertion result records
//!
//! One record per assertion evaluated by `lhci assert`. The results file is a
//! JSON array of these objects:
//!
//! ```json
//! {
//!   "url": "https://example.com/",
//!   "auditId": "resource-summary",
//!   "auditProperty": "script.size",
//!   "auditTitle": "Keep request counts low and transfer sizes small",
//!   "operator": "<=",
//!   "expected": 100000,
//!   "actual": 150234
//! }
//! ```
//!
//! Lighthouse writes `expected`/`actual` as numbers; strings are accepted too.
//! Fields this tool does not use (`name`, `level`, `values`, ...) are ignored.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Comparison direction of an assertion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Operator {
    /// `<=` - actual must not exceed expected
    AtMost,
    /// `>` - actual must exceed expected
    GreaterThan,
    /// Any other operator Lighthouse CI may emit (`>=`, `==`, ...)
    Other(String),
}

impl Operator {
    /// The operator as written in the results file
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::AtMost => "<=",
            Self::GreaterThan => ">",
            Self::Other(op) => op.as_str(),
        }
    }

    /// Phrase placed between the expected and actual values
    ///
    /// Only `<=` reads as "less than"; every other operator reads as "greater than".
    #[must_use]
    pub const fn comparison_phrase(&self) -> &'static str {
        match self {
            Self::AtMost => " less than ",
            Self::GreaterThan | Self::Other(_) => " greater than ",
        }
    }
}

impl From<String> for Operator {
    fn from(op: String) -> Self {
        match op.as_str() {
            "<=" => Self::AtMost,
            ">" => Self::GreaterThan,
            _ => Self::Other(op),
        }
    }
}

impl From<&str> for Operator {
    fn from(op: &str) -> Self {
        Self::from(op.to_string())
    }
}

impl From<Operator> for String {
    fn from(op: Operator) -> Self {
        match op {
            Operator::Other(op) => op,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single assertion outcome produced by a Lighthouse CI run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssertionResult {
    /// Page URL the assertion ran against (grouping key)
    pub url: String,
    /// Audit identifier, e.g. `first-contentful-paint`
    pub audit_id: String,
    /// Optional audit property, e.g. `script.size`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit_property: Option<String>,
    /// Human-readable audit description
    pub audit_title: String,
    /// Comparison direction
    pub operator: Operator,
    /// Expected value, as display text
    #[serde(deserialize_with = "display_value")]
    pub expected: String,
    /// Actual value, as display text
    #[serde(deserialize_with = "display_value")]
    pub actual: String,
}

impl AssertionResult {
    /// Create a result without an audit property
    #[must_use]
    pub fn new(
        url: impl Into<String>,
        audit_id: impl Into<String>,
        audit_title: impl Into<String>,
        operator: impl Into<Operator>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            audit_id: audit_id.into(),
            audit_property: None,
            audit_title: audit_title.into(),
            operator: operator.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Set the audit property
    #[must_use]
    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.audit_property = Some(property.into());
        self
    }

    /// Composite key: `auditId` or `auditId.auditProperty`
    #[must_use]
    pub fn key(&self) -> String {
        match &self.audit_property {
            Some(property) => format!("{}.{}", self.audit_id, property),
            None => self.audit_id.clone(),
        }
    }
}

/// Accept a JSON number, string or boolean and keep its display text
fn display_value<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Bool(b) => Ok(b.to_string()),
        other => Err(D::Error::custom(format!("expected a number or string, found {other}"))),
    }
}
