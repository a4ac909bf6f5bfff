//! Run verdict and the sink color derived from it

use serde::Serialize;

/// Success/failure verdict of the Lighthouse CI run being reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Conclusion {
    /// Status code 0
    Success,
    /// Any non-zero status code
    Failure,
}

impl Conclusion {
    /// Map a process status code to a verdict
    #[must_use]
    pub const fn from_status(status: i32) -> Self {
        if status == 0 { Self::Success } else { Self::Failure }
    }

    /// Verdict as used by the GitHub Checks API
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }

    /// Attachment color for this verdict
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Success => Color::Good,
            Self::Failure => Color::Danger,
        }
    }
}

impl std::fmt::Display for Conclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Slack attachment color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Green
    Good,
    /// Red
    Danger,
}

impl Color {
    /// Color name understood by Slack
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Danger => "danger",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
