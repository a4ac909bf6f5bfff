//! Domain models for lhci-notify
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`AssertionResult`] - One Lighthouse CI assertion outcome
//! - [`GroupedResults`] - Results bucketed by page URL, first-seen order
//! - [`Conclusion`] - Success/failure verdict derived from the run status
//! - [`NotificationPayload`] - Render-agnostic summary consumed by every sink

mod assertion_result;
mod conclusion;
mod grouped;
mod payload;

pub use assertion_result::{AssertionResult, Operator};
pub use conclusion::{Color, Conclusion};
pub use grouped::{GroupedResults, UrlGroup};
pub use payload::{Field, INLINE_FIELD_LIMIT, NotificationPayload, PayloadLinks, Section};
