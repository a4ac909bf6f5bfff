//! The load → format → send pipeline
//!
//! A missing results file is an empty report. A malformed one aborts before
//! anything is sent. A failed delivery is returned in the [`Outcome`] rather
//! than as an error so callers can report it without confusing it with the
//! Lighthouse verdict.

use crate::core::models::{NotificationPayload, PayloadLinks};
use crate::core::ports::{DeliveryError, LoadError, Notifier, ResultSource};

use super::formatter;

/// Result of one notification run
#[derive(Debug)]
pub struct Outcome {
    /// Payload that was handed to the sink
    pub payload: NotificationPayload,
    /// Delivery result
    pub delivery: Result<(), DeliveryError>,
}

impl Outcome {
    /// True when the sink accepted the payload
    #[must_use]
    pub const fn delivered(&self) -> bool {
        self.delivery.is_ok()
    }
}

/// Load results and build the decorated payload without sending it
pub fn prepare(
    source: &dyn ResultSource,
    status: i32,
    links: &PayloadLinks,
) -> Result<NotificationPayload, LoadError> {
    let grouped = source.load_or_empty()?;
    log::debug!(
        "Loaded {} result(s) across {} URL(s)",
        grouped.total_results(),
        grouped.len()
    );

    let mut payload = formatter::format(&grouped, status);
    links.apply(&mut payload);
    Ok(payload)
}

/// Load, format and send once
pub fn notify(
    source: &dyn ResultSource,
    notifier: &dyn Notifier,
    status: i32,
    links: &PayloadLinks,
) -> Result<Outcome, LoadError> {
    let payload = prepare(source, status, links)?;

    log::debug!("Sending {} notification ({})", notifier.sink(), payload.conclusion);
    let delivery = notifier.send(&payload);
    if let Err(e) = &delivery {
        log::warn!("Notification not delivered: {e}");
    }

    Ok(Outcome { payload, delivery })
}
