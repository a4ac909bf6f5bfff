//! Shared blocking HTTP client setup
//!
//! Every sink makes exactly one request with a bounded timeout.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};

use crate::core::ports::{DeliveryError, Sink};

/// User agent sent with every request (GitHub rejects requests without one)
pub const USER_AGENT: &str = concat!("lhci-notify/", env!("CARGO_PKG_VERSION"));

/// Timeout applied when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Longest response body kept in a [`DeliveryError::Rejected`]
const MAX_ERROR_BODY: usize = 512;

/// Build a client for `sink`
pub fn client(sink: Sink, timeout: Duration) -> Result<Client, DeliveryError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|source| DeliveryError::Client {
            sink,
            source: source.without_url(),
        })
}

/// Send a prepared request once and require a 2xx answer
pub fn send_once(sink: Sink, request: RequestBuilder) -> Result<(), DeliveryError> {
    // The request URL is the Slack credential, so it never reaches error text.
    let response = request.send().map_err(|source| DeliveryError::Transport {
        sink,
        source: source.without_url(),
    })?;

    let status = response.status();
    if status.is_success() {
        log::debug!("{sink} accepted the notification (HTTP {})", status.as_u16());
        return Ok(());
    }

    let body = response.text().unwrap_or_default();
    Err(DeliveryError::Rejected {
        sink,
        status: status.as_u16(),
        body: truncate(body.trim(), MAX_ERROR_BODY),
    })
}

fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((end, _)) => format!("{}…", &text[..end]),
        None => text.to_string(),
    }
}
