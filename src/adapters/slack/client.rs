//! Slack webhook delivery

use std::time::Duration;

use reqwest::blocking::Client;

use crate::adapters::http;
use crate::config::{Secret, SlackSettings};
use crate::core::models::NotificationPayload;
use crate::core::ports::{DeliveryError, Notifier, Sink};

use super::render::{SlackOptions, render};

/// Posts payloads to a Slack incoming webhook
#[derive(Debug)]
pub struct SlackNotifier {
    webhook_url: Secret,
    options: SlackOptions,
    client: Client,
}

impl SlackNotifier {
    /// Notifier for the configured webhook
    pub fn new(settings: &SlackSettings, timeout: Duration) -> Result<Self, DeliveryError> {
        Ok(Self {
            webhook_url: settings.webhook_url.clone(),
            options: SlackOptions {
                show_all_fields: settings.show_all_fields,
                pretext: settings.pretext.clone(),
            },
            client: http::client(Sink::Slack, timeout)?,
        })
    }
}

impl Notifier for SlackNotifier {
    fn sink(&self) -> Sink {
        Sink::Slack
    }

    fn send(&self, payload: &NotificationPayload) -> Result<(), DeliveryError> {
        let message = render(payload, &self.options);
        http::send_once(Sink::Slack, self.client.post(self.webhook_url.expose()).json(&message))
    }
}
