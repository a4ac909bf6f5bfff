//! Slack incoming webhook sink
//!
//! - [`render`] - Payload → attachment message
//! - [`SlackNotifier`] - One POST to the webhook URL

mod client;
pub mod render;

pub use client::SlackNotifier;
pub use render::{Attachment, AttachmentField, SlackMessage, SlackOptions, render};
