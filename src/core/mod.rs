//! Core domain logic for lhci-notify
//!
//! This module contains pure logic with no I/O dependencies.
//! File and network access is abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`AssertionResult`, `GroupedResults`, `NotificationPayload`)
//! - `services/` - Grouping, formatting and the load → format → send pipeline
//! - `ports/` - Trait definitions for the results source and notification sinks

pub mod models;
pub mod ports;
pub mod services;
