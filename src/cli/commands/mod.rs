//! Command implementations
//!
//! Each command is implemented in its own module for better organization.

mod notify;
mod preview;

pub use notify::notify;
pub use preview::preview;

use std::path::Path;

use anyhow::Context;
use lhci_notify::config::{FileConfig, Settings};

use super::app::RunArgs;

/// Exit code when the notification could not be delivered
pub const DELIVERY_FAILURE: u8 = 2;

/// Layer flags, environment and config file for the current directory
fn load_settings(args: &RunArgs, config: Option<&Path>) -> anyhow::Result<Settings> {
    let root = std::env::current_dir().context("failed to determine the working directory")?;
    let file = FileConfig::discover(&root, config)?;
    Ok(Settings::resolve(&root, args.overrides(), file)?)
}
