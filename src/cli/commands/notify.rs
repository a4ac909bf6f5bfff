//! Send the assertion summary to the configured target

use std::path::Path;
use std::process::ExitCode;

use lhci_notify::adapters::{self, file::FileResultLoader};
use lhci_notify::core::services::pipeline;
use lhci_notify::output::{NotifyReport, OutputMode};

use super::{DELIVERY_FAILURE, load_settings};
use crate::cli::app::RunArgs;

/// Load, format and send once
///
/// A malformed results file or bad configuration is an error. A delivery
/// failure is reported and exits with [`DELIVERY_FAILURE`]; the Lighthouse
/// verdict never changes the exit code.
pub fn notify(args: &RunArgs, config: Option<&Path>, mode: OutputMode) -> anyhow::Result<ExitCode> {
    let settings = load_settings(args, config)?;
    let notifier = adapters::notifier(&settings.sink_settings()?, settings.timeout)?;
    let source = FileResultLoader::new(&settings.results_path);

    let outcome = pipeline::notify(&source, notifier.as_ref(), args.status, &settings.payload_links())?;
    NotifyReport::from_outcome(settings.target, &outcome).render(mode);

    if outcome.delivered() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(DELIVERY_FAILURE))
    }
}
