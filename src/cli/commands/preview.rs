//! Print the notification body without sending it

use std::path::Path;
use std::process::ExitCode;

use lhci_notify::adapters::file::FileResultLoader;
use lhci_notify::adapters::{github, slack};
use lhci_notify::core::ports::Sink;
use lhci_notify::core::services::pipeline;
use lhci_notify::output::OutputMode;

use super::load_settings;
use crate::cli::app::RunArgs;

/// Render the payload for the selected target to stdout
///
/// `--json` prints the render-agnostic payload instead. No credentials are
/// needed.
pub fn preview(args: &RunArgs, config: Option<&Path>, mode: OutputMode) -> anyhow::Result<ExitCode> {
    let settings = load_settings(args, config)?;
    let source = FileResultLoader::new(&settings.results_path);
    let payload = pipeline::prepare(&source, args.status, &settings.payload_links())?;

    match (mode, settings.target) {
        (OutputMode::Json, _) => println!("{}", serde_json::to_string_pretty(&payload)?),
        (OutputMode::Human, Sink::Slack) => {
            let options = slack::SlackOptions {
                pretext: settings.slack_pretext.clone(),
                show_all_fields: settings.slack_show_all_fields,
            };
            println!("{}", serde_json::to_string_pretty(&slack::render(&payload, &options))?);
        },
        (OutputMode::Human, Sink::GithubCheck) => print!("{}", github::markdown::render(&payload)),
    }

    Ok(ExitCode::SUCCESS)
}
