//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use super::commands;
use lhci_notify::config::{Overrides, Secret};
use lhci_notify::core::ports::Sink;
use lhci_notify::output::OutputMode;

/// lhci-notify - Lighthouse CI assertion notifications
#[derive(Parser, Debug)]
#[command(
    name = "lhci-notify",
    version,
    about = "Post Lighthouse CI assertion results to Slack or a GitHub Check Run",
    long_about = "Post Lighthouse CI assertion results to Slack or a GitHub Check Run.\n\n\
                  Reads .lighthouseci/assertion-results.json, groups the results by URL\n\
                  and sends one summary to the selected target."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to ./.lhci-notify.toml when present)
    #[arg(long, global = true, env = "LHCI_NOTIFY_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Send the assertion summary to the configured target
    Notify(RunArgs),

    /// Print what would be sent, without sending it
    Preview(RunArgs),

    /// Show version
    Version,
}

/// Options shared by `notify` and `preview`
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Exit status of the Lighthouse CI run (0 = success)
    #[arg(long, allow_negative_numbers = true)]
    pub status: i32,

    /// Notification target: slack, github-check
    #[arg(short, long, env = "LHCI_NOTIFY_TARGET")]
    pub target: Option<Sink>,

    /// Assertion results file
    #[arg(long, value_name = "PATH")]
    pub results: Option<PathBuf>,

    /// Report links file written by `lhci upload`
    #[arg(long, value_name = "PATH")]
    pub links: Option<PathBuf>,

    /// Slack incoming webhook URL
    #[arg(long, env = "SLACK_WEBHOOK_URL", hide_env_values = true)]
    pub slack_webhook_url: Option<Secret>,

    /// Send every result to Slack instead of the first two per URL
    #[arg(long)]
    pub slack_show_all_fields: bool,

    /// GitHub token with checks:write
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<Secret>,

    /// Repository as owner/repo
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    /// Commit SHA for the check run (defaults to HEAD)
    #[arg(long, env = "GITHUB_SHA")]
    pub sha: Option<String>,

    /// GitHub REST API root
    #[arg(long, env = "GITHUB_API_URL")]
    pub github_api_url: Option<String>,

    /// GitHub web root, used to build links
    #[arg(long, env = "GITHUB_SERVER_URL")]
    pub github_server_url: Option<String>,

    /// Workflow run ID, used to build the "View Details" link
    #[arg(long, env = "GITHUB_RUN_ID")]
    pub run_id: Option<String>,

    /// Link attached to the headline
    #[arg(long)]
    pub link: Option<String>,

    /// Target of the "View Details" link
    #[arg(long)]
    pub details_url: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long, env = "LHCI_NOTIFY_TIMEOUT")]
    pub timeout_secs: Option<u64>,
}

impl RunArgs {
    /// Flag and environment values to layer over the config file
    pub fn overrides(&self) -> Overrides {
        Overrides {
            target: self.target,
            results: self.results.clone(),
            links: self.links.clone(),
            slack_webhook_url: self.slack_webhook_url.clone(),
            slack_show_all_fields: self.slack_show_all_fields,
            github_token: self.github_token.clone(),
            repository: self.repository.clone(),
            sha: self.sha.clone(),
            github_api_url: self.github_api_url.clone(),
            github_server_url: self.github_server_url.clone(),
            run_id: self.run_id.clone(),
            link: self.link.clone(),
            details_url: self.details_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let config = cli.config.as_deref();

    match cli.command {
        Some(Command::Notify(args)) => commands::notify(&args, config, output_mode),
        Some(Command::Preview(args)) => commands::preview(&args, config, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("lhci-notify v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(ExitCode::SUCCESS)
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("lhci-notify v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'lhci-notify --help' for usage");
            }
            Ok(ExitCode::SUCCESS)
        },
    }
}
