//! Ferry CLI
//!
//! Command-line interface for submitting transfer jobs and following them
//! until they finish.

mod commands;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Commands, handle_command};
use config::GlobalArgs;
use ferry_poller::JobPoller;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ferry")]
#[command(about = "Submit transfer jobs and follow them to a terminal state", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries results
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ferry=info,ferry_poller=info,ferry_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = cli.global.into_config();
    config.validate().context("Invalid configuration")?;

    let poller = JobPoller::from_config(config);

    handle_command(cli.command, &poller).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::time::Duration;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args_build_config() {
        let cli = Cli::try_parse_from([
            "ferry",
            "-s",
            "https://fts.example.org:8446",
            "--job-metadata",
            "nightly",
            "--poll-interval",
            "2",
            "--timeout",
            "30",
            "--terminal-state",
            "FINISHED",
            "--terminal-state",
            "FAILED",
            "status",
            "abc",
        ])
        .unwrap();

        let config = cli.global.into_config();
        assert_eq!(config.endpoint, "https://fts.example.org:8446");
        assert_eq!(config.job_metadata.as_deref(), Some("nightly"));
        assert_eq!(config.poll_interval, Duration::from_secs(2));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.terminal_states.to_string(), "FAILED,FINISHED");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_extra_args_are_passed_through() {
        let cli = Cli::try_parse_from([
            "ferry",
            "submit",
            "transfers.json",
            "--",
            "--retry",
            "3",
        ])
        .unwrap();

        match cli.command {
            Commands::Submit { file, extra_args } => {
                assert_eq!(file.to_str(), Some("transfers.json"));
                assert_eq!(extra_args, vec!["--retry", "3"]);
            }
            _ => panic!("expected submit command"),
        }
    }
}
