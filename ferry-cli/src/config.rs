//! Configuration module
//!
//! Global command-line options, each with an environment variable fallback,
//! turned into the poller configuration.

use clap::Args;
use ferry_client::CommandPrograms;
use ferry_core::domain::job::TerminalStates;
use ferry_poller::Config;
use std::time::Duration;

/// Options shared by every subcommand
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Transfer service endpoint
    #[arg(
        short = 's',
        long,
        env = "FTS3_ENDPOINT",
        default_value = "https://localhost:8446",
        global = true
    )]
    pub endpoint: String,

    /// Label attached to submitted jobs
    #[arg(long, env = "FERRY_JOB_METADATA", global = true)]
    pub job_metadata: Option<String>,

    /// Seconds between two state queries
    #[arg(long, env = "POLL_INTERVAL", default_value_t = 5, global = true)]
    pub poll_interval: u64,

    /// Seconds a job may take before it is cancelled
    #[arg(long, env = "JOB_TIMEOUT", default_value_t = 300, global = true)]
    pub timeout: u64,

    /// State ending a job (repeatable; defaults to FINISHED, FAILED, FINISHEDDIRTY, CANCELED)
    #[arg(
        long = "terminal-state",
        env = "TERMINAL_STATES",
        value_delimiter = ',',
        global = true
    )]
    pub terminal_states: Vec<String>,

    /// Submit command
    #[arg(long, env = "FTS_SUBMIT_CMD", default_value = "fts-transfer-submit", global = true)]
    pub submit_cmd: String,

    /// Status command
    #[arg(long, env = "FTS_STATUS_CMD", default_value = "fts-transfer-status", global = true)]
    pub status_cmd: String,

    /// Cancel command
    #[arg(long, env = "FTS_CANCEL_CMD", default_value = "fts-transfer-cancel", global = true)]
    pub cancel_cmd: String,
}

impl GlobalArgs {
    /// Builds the poller configuration
    pub fn into_config(self) -> Config {
        let mut config = Config::new(self.endpoint)
            .with_poll_interval(Duration::from_secs(self.poll_interval))
            .with_timeout(Duration::from_secs(self.timeout));

        if let Some(label) = self.job_metadata.filter(|label| !label.is_empty()) {
            config = config.with_job_metadata(label);
        }

        if !self.terminal_states.is_empty() {
            config = config.with_terminal_states(TerminalStates::new(&self.terminal_states));
        }

        config.programs = CommandPrograms {
            submit: self.submit_cmd,
            status: self.status_cmd,
            cancel: self.cancel_cmd,
        };

        config
    }
}
