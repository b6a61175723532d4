//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod job;

use anyhow::Result;
use clap::Subcommand;
use ferry_poller::JobPoller;
use std::path::PathBuf;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Submit a job and print its id
    Submit {
        /// JSON file with a list of transfers or a {"Files": [...]} document
        file: PathBuf,

        /// Extra arguments for the submit command, after `--`
        #[arg(last = true)]
        extra_args: Vec<String>,
    },
    /// Print the current state of a job
    Status {
        /// Job ID
        job_id: String,
    },
    /// Cancel a job
    Cancel {
        /// Job ID
        job_id: String,
    },
    /// Wait for a job to reach a terminal state
    Poll {
        /// Job ID
        job_id: String,
    },
    /// Submit a job and wait for it to finish
    ///
    /// Exits with an error unless the job ends in FINISHED.
    Run {
        /// JSON file with a list of transfers or a {"Files": [...]} document
        file: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Extra arguments for the submit command, after `--`
        #[arg(last = true)]
        extra_args: Vec<String>,
    },
}

/// Handle a CLI command
///
/// # Arguments
/// * `command` - The command to execute
/// * `poller` - Poller configured from the global options
pub async fn handle_command(command: Commands, poller: &JobPoller) -> Result<()> {
    match command {
        Commands::Submit { file, extra_args } => job::submit(poller, &file, &extra_args).await,
        Commands::Status { job_id } => job::status(poller, &job_id).await,
        Commands::Cancel { job_id } => job::cancel(poller, &job_id).await,
        Commands::Poll { job_id } => job::poll(poller, &job_id).await,
        Commands::Run {
            file,
            json,
            extra_args,
        } => job::run(poller, &file, &extra_args, json).await,
    }
}
