//! Job command handlers
//!
//! Submitting, inspecting, cancelling and following transfer jobs.

use anyhow::{Context, Result};
use colored::*;
use ferry_core::domain::job::{JobId, JobState};
use ferry_core::domain::transfer::TransferSpec;
use ferry_core::dto::submission::parse_transfers;
use ferry_poller::{JobPoller, JobReport};
use std::path::Path;

/// Submit a job and print its id
pub async fn submit(poller: &JobPoller, file: &Path, extra_args: &[String]) -> Result<()> {
    let transfers = load_transfers(file)?;

    let job_id = poller
        .submit(&transfers, extra_args)
        .await
        .context("Failed to submit job")?;

    println!("{}", job_id);
    Ok(())
}

/// Print the current state of a job
pub async fn status(poller: &JobPoller, job_id: &str) -> Result<()> {
    let job_id = parse_job_id(job_id)?;

    let state = poller
        .get_state(&job_id)
        .await
        .with_context(|| format!("Failed to query job {}", job_id))?;

    println!("{}", colorize_state(poller, &state));
    Ok(())
}

/// Cancel a job
pub async fn cancel(poller: &JobPoller, job_id: &str) -> Result<()> {
    let job_id = parse_job_id(job_id)?;

    poller
        .cancel(&job_id)
        .await
        .with_context(|| format!("Failed to cancel job {}", job_id))?;

    println!("{} Cancellation requested for job {}", "✓".green(), job_id);
    Ok(())
}

/// Wait for a job to end and print its terminal state
pub async fn poll(poller: &JobPoller, job_id: &str) -> Result<()> {
    let job_id = parse_job_id(job_id)?;

    let state = poller
        .poll(&job_id)
        .await
        .with_context(|| format!("Failed while polling job {}", job_id))?;

    println!("{}", colorize_state(poller, &state));
    Ok(())
}

/// Submit a job, wait for it and print the report
pub async fn run(
    poller: &JobPoller,
    file: &Path,
    extra_args: &[String],
    json: bool,
) -> Result<()> {
    let transfers = load_transfers(file)?;

    let report = poller
        .run(&transfers, extra_args)
        .await
        .context("Job did not complete")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(poller, &report);
    }

    if !report.is_success() {
        anyhow::bail!("job {} ended in state {}", report.job_id, report.state);
    }

    Ok(())
}

/// Read a transfer list from disk
fn load_transfers(file: &Path) -> Result<TransferSpec> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let transfers = parse_transfers(&content)
        .with_context(|| format!("Failed to parse transfers from {}", file.display()))?;

    if transfers.is_empty() {
        anyhow::bail!("{} does not contain any transfer", file.display());
    }

    Ok(transfers)
}

fn parse_job_id(raw: &str) -> Result<JobId> {
    JobId::parse(raw).ok_or_else(|| anyhow::anyhow!("job id cannot be empty"))
}

/// Print the outcome of a run
fn print_report(poller: &JobPoller, report: &JobReport) {
    println!("{}", "Job Report:".bold());
    println!("  ID:        {}", report.job_id.to_string().cyan());
    println!("  State:     {}", colorize_state(poller, &report.state));
    println!("  Queries:   {}", report.queries);
    println!(
        "  Submitted: {}",
        report.submitted_at.format("%Y-%m-%d %H:%M:%S")
    );
    println!(
        "  Completed: {}",
        report.completed_at.format("%Y-%m-%d %H:%M:%S")
    );
    println!("  Duration:  {}s", report.duration().num_seconds());
}

/// Colorize a job state for display
fn colorize_state(poller: &JobPoller, state: &JobState) -> ColoredString {
    let name = state.as_str();
    match name {
        JobState::FINISHED => name.green(),
        JobState::FINISHED_DIRTY => name.yellow(),
        JobState::FAILED => name.red(),
        JobState::CANCELED => name.dimmed(),
        _ if poller.config().terminal_states.contains(state) => name.bold(),
        _ => name.cyan(),
    }
}
