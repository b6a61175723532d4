//! Job poller
//!
//! Follows one submitted job until it reaches a terminal state. The job is
//! queried at a fixed interval; if the configured timeout runs out first the
//! job is cancelled so it is not left running on the service.

use chrono::Utc;
use ferry_client::{ClientError, CommandSurface, ControlSurface, Result};
use ferry_core::domain::job::{JobId, JobState};
use ferry_core::domain::transfer::TransferSpec;
use std::sync::Arc;
use tokio::time::{self, Instant};
use tracing::{debug, error, info};

use crate::config::Config;
use crate::report::JobReport;

/// Terminal state together with the number of queries it took
struct Polled {
    state: JobState,
    queries: usize,
}

/// Tracks transfer jobs through the control surface
///
/// Holds no state besides its configuration, so one poller can follow any
/// number of jobs, each from its own task.
pub struct JobPoller {
    config: Config,
    surface: Arc<dyn ControlSurface>,
}

impl JobPoller {
    /// Creates a new job poller on top of `surface`
    pub fn new(config: Config, surface: Arc<dyn ControlSurface>) -> Self {
        Self { config, surface }
    }

    /// Creates a job poller driving the command-line tools named in `config`
    pub fn from_config(config: Config) -> Self {
        let mut surface = CommandSurface::new(config.endpoint.clone())
            .with_programs(config.programs.clone());
        if let Some(label) = &config.job_metadata {
            surface = surface.with_job_metadata(label.clone());
        }
        Self::new(config, Arc::new(surface))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Submits a job and returns its id
    pub async fn submit(&self, transfers: &TransferSpec, extra_args: &[String]) -> Result<JobId> {
        let job_id = self.surface.submit(transfers, extra_args).await?;
        info!("Submitted job {} ({} transfer(s))", job_id, transfers.len());
        Ok(job_id)
    }

    /// Reads the current state of a job
    pub async fn get_state(&self, job_id: &JobId) -> Result<JobState> {
        self.surface.query_state(job_id).await
    }

    /// Cancels a job
    pub async fn cancel(&self, job_id: &JobId) -> Result<()> {
        info!("Cancelling job {}", job_id);
        self.surface.cancel(job_id).await
    }

    /// Waits for a job to reach a terminal state
    ///
    /// # Returns
    /// The terminal state. Never returns a state outside the configured
    /// terminal set.
    ///
    /// # Errors
    /// - [`ClientError::Query`] as soon as a state query fails
    /// - [`ClientError::Timeout`] when the timeout ran out; the job has been
    ///   cancelled
    /// - [`ClientError::TimeoutCancelFailed`] when the timeout ran out and
    ///   the cancellation failed as well
    pub async fn poll(&self, job_id: &JobId) -> Result<JobState> {
        self.poll_job(job_id).await.map(|polled| polled.state)
    }

    /// Submits a job and follows it to a terminal state
    pub async fn run(&self, transfers: &TransferSpec, extra_args: &[String]) -> Result<JobReport> {
        let job_id = self.submit(transfers, extra_args).await?;
        let submitted_at = Utc::now();

        let polled = self.poll_job(&job_id).await?;
        info!("Job {} ended in state {}", job_id, polled.state);

        Ok(JobReport {
            job_id,
            state: polled.state,
            queries: polled.queries,
            submitted_at,
            completed_at: Utc::now(),
        })
    }

    async fn poll_job(&self, job_id: &JobId) -> Result<Polled> {
        let terminal = &self.config.terminal_states;
        let interval = self.config.poll_interval;
        let started = Instant::now();

        let mut remaining = self.config.timeout;
        let mut state = self.get_state(job_id).await?;
        let mut queries = 1;

        while !terminal.contains(&state) {
            debug!("{} {}", job_id, state);

            time::sleep(interval).await;
            remaining = remaining.saturating_sub(interval);

            state = self.get_state(job_id).await?;
            queries += 1;

            // Checked after the query so a job finishing on the last poll is
            // reported rather than cancelled
            if terminal.contains(&state) {
                break;
            }

            if remaining.is_zero() {
                let waited = started.elapsed();
                error!(
                    "Timeout expired for job {} after {:?} (last state {}), cancelling job",
                    job_id, waited, state
                );

                return Err(match self.cancel(job_id).await {
                    Ok(()) => ClientError::Timeout {
                        job_id: job_id.clone(),
                        waited,
                    },
                    Err(e) => {
                        error!("Failed to cancel timed out job {}: {}", job_id, e);
                        ClientError::TimeoutCancelFailed {
                            job_id: job_id.clone(),
                            waited,
                            source: Box::new(e),
                        }
                    }
                });
            }
        }

        Ok(Polled { state, queries })
    }
}
