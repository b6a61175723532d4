//! Transfer control surface
//!
//! The three operations the poller needs from the transfer service. How
//! they reach the service (command-line tools, test doubles) is up to the
//! implementation.

use async_trait::async_trait;
use ferry_core::domain::job::{JobId, JobState};
use ferry_core::domain::transfer::TransferSpec;

use crate::error::Result;

/// Submit / query / cancel operations of the transfer service
#[async_trait]
pub trait ControlSurface: Send + Sync {
    /// Submits a job made of `transfers`
    ///
    /// # Arguments
    /// * `transfers` - The files to transfer
    /// * `extra_args` - Additional arguments passed through to the service
    ///
    /// # Returns
    /// The identifier of the new job
    async fn submit(&self, transfers: &TransferSpec, extra_args: &[String]) -> Result<JobId>;

    /// Queries the current state of a job
    async fn query_state(&self, job_id: &JobId) -> Result<JobState>;

    /// Requests cancellation of a job
    async fn cancel(&self, job_id: &JobId) -> Result<()>;
}
