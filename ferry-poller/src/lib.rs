//! Ferry Poller
//!
//! Follows transfer jobs from submission to a terminal state.
//!
//! Architecture:
//! - Configuration: endpoint, poll interval, timeout and terminal states,
//!   loaded from the environment or built explicitly
//! - Poller: submit / query / cancel through a [`ferry_client::ControlSurface`]
//!   and the polling loop with its timeout-triggered cancellation
//! - Report: what `run` hands back once a job is over

pub mod config;
pub mod poller;
pub mod report;

pub use config::Config;
pub use ferry_client::{ClientError, Result};
pub use poller::JobPoller;
pub use report::JobReport;
