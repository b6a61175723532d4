//! Ferry Client
//!
//! Access to the transfer service's control surface: submitting a job,
//! reading its state and cancelling it.
//!
//! The [`ControlSurface`] trait is what the job poller depends on. The
//! default implementation, [`CommandSurface`], drives the FTS command-line
//! tools and turns their exit codes and output into typed results.
//!
//! # Example
//!
//! ```no_run
//! use ferry_client::{CommandSurface, ControlSurface};
//! use ferry_core::domain::transfer::{Transfer, TransferSpec};
//!
//! #[tokio::main]
//! async fn main() -> ferry_client::Result<()> {
//!     let surface = CommandSurface::new("https://fts.example.org:8446")
//!         .with_job_metadata("nightly");
//!
//!     let transfers = TransferSpec::new(vec![Transfer::new(
//!         "gsiftp://src.example.org/data/file",
//!         "gsiftp://dst.example.org/data/file",
//!     )]);
//!
//!     let job_id = surface.submit(&transfers, &[]).await?;
//!     println!("{} is {}", job_id, surface.query_state(&job_id).await?);
//!     Ok(())
//! }
//! ```

mod command;
pub mod error;
mod exec;
mod surface;

pub use command::{CommandPrograms, CommandSurface};
pub use error::{ClientError, Result};
pub use exec::{CommandExecutor, CommandOutput, ProcessExecutor};
pub use surface::ControlSurface;
