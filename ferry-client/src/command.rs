//! Command-line control surface
//!
//! Drives the transfer service through its command-line tools:
//! - `fts-transfer-submit` to create a job from a bulk submission file
//! - `fts-transfer-status` to read a job state
//! - `fts-transfer-cancel` to cancel a job
//!
//! Each tool prints its result on stdout and signals failure with a
//! non-zero exit code.

use async_trait::async_trait;
use ferry_core::domain::job::{JobId, JobState};
use ferry_core::domain::transfer::TransferSpec;
use ferry_core::dto::submission::BulkSubmission;
use std::io::Write;
use tracing::{debug, error};

use crate::error::{ClientError, Result};
use crate::exec::{CommandExecutor, CommandOutput, ProcessExecutor};
use crate::surface::ControlSurface;

/// Names of the three command-line tools
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPrograms {
    pub submit: String,
    pub status: String,
    pub cancel: String,
}

impl Default for CommandPrograms {
    fn default() -> Self {
        Self {
            submit: "fts-transfer-submit".to_string(),
            status: "fts-transfer-status".to_string(),
            cancel: "fts-transfer-cancel".to_string(),
        }
    }
}

/// Control surface backed by the transfer command-line tools
#[derive(Debug, Clone)]
pub struct CommandSurface<E = ProcessExecutor> {
    /// Service endpoint passed with `-s`
    endpoint: String,
    /// Label passed with `--job-metadata` on submission
    job_metadata: Option<String>,
    programs: CommandPrograms,
    executor: E,
}

impl CommandSurface<ProcessExecutor> {
    /// Creates a surface spawning the default tools against `endpoint`
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_executor(endpoint, ProcessExecutor)
    }
}

impl<E: CommandExecutor> CommandSurface<E> {
    /// Creates a surface running its commands through `executor`
    pub fn with_executor(endpoint: impl Into<String>, executor: E) -> Self {
        Self {
            endpoint: endpoint.into(),
            job_metadata: None,
            programs: CommandPrograms::default(),
            executor,
        }
    }

    pub fn with_job_metadata(mut self, label: impl Into<String>) -> Self {
        self.job_metadata = Some(label.into());
        self
    }

    pub fn with_programs(mut self, programs: CommandPrograms) -> Self {
        self.programs = programs;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn programs(&self) -> &CommandPrograms {
        &self.programs
    }

    /// Runs one tool, logging its output when it fails
    async fn invoke(&self, program: &str, args: &[String]) -> Result<CommandOutput> {
        debug!("Spawning {} {}", program, args.join(" "));

        let output = self.executor.run(program, args).await?;

        if !output.success() {
            error!("{} failed with exit code {}", program, output.exit_code);
            if !output.stdout.trim().is_empty() {
                error!("{} stdout: {}", program, output.stdout.trim());
            }
            if !output.stderr.trim().is_empty() {
                error!("{} stderr: {}", program, output.stderr.trim());
            }
        }

        Ok(output)
    }
}

#[async_trait]
impl<E: CommandExecutor> ControlSurface for CommandSurface<E> {
    async fn submit(&self, transfers: &TransferSpec, extra_args: &[String]) -> Result<JobId> {
        let document = BulkSubmission::from(transfers).to_json()?;

        let mut file = tempfile::Builder::new()
            .prefix("ferry-")
            .suffix(".submission")
            .tempfile()?;
        file.write_all(document.as_bytes())?;
        file.flush()?;
        // Closes our handle; the file itself lives until `submission` drops
        let submission = file.into_temp_path();

        let mut args = vec!["-s".to_string(), self.endpoint.clone()];
        if let Some(label) = &self.job_metadata {
            args.push("--job-metadata".to_string());
            args.push(label.clone());
        }
        args.push("--new-bulk-format".to_string());
        args.push("-f".to_string());
        args.push(submission.to_string_lossy().into_owned());
        args.extend(extra_args.iter().cloned());

        let output = self.invoke(&self.programs.submit, &args).await?;
        drop(submission);

        if !output.success() {
            return Err(ClientError::Submission(output));
        }

        JobId::parse(&output.stdout).ok_or_else(|| {
            ClientError::InvalidResponse(format!("{} printed no job id", self.programs.submit))
        })
    }

    async fn query_state(&self, job_id: &JobId) -> Result<JobState> {
        let args = [
            "-s".to_string(),
            self.endpoint.clone(),
            job_id.to_string(),
        ];

        let output = self.invoke(&self.programs.status, &args).await?;
        if !output.success() {
            return Err(ClientError::Query(output));
        }

        JobState::parse(&output.stdout).ok_or_else(|| {
            ClientError::InvalidResponse(format!(
                "{} printed no state for job {}",
                self.programs.status, job_id
            ))
        })
    }

    async fn cancel(&self, job_id: &JobId) -> Result<()> {
        let args = [
            "-s".to_string(),
            self.endpoint.clone(),
            job_id.to_string(),
        ];

        let output = self.invoke(&self.programs.cancel, &args).await?;
        if !output.success() {
            return Err(ClientError::Cancellation(output));
        }

        Ok(())
    }
}
