//! Error types for the ferry client

use ferry_core::domain::job::JobId;
use std::time::Duration;
use thiserror::Error;

use crate::exec::CommandOutput;

/// Result type alias for control surface operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when driving a transfer job
#[derive(Debug, Error)]
pub enum ClientError {
    /// The submit command exited with a non-zero status
    #[error("submission failed with exit code {}: {}", .0.exit_code, .0.summary())]
    Submission(CommandOutput),

    /// The status command exited with a non-zero status
    #[error("state query failed with exit code {}: {}", .0.exit_code, .0.summary())]
    Query(CommandOutput),

    /// The cancel command exited with a non-zero status
    #[error("cancellation failed with exit code {}: {}", .0.exit_code, .0.summary())]
    Cancellation(CommandOutput),

    /// The job did not reach a terminal state in time; it was cancelled
    #[error("job {job_id} did not reach a terminal state within {waited:?}")]
    Timeout { job_id: JobId, waited: Duration },

    /// The job timed out and the cancellation issued for it failed too
    #[error("job {job_id} timed out after {waited:?} and could not be cancelled")]
    TimeoutCancelFailed {
        job_id: JobId,
        waited: Duration,
        #[source]
        source: Box<ClientError>,
    },

    /// The external program could not be started at all
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The command succeeded but printed nothing usable
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The submission document could not be serialized
    #[error("failed to serialize submission: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The submission file could not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Check if this error is a timeout, escalated or not
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::TimeoutCancelFailed { .. })
    }

    /// Check if the job was left running because cancellation failed
    pub fn is_escalated(&self) -> bool {
        matches!(self, Self::TimeoutCancelFailed { .. })
    }

    /// Captured output of the failed command, if the error came from one
    pub fn output(&self) -> Option<&CommandOutput> {
        match self {
            Self::Submission(output) | Self::Query(output) | Self::Cancellation(output) => {
                Some(output)
            }
            Self::TimeoutCancelFailed { source, .. } => source.output(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    fn output(code: i32) -> CommandOutput {
        CommandOutput {
            exit_code: code,
            stdout: String::new(),
            stderr: "No such job\n".to_string(),
        }
    }

    #[test]
    fn test_display_includes_exit_code_and_output() {
        let err = ClientError::Query(output(2));
        assert_eq!(
            err.to_string(),
            "state query failed with exit code 2: No such job"
        );
    }

    #[test]
    fn test_escalated_timeout_exposes_cancellation_failure() {
        let job_id = JobId::parse("abc").unwrap();
        let err = ClientError::TimeoutCancelFailed {
            job_id,
            waited: Duration::from_secs(6),
            source: Box::new(ClientError::Cancellation(output(1))),
        };

        assert!(err.is_timeout());
        assert!(err.is_escalated());
        assert_eq!(err.output().map(|o| o.exit_code), Some(1));

        let source = err.source().unwrap().to_string();
        assert!(source.starts_with("cancellation failed with exit code 1"));
    }
}
