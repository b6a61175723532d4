//! Job report
//!
//! Summary of a job followed from submission to its terminal state.

use chrono::{DateTime, Utc};
use ferry_core::domain::job::{JobId, JobState};
use serde::Serialize;

/// Outcome of [`crate::JobPoller::run`]
#[derive(Debug, Clone, Serialize)]
pub struct JobReport {
    pub job_id: JobId,
    /// Terminal state the job ended in
    pub state: JobState,
    /// Number of state queries issued, the first one included
    pub queries: usize,
    pub submitted_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl JobReport {
    /// Whether every transfer of the job went through
    pub fn is_success(&self) -> bool {
        self.state == JobState::FINISHED
    }

    pub fn duration(&self) -> chrono::Duration {
        self.completed_at - self.submitted_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(state: &str) -> JobReport {
        let submitted_at = Utc::now();
        JobReport {
            job_id: JobId::parse("abc").unwrap(),
            state: JobState::parse(state).unwrap(),
            queries: 3,
            submitted_at,
            completed_at: submitted_at + chrono::Duration::seconds(42),
        }
    }

    #[test]
    fn test_only_finished_is_success() {
        assert!(report("FINISHED").is_success());
        assert!(!report("FINISHEDDIRTY").is_success());
        assert!(!report("FAILED").is_success());
        assert!(!report("CANCELED").is_success());
    }

    #[test]
    fn test_duration() {
        assert_eq!(report("FINISHED").duration().num_seconds(), 42);
    }

    #[test]
    fn test_serializes_ids_and_states_as_strings() {
        let value = serde_json::to_value(report("FAILED")).unwrap();
        assert_eq!(value["job_id"], "abc");
        assert_eq!(value["state"], "FAILED");
        assert_eq!(value["queries"], 3);
    }
}
