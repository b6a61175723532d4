//! Poller configuration
//!
//! Defines everything the poller and its control surface need: where the
//! transfer service lives, how often to poll and for how long, and which
//! states end a job.

use ferry_client::CommandPrograms;
use ferry_core::domain::job::TerminalStates;
use std::time::Duration;

/// Poller configuration
///
/// Passed explicitly to [`crate::JobPoller`] at construction.
#[derive(Debug, Clone)]
pub struct Config {
    /// Transfer service endpoint (e.g., "https://fts.example.org:8446")
    pub endpoint: String,

    /// Label attached to submitted jobs with `--job-metadata`
    pub job_metadata: Option<String>,

    /// Wait between two state queries
    pub poll_interval: Duration,

    /// Total time a job may take to reach a terminal state
    pub timeout: Duration,

    /// States after which polling stops
    pub terminal_states: TerminalStates,

    /// Command-line tools used to reach the service
    pub programs: CommandPrograms,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            job_metadata: None,
            poll_interval: Duration::from_secs(5),
            timeout: Duration::from_secs(300), // 5 minutes
            terminal_states: TerminalStates::default(),
            programs: CommandPrograms::default(),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - FTS3_ENDPOINT (required)
    /// - FERRY_JOB_METADATA (optional)
    /// - POLL_INTERVAL (optional, seconds, default: 5)
    /// - JOB_TIMEOUT (optional, seconds, default: 300)
    /// - TERMINAL_STATES (optional, comma separated, default: FINISHED,FAILED,FINISHEDDIRTY,CANCELED)
    /// - FTS_SUBMIT_CMD / FTS_STATUS_CMD / FTS_CANCEL_CMD (optional)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup("FTS3_ENDPOINT")
            .ok_or_else(|| anyhow::anyhow!("FTS3_ENDPOINT environment variable not set"))?;

        let mut config = Self::new(endpoint);

        config.job_metadata = lookup("FERRY_JOB_METADATA").filter(|label| !label.is_empty());

        if let Some(secs) = lookup("POLL_INTERVAL").and_then(|s| s.parse::<u64>().ok()) {
            config.poll_interval = Duration::from_secs(secs);
        }

        if let Some(secs) = lookup("JOB_TIMEOUT").and_then(|s| s.parse::<u64>().ok()) {
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(list) = lookup("TERMINAL_STATES") {
            config.terminal_states = TerminalStates::from_list(&list);
        }

        if let Some(program) = lookup("FTS_SUBMIT_CMD") {
            config.programs.submit = program;
        }
        if let Some(program) = lookup("FTS_STATUS_CMD") {
            config.programs.status = program;
        }
        if let Some(program) = lookup("FTS_CANCEL_CMD") {
            config.programs.cancel = program;
        }

        Ok(config)
    }

    pub fn with_job_metadata(mut self, label: String) -> Self {
        self.job_metadata = Some(label);
        self
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_terminal_states(mut self, terminal_states: TerminalStates) -> Self {
        self.terminal_states = terminal_states;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.endpoint.is_empty() {
            anyhow::bail!("endpoint cannot be empty");
        }

        if self.poll_interval.is_zero() {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        if self.timeout.is_zero() {
            anyhow::bail!("timeout must be greater than 0");
        }

        if self.terminal_states.is_empty() {
            anyhow::bail!("at least one terminal state is required");
        }

        let programs = [
            &self.programs.submit,
            &self.programs.status,
            &self.programs.cancel,
        ];
        if programs.iter().any(|program| program.is_empty()) {
            anyhow::bail!("command names cannot be empty");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("https://localhost:8446".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> HashMap<String, String> {
        vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.poll_interval, Duration::from_secs(5));
        assert_eq!(config.timeout, Duration::from_secs(300));
        assert_eq!(config.terminal_states, TerminalStates::default());
        assert_eq!(config.programs.status, "fts-transfer-status");
        assert!(config.job_metadata.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        config.endpoint = String::new();
        assert!(config.validate().is_err());
        config.endpoint = "https://fts.example.org:8446".to_string();

        config.poll_interval = Duration::ZERO;
        assert!(config.validate().is_err());
        config.poll_interval = Duration::from_secs(2);

        config.timeout = Duration::ZERO;
        assert!(config.validate().is_err());
        config.timeout = Duration::from_secs(5);

        config.terminal_states = TerminalStates::from_list("");
        assert!(config.validate().is_err());
        config.terminal_states = TerminalStates::default();

        config.programs.cancel = String::new();
        assert!(config.validate().is_err());
        config.programs.cancel = "fts-transfer-cancel".to_string();

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_lookup_requires_endpoint() {
        let vars = env(&[]);
        let err = Config::from_lookup(|key| vars.get(key).cloned()).unwrap_err();
        assert!(err.to_string().contains("FTS3_ENDPOINT"));
    }

    #[test]
    fn test_from_lookup() {
        let vars = env(&[
            ("FTS3_ENDPOINT", "https://fts.example.org:8446"),
            ("FERRY_JOB_METADATA", "nightly"),
            ("POLL_INTERVAL", "2"),
            ("JOB_TIMEOUT", "not-a-number"),
            ("TERMINAL_STATES", "FINISHED,FAILED"),
            ("FTS_STATUS_CMD", "/usr/local/bin/fts-transfer-status"),
        ]);
        let config = Config::from_lookup(|key| vars.get(key).cloned()).unwrap();

        assert_eq!(config.endpoint, "https://fts.example.org:8446");
        assert_eq!(config.job_metadata.as_deref(), Some("nightly"));
        assert_eq!(config.poll_interval, Duration::from_secs(2));
        assert_eq!(config.timeout, Duration::from_secs(300));
        assert_eq!(config.terminal_states, TerminalStates::from_list("FAILED,FINISHED"));
        assert_eq!(config.programs.status, "/usr/local/bin/fts-transfer-status");
        assert_eq!(config.programs.submit, "fts-transfer-submit");
    }

    #[test]
    fn test_builders() {
        let config = Config::default()
            .with_job_metadata("smoke".to_string())
            .with_poll_interval(Duration::from_secs(1))
            .with_timeout(Duration::from_secs(30))
            .with_terminal_states(TerminalStates::from_list("DONE"));

        assert_eq!(config.job_metadata.as_deref(), Some("smoke"));
        assert_eq!(config.poll_interval, Duration::from_secs(1));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.terminal_states.len(), 1);
    }
}
