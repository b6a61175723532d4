//! Job domain types

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Opaque identifier returned by the submit command
///
/// Always non-empty and free of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    /// Parses a job id from raw command output
    ///
    /// Returns `None` when nothing but whitespace is left after trimming.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for JobId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Job state name as reported by the status command
///
/// States are opaque to ferry: whether a state is terminal is decided by the
/// configured [`TerminalStates`], never by the state itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobState(String);

impl JobState {
    pub const SUBMITTED: &'static str = "SUBMITTED";
    pub const READY: &'static str = "READY";
    pub const ACTIVE: &'static str = "ACTIVE";
    pub const STAGING: &'static str = "STAGING";
    pub const FINISHED: &'static str = "FINISHED";
    pub const FINISHED_DIRTY: &'static str = "FINISHEDDIRTY";
    pub const FAILED: &'static str = "FAILED";
    pub const CANCELED: &'static str = "CANCELED";

    /// Parses a state name from raw command output
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for JobState {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for JobState {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Set of state names after which a job no longer changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalStates(BTreeSet<String>);

impl TerminalStates {
    /// Builds a terminal set from state names
    ///
    /// Names are trimmed; blank names are ignored.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            names
                .into_iter()
                .map(|name| name.as_ref().trim().to_string())
                .filter(|name| !name.is_empty())
                .collect(),
        )
    }

    /// Parses a comma separated list such as `FINISHED,FAILED`
    pub fn from_list(list: &str) -> Self {
        Self::new(list.split(','))
    }

    pub fn contains(&self, state: &JobState) -> bool {
        self.0.contains(state.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for TerminalStates {
    fn default() -> Self {
        Self::new([
            JobState::FINISHED,
            JobState::FAILED,
            JobState::FINISHED_DIRTY,
            JobState::CANCELED,
        ])
    }
}

impl fmt::Display for TerminalStates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().collect();
        f.write_str(&names.join(","))
    }
}
