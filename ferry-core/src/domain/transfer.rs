//! Transfer domain types

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A single file transfer: one logical file, possibly with several replicas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    /// Source replicas, tried according to `selection_strategy`
    pub sources: Vec<String>,
    /// Destination URLs (same storage, possibly different protocols)
    pub destinations: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub checksums: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filesize: Option<u64>,
    /// Free-form metadata attached to the file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_strategy: Option<String>,
}

impl Transfer {
    /// Creates a transfer from one source to one destination
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            sources: vec![source.into()],
            destinations: vec![destination.into()],
            checksums: Vec::new(),
            filesize: None,
            metadata: None,
            selection_strategy: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.sources.push(source.into());
        self
    }

    pub fn with_checksum(mut self, checksum: impl Into<String>) -> Self {
        self.checksums.push(checksum.into());
        self
    }

    pub fn with_filesize(mut self, filesize: u64) -> Self {
        self.filesize = Some(filesize);
        self
    }

    pub fn with_metadata(mut self, metadata: JsonValue) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_selection_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.selection_strategy = Some(strategy.into());
        self
    }
}

/// The set of transfers making up one job
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransferSpec {
    transfers: Vec<Transfer>,
}

impl TransferSpec {
    pub fn new(transfers: Vec<Transfer>) -> Self {
        Self { transfers }
    }

    pub fn push(&mut self, transfer: Transfer) {
        self.transfers.push(transfer);
    }

    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    pub fn len(&self) -> usize {
        self.transfers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transfers.is_empty()
    }
}

impl From<Vec<Transfer>> for TransferSpec {
    fn from(transfers: Vec<Transfer>) -> Self {
        Self::new(transfers)
    }
}

impl FromIterator<Transfer> for TransferSpec {
    fn from_iter<I: IntoIterator<Item = Transfer>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
