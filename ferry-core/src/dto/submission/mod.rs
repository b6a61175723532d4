//! Bulk submission document
//!
//! The submit command reads its transfers from a file in the "new bulk
//! format": a JSON object whose `Files` key holds the list of transfers.

use serde::{Deserialize, Serialize};

use crate::domain::transfer::{Transfer, TransferSpec};

/// Bulk submission document written for `--new-bulk-format -f <file>`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkSubmission {
    #[serde(rename = "Files")]
    pub files: Vec<Transfer>,
}

impl BulkSubmission {
    /// Serializes the document as it is written to disk
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<&TransferSpec> for BulkSubmission {
    fn from(spec: &TransferSpec) -> Self {
        Self {
            files: spec.transfers().to_vec(),
        }
    }
}

impl From<BulkSubmission> for TransferSpec {
    fn from(submission: BulkSubmission) -> Self {
        TransferSpec::new(submission.files)
    }
}

/// Accepted layouts for a transfer list read from a user supplied file
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TransferDocument {
    Bulk(BulkSubmission),
    List(Vec<Transfer>),
}

/// Parses a transfer list that is either a bare JSON array of transfers or
/// a full bulk submission document
pub fn parse_transfers(input: &str) -> serde_json::Result<TransferSpec> {
    let document: TransferDocument = serde_json::from_str(input)?;
    Ok(match document {
        TransferDocument::Bulk(bulk) => bulk.into(),
        TransferDocument::List(files) => TransferSpec::new(files),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bulk_document_layout() {
        let spec = TransferSpec::new(vec![
            Transfer::new("gsiftp://src.example.org/data/f1", "gsiftp://dst.example.org/data/f1")
                .with_checksum("ADLER32:0a1b2c3d")
                .with_filesize(1024)
                .with_metadata(json!({"run": 7})),
            Transfer::new("srm://a.example.org/f2", "srm://b.example.org/f2")
                .with_source("srm://c.example.org/f2")
                .with_selection_strategy("orderly"),
        ]);

        let document = BulkSubmission::from(&spec).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&document).unwrap();

        assert_eq!(
            value,
            json!({
                "Files": [
                    {
                        "sources": ["gsiftp://src.example.org/data/f1"],
                        "destinations": ["gsiftp://dst.example.org/data/f1"],
                        "checksums": ["ADLER32:0a1b2c3d"],
                        "filesize": 1024,
                        "metadata": {"run": 7}
                    },
                    {
                        "sources": ["srm://a.example.org/f2", "srm://c.example.org/f2"],
                        "destinations": ["srm://b.example.org/f2"],
                        "selection_strategy": "orderly"
                    }
                ]
            })
        );
    }

    #[test]
    fn test_parse_bare_list() {
        let spec = parse_transfers(
            r#"[{"sources": ["mock://a/f"], "destinations": ["mock://b/f"]}]"#,
        )
        .unwrap();

        assert_eq!(spec.len(), 1);
        assert_eq!(spec.transfers()[0], Transfer::new("mock://a/f", "mock://b/f"));
    }

    #[test]
    fn test_parse_bulk_document() {
        let spec = parse_transfers(
            r#"{"Files": [
                {"sources": ["mock://a/1"], "destinations": ["mock://b/1"]},
                {"sources": ["mock://a/2"], "destinations": ["mock://b/2"], "filesize": 10}
            ]}"#,
        )
        .unwrap();

        assert_eq!(spec.len(), 2);
        assert_eq!(spec.transfers()[1].filesize, Some(10));
    }

    #[test]
    fn test_parse_rejects_missing_destinations() {
        assert!(parse_transfers(r#"[{"sources": ["mock://a/f"]}]"#).is_err());
        assert!(parse_transfers("not json").is_err());
    }
}
