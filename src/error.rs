// src/error.rs
//! Error taxonomy for the lexicon loader. A failed partition fetch fails the
//! whole load; an empty search result is a normal success and never appears
//! here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexiconError {
    /// Transport-level failure while retrieving one partition file.
    #[error("partition `{partition}`: fetch failed: {source}")]
    PartitionFetch {
        partition: String,
        #[source]
        source: reqwest::Error,
    },

    /// The static file server answered with a non-success status.
    #[error("partition `{partition}`: unexpected HTTP status {status}")]
    PartitionStatus { partition: String, status: u16 },

    /// The partition body was not a valid JSON array of entries.
    #[error("partition `{partition}`: invalid JSON: {source}")]
    PartitionDecode {
        partition: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LexiconError {
    /// Name of the partition the failure belongs to.
    pub fn partition(&self) -> &str {
        match self {
            Self::PartitionFetch { partition, .. }
            | Self::PartitionStatus { partition, .. }
            | Self::PartitionDecode { partition, .. } => partition,
        }
    }
}
