// src/lexicon/http.rs
use async_trait::async_trait;

use crate::error::LexiconError;
use crate::lexicon::types::{DictionaryEntry, PartitionSource};

/// Fetches partition files from a static file server, one GET per file:
/// `GET <base_url>/<partition>`.
pub struct HttpPartitionSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpPartitionSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    fn partition_url(&self, partition: &str) -> String {
        format!("{}/{}", self.base_url, partition)
    }
}

#[async_trait]
impl PartitionSource for HttpPartitionSource {
    async fn fetch_partition(&self, partition: &str) -> Result<Vec<DictionaryEntry>, LexiconError> {
        let url = self.partition_url(partition);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LexiconError::PartitionFetch {
                partition: partition.to_string(),
                source: e,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LexiconError::PartitionStatus {
                partition: partition.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| LexiconError::PartitionFetch {
                partition: partition.to_string(),
                source: e,
            })?;

        serde_json::from_slice(&body).map_err(|e| LexiconError::PartitionDecode {
            partition: partition.to_string(),
            source: e,
        })
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
