// src/lexicon/types.rs
use crate::error::LexiconError;

/// One attestation of a dictionary keyword inside a Quran verse.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct OccurrenceRef {
    pub verse_reference: String, // e.g., "2:177"
    pub arabic_text: String,
    pub english_translation: String,
}

/// One lexical root with its English gloss and verse occurrences,
/// as stored in the partitioned dictionary JSON files.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub keyword_text: String, // Arabic root, e.g., "صبر"
    pub meaning: String,      // English gloss, the sole search key
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub total_occurrences: u64,
    #[serde(default)]
    pub occurrences: Vec<OccurrenceRef>,
}

/// Where partition files come from. The production impl fetches a static
/// file server; tests substitute in-memory sources.
#[async_trait::async_trait]
pub trait PartitionSource: Send + Sync {
    /// Fetch one partition file and decode it as an array of entries.
    async fn fetch_partition(&self, partition: &str) -> Result<Vec<DictionaryEntry>, LexiconError>;

    fn name(&self) -> &'static str;
}
