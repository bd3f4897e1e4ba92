// src/lexicon/mod.rs
//! Dictionary loader & meaning filter. Loads the partitioned dictionary files
//! once per process, caches the concatenated collection, and answers
//! case-insensitive substring searches over the `meaning` field.

pub mod http;
pub mod types;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures_util::future::try_join_all;
use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use once_cell::sync::OnceCell;
use tokio::sync::Mutex;

use crate::error::LexiconError;
use crate::lexicon::types::{DictionaryEntry, PartitionSource};

/// One-time metrics registration (so series show up on /metrics).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(
            "lexicon_load_success_total",
            "Successful full loads of the dictionary collection."
        );
        describe_counter!(
            "lexicon_load_errors_total",
            "Failed loads (any partition fetch/decode error fails the batch)."
        );
        describe_counter!("lexicon_search_total", "Meaning searches served.");
        describe_histogram!("lexicon_load_ms", "Full collection load time in milliseconds.");
        describe_gauge!("lexicon_entries", "Entries in the cached collection.");
        describe_gauge!("lexicon_partitions", "Partition files configured.");
    });
}

/// Short anonymized id for a query, for logging without the raw text.
pub(crate) fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

/// Cache lifecycle. `Empty → Loaded` happens once per process on the first
/// successful load; a failed load stays `Empty` so a later search can retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LexiconState {
    Empty,
    Loaded,
}

#[derive(Debug, Clone)]
struct CacheSlot {
    entries: Arc<Vec<DictionaryEntry>>,
    loaded_at: DateTime<Utc>,
}

/// Snapshot of the store for the debug endpoint.
#[derive(Debug, Clone, serde::Serialize)]
pub struct LexiconInfo {
    pub state: LexiconState,
    pub entry_count: usize,
    pub partition_count: usize,
    pub loaded_at: Option<DateTime<Utc>>,
}

/// Load-once store over a `PartitionSource`.
///
/// The async mutex is held across the whole load, which makes concurrent
/// searches single-flight: the first caller fetches, the rest wait on the
/// lock and find the cache populated.
pub struct Lexicon {
    source: Arc<dyn PartitionSource>,
    partitions: Vec<String>,
    cache: Mutex<Option<CacheSlot>>,
}

impl Lexicon {
    pub fn new(source: Arc<dyn PartitionSource>, partitions: Vec<String>) -> Self {
        ensure_metrics_described();
        gauge!("lexicon_partitions").set(partitions.len() as f64);
        Self {
            source,
            partitions,
            cache: Mutex::new(None),
        }
    }

    pub fn partition_count(&self) -> usize {
        self.partitions.len()
    }

    /// Load the full collection, fetching every partition concurrently and
    /// concatenating in partition-list order. Reuses the cache if a previous
    /// load succeeded. Any single failure fails the whole call and leaves
    /// the cache empty.
    pub async fn load(&self) -> Result<Arc<Vec<DictionaryEntry>>, LexiconError> {
        let mut slot = self.cache.lock().await;
        self.load_locked(&mut slot).await
    }

    async fn load_locked(
        &self,
        slot: &mut Option<CacheSlot>,
    ) -> Result<Arc<Vec<DictionaryEntry>>, LexiconError> {
        if let Some(cached) = slot.as_ref() {
            return Ok(Arc::clone(&cached.entries));
        }

        let t0 = std::time::Instant::now();
        let fetches = self
            .partitions
            .iter()
            .map(|p| self.source.fetch_partition(p));

        // First failure rejects the batch; partial results are discarded.
        let batches = match try_join_all(fetches).await {
            Ok(b) => b,
            Err(e) => {
                counter!("lexicon_load_errors_total").increment(1);
                tracing::warn!(
                    target: "lexicon",
                    partition = e.partition(),
                    source = self.source.name(),
                    error = %e,
                    "dictionary load failed"
                );
                return Err(e);
            }
        };

        let mut entries = Vec::with_capacity(batches.iter().map(Vec::len).sum());
        for batch in batches {
            entries.extend(batch);
        }

        let ms = t0.elapsed().as_secs_f64() * 1_000.0;
        histogram!("lexicon_load_ms").record(ms);
        counter!("lexicon_load_success_total").increment(1);
        gauge!("lexicon_entries").set(entries.len() as f64);
        tracing::info!(
            target: "lexicon",
            entries = entries.len(),
            partitions = self.partitions.len(),
            elapsed_ms = ms,
            "dictionary loaded"
        );

        let entries = Arc::new(entries);
        *slot = Some(CacheSlot {
            entries: Arc::clone(&entries),
            loaded_at: Utc::now(),
        });
        Ok(entries)
    }

    /// Case-insensitive substring search over the `meaning` field.
    /// Triggers a load first if the cache is empty. Matching order follows
    /// the collection; an empty result is a normal success. An empty query
    /// matches the whole collection (plain substring semantics); callers
    /// that want a non-empty guard enforce it themselves.
    pub async fn search(&self, query: &str) -> Result<Vec<DictionaryEntry>, LexiconError> {
        let entries = {
            let mut slot = self.cache.lock().await;
            self.load_locked(&mut slot).await?
        };

        counter!("lexicon_search_total").increment(1);
        let matches = filter_by_meaning(&entries, query);
        // Never log raw query text, only the hashed id.
        tracing::debug!(
            target: "lexicon",
            id = %anon_hash(query),
            matches = matches.len(),
            "meaning search"
        );
        Ok(matches)
    }

    /// State snapshot for diagnostics.
    pub async fn info(&self) -> LexiconInfo {
        let slot = self.cache.lock().await;
        match slot.as_ref() {
            Some(c) => LexiconInfo {
                state: LexiconState::Loaded,
                entry_count: c.entries.len(),
                partition_count: self.partitions.len(),
                loaded_at: Some(c.loaded_at),
            },
            None => LexiconInfo {
                state: LexiconState::Empty,
                entry_count: 0,
                partition_count: self.partitions.len(),
                loaded_at: None,
            },
        }
    }
}

/// The filter itself, kept free-standing so it can be tested without a store.
pub fn filter_by_meaning(entries: &[DictionaryEntry], query: &str) -> Vec<DictionaryEntry> {
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|e| e.meaning.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
