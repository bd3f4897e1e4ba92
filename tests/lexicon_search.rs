// tests/lexicon_search.rs
//
// Search contract: lazy load on first use, case-insensitive unanchored
// matching, order preservation, and the empty-result / empty-query cases.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use quran_lexicon::{DictionaryEntry, Lexicon, LexiconError, OccurrenceRef, PartitionSource};

fn entry(keyword: &str, meaning: &str) -> DictionaryEntry {
    DictionaryEntry {
        keyword_text: keyword.to_string(),
        meaning: meaning.to_string(),
        description: String::new(),
        total_occurrences: 1,
        occurrences: vec![OccurrenceRef {
            verse_reference: "2:177".to_string(),
            arabic_text: "...".to_string(),
            english_translation: "...".to_string(),
        }],
    }
}

struct MapSource {
    partitions: HashMap<String, Vec<DictionaryEntry>>,
    fetches: AtomicUsize,
}

impl MapSource {
    fn new(parts: Vec<(&str, Vec<DictionaryEntry>)>) -> Self {
        Self {
            partitions: parts
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            fetches: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl PartitionSource for MapSource {
    async fn fetch_partition(&self, partition: &str) -> Result<Vec<DictionaryEntry>, LexiconError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.partitions
            .get(partition)
            .cloned()
            .ok_or_else(|| LexiconError::PartitionStatus {
                partition: partition.to_string(),
                status: 404,
            })
    }

    fn name(&self) -> &'static str {
        "map"
    }
}

fn sample_lexicon() -> (Arc<MapSource>, Lexicon) {
    let source = Arc::new(MapSource::new(vec![
        ("letter_b_ب.json", vec![entry("بر", "righteousness")]),
        ("letter_s_ص.json", vec![entry("صبر", "patience")]),
        (
            "letter_r_ر.json",
            vec![entry("رحمة", "Mercy and compassion"), entry("رزق", "provision")],
        ),
    ]));
    let lexicon = Lexicon::new(
        Arc::clone(&source) as Arc<dyn PartitionSource>,
        vec![
            "letter_b_ب.json".to_string(),
            "letter_s_ص.json".to_string(),
            "letter_r_ر.json".to_string(),
        ],
    );
    (source, lexicon)
}

#[tokio::test]
async fn search_pati_returns_exactly_the_patience_entry() {
    let (_source, lexicon) = sample_lexicon();
    let matches = lexicon.search("pati").await.unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].keyword_text, "صبر");
    assert_eq!(matches[0].meaning, "patience");
}

#[tokio::test]
async fn search_is_lazy_and_loads_only_once() {
    let (source, lexicon) = sample_lexicon();
    assert_eq!(source.fetches.load(Ordering::SeqCst), 0);

    lexicon.search("pati").await.unwrap();
    assert_eq!(source.fetches.load(Ordering::SeqCst), 3);

    lexicon.search("mercy").await.unwrap();
    assert_eq!(
        source.fetches.load(Ordering::SeqCst),
        3,
        "second search must reuse the cache"
    );
}

#[tokio::test]
async fn no_match_is_an_empty_success_not_an_error() {
    let (_source, lexicon) = sample_lexicon();
    let matches = lexicon.search("xyz-nomatch").await.unwrap();
    assert!(matches.is_empty());
}

#[tokio::test]
async fn matching_ignores_case_both_sides() {
    let (_source, lexicon) = sample_lexicon();
    let matches = lexicon.search("MERCY").await.unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].meaning, "Mercy and compassion");
}

#[tokio::test]
async fn results_keep_collection_order() {
    let (_source, lexicon) = sample_lexicon();
    // "r" appears in righteousness, Mercy..., and provision.
    let matches = lexicon.search("r").await.unwrap();
    let keys: Vec<_> = matches.iter().map(|e| e.keyword_text.as_str()).collect();
    assert_eq!(keys, vec!["بر", "رحمة", "رزق"]);
}

#[tokio::test]
async fn empty_query_matches_the_full_collection() {
    // Documented decision: plain substring semantics, "" is everywhere.
    // The HTTP layer rejects blank queries before they get here.
    let (_source, lexicon) = sample_lexicon();
    let matches = lexicon.search("").await.unwrap();
    assert_eq!(matches.len(), 4);
}

#[tokio::test]
async fn occurrences_ride_along_with_matches() {
    let (_source, lexicon) = sample_lexicon();
    let matches = lexicon.search("patience").await.unwrap();
    assert_eq!(matches[0].occurrences.len(), 1);
    assert_eq!(matches[0].occurrences[0].verse_reference, "2:177");
}
