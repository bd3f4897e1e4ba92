// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod api;
pub mod config;
pub mod error;
pub mod highlight;
pub mod lexicon;
pub mod metrics;

// ---- Re-exports for stable public API ----
pub use crate::api::{create_router, AppState};
pub use crate::config::LexiconConfig;
pub use crate::error::LexiconError;
pub use crate::lexicon::types::{DictionaryEntry, OccurrenceRef, PartitionSource};
pub use crate::lexicon::{Lexicon, LexiconInfo, LexiconState};
