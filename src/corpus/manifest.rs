use chrono::{DateTime, Utc};

use crate::types::identifiers::CorpusVersion;

// Summary only: nothing here feeds back into selection.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CorpusManifest {
    pub version: CorpusVersion,
    pub language: String,
    pub sentence_count: usize,
    /// Distinct lemmas across all sentences.
    pub vocabulary_size: usize,
    pub loaded_at: DateTime<Utc>, // informational only
}
