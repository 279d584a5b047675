pub mod loader;
pub mod manifest;
pub mod segmenter;
pub mod sentence;

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::types::identifiers::CorpusVersion;
pub use loader::CorpusLoader;
pub use manifest::CorpusManifest;
pub use sentence::Sentence;

// Read-only after load:
// no mutation
// no "add" or "remove" methods
// order is tie-break precedence
#[derive(Debug, Clone)]
pub struct Corpus {
    sentences: Vec<Sentence>,
    version: CorpusVersion,
    language: String,
    loaded_at: DateTime<Utc>,
}

impl Corpus {
    pub fn get(&self, index: usize) -> Option<&Sentence> {
        self.sentences.get(index)
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Always false for a loaded corpus; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sentence> {
        self.sentences.iter()
    }

    pub fn version(&self) -> &CorpusVersion {
        &self.version
    }

    /// Name of the language profile the sentences were normalized with.
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn manifest(&self) -> CorpusManifest {
        let vocabulary: BTreeSet<&str> = self
            .sentences
            .iter()
            .flat_map(|s| s.tokens().iter().map(String::as_str))
            .collect();

        CorpusManifest {
            version: self.version.clone(),
            language: self.language.clone(),
            sentence_count: self.sentences.len(),
            vocabulary_size: vocabulary.len(),
            loaded_at: self.loaded_at,
        }
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Sentence;
    type IntoIter = std::slice::Iter<'a, Sentence>;

    fn into_iter(self) -> Self::IntoIter {
        self.sentences.iter()
    }
}
