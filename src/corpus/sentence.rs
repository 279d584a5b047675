use std::collections::BTreeSet;

use serde::Serialize;

use crate::normalize::TextNormalizer;

/// The atomic unit of the corpus.
///
/// Fields are private: `tokens` is always the normalization of `raw`, and
/// only the loader constructs sentences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    index: usize,
    raw: String,
    tokens: BTreeSet<String>,
}

impl Sentence {
    pub(crate) fn new(index: usize, raw: String, normalizer: &TextNormalizer) -> Self {
        let tokens = normalizer.normalize(&raw);
        Self { index, raw, tokens }
    }

    /// Position in the corpus, starting at 0.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Sentence text as it appeared in the source.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn tokens(&self) -> &BTreeSet<String> {
        &self.tokens
    }
}
