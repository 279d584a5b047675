pub mod similarity;

use std::collections::BTreeSet;

use crate::corpus::{Corpus, Sentence};
pub use similarity::{Jaccard, Overlap, Similarity};

/// The winning sentence and how it scored.
#[derive(Debug, Clone, Copy)]
pub struct Match<'c> {
    pub sentence: &'c Sentence,
    pub overlap: Overlap,
}

/// Picks the single corpus sentence most similar to a query.
///
/// A full linear scan, O(n·k) for n sentences of k tokens on average. There
/// is no index; the engine targets small, fixed corpora.
#[derive(Debug, Default, Clone, Copy)]
pub struct SentenceSelector<S = Jaccard> {
    similarity: S,
}

impl<S: Similarity> SentenceSelector<S> {
    pub fn new(similarity: S) -> Self {
        Self { similarity }
    }

    /// Best-scoring sentence, or `None` when nothing scores above zero.
    ///
    /// A candidate replaces the running best only on a strictly greater
    /// score, so ties go to the earliest sentence.
    pub fn select<'c>(&self, query_tokens: &BTreeSet<String>, corpus: &'c Corpus) -> Option<Match<'c>> {
        let mut best_score = 0.0;
        let mut best: Option<Match<'c>> = None;

        for sentence in corpus {
            let Some(overlap) = self.similarity.score(query_tokens, sentence.tokens()) else {
                tracing::trace!(index = sentence.index(), "skipped: empty union");
                continue;
            };
            tracing::trace!(index = sentence.index(), score = overlap.score, "scored");

            if overlap.score > best_score {
                best_score = overlap.score;
                best = Some(Match { sentence, overlap });
            }
        }

        match &best {
            Some(m) => tracing::debug!(
                index = m.sentence.index(),
                score = m.overlap.score,
                considered = corpus.len(),
                "sentence selected"
            ),
            None => tracing::debug!(considered = corpus.len(), "no sentence above zero similarity"),
        }

        best
    }
}
