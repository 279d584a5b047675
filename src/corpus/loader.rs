use std::fs;
use std::path::Path;

use chrono::Utc;

use crate::corpus::segmenter::{collapse_line_breaks, split_sentences};
use crate::corpus::sentence::Sentence;
use crate::corpus::Corpus;
use crate::error::LoadError;
use crate::normalize::TextNormalizer;
use crate::types::identifiers::CorpusVersion;

/// Builds the corpus once at startup.
///
/// Every sentence is normalized here, so queries never re-normalize corpus text.
pub struct CorpusLoader<'a> {
    normalizer: &'a TextNormalizer,
}

impl<'a> CorpusLoader<'a> {
    pub fn new(normalizer: &'a TextNormalizer) -> Self {
        Self { normalizer }
    }

    pub fn load_path(&self, path: &Path) -> Result<Corpus, LoadError> {
        let text = fs::read_to_string(path).map_err(|source| LoadError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "corpus source read");
        self.load_str(&text)
    }

    pub fn load_str(&self, text: &str) -> Result<Corpus, LoadError> {
        let collapsed = collapse_line_breaks(text);
        if collapsed.trim().is_empty() {
            return Err(LoadError::EmptyCorpus);
        }

        let sentences: Vec<Sentence> = split_sentences(&collapsed, self.normalizer.profile())
            .into_iter()
            .enumerate()
            .map(|(index, raw)| Sentence::new(index, raw, self.normalizer))
            .collect();

        if sentences.is_empty() {
            return Err(LoadError::NoSentences);
        }

        let corpus = Corpus {
            sentences,
            version: CorpusVersion::from_content(collapsed.as_bytes()),
            language: self.normalizer.profile().name().to_string(),
            loaded_at: Utc::now(),
        };

        tracing::info!(
            sentences = corpus.len(),
            version = corpus.version().short(),
            language = corpus.language(),
            "corpus loaded"
        );

        Ok(corpus)
    }
}
