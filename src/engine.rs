//! The query interface.
//!
//! [`AnswerEngine::answer`] is the single entry point collaborators call. It
//! never fails: every per-query condition becomes a fixed response string.

use std::path::Path;

use crate::config::{EngineConfig, Messages};
use crate::corpus::{Corpus, CorpusLoader, CorpusManifest};
use crate::error::LoadError;
use crate::input::{InputSource, RecognitionError};
use crate::normalize::TextNormalizer;
use crate::selection::{Jaccard, Match, SentenceSelector};
use crate::types::{AnswerExplanation, MatchWhy, Outcome, Query};

/// Structured outcome of one query.
#[derive(Debug, Clone, Copy)]
pub enum Answer<'e> {
    /// Empty or whitespace-only query.
    InvalidInput,
    /// No sentence scored above zero.
    NoMatch,
    Matched(Match<'e>),
}

impl<'e> Answer<'e> {
    pub fn outcome(&self) -> Outcome {
        match self {
            Answer::InvalidInput => Outcome::InvalidInput,
            Answer::NoMatch => Outcome::NoMatch,
            Answer::Matched(_) => Outcome::Matched,
        }
    }

    pub fn into_response(self, messages: &Messages) -> String {
        match self {
            Answer::InvalidInput => messages.invalid_input.clone(),
            Answer::NoMatch => messages.no_match.clone(),
            Answer::Matched(m) => m.sentence.raw().to_string(),
        }
    }
}

/// Immutable answering context: corpus, normalizer, selector, messages.
///
/// Built once at startup and shared by reference. Holds no interior
/// mutability, so it is `Send + Sync`.
#[derive(Debug, Clone)]
pub struct AnswerEngine {
    corpus: Corpus,
    normalizer: TextNormalizer,
    selector: SentenceSelector<Jaccard>,
    messages: Messages,
}

impl AnswerEngine {
    // Private: the corpus must have been normalized by this normalizer.
    fn new(corpus: Corpus, normalizer: TextNormalizer) -> Self {
        Self {
            corpus,
            normalizer,
            selector: SentenceSelector::new(Jaccard),
            messages: Messages::default(),
        }
    }

    pub fn from_text(text: &str, normalizer: TextNormalizer) -> Result<Self, LoadError> {
        let corpus = CorpusLoader::new(&normalizer).load_str(text)?;
        Ok(Self::new(corpus, normalizer))
    }

    pub fn from_path(path: &Path, normalizer: TextNormalizer) -> Result<Self, LoadError> {
        let corpus = CorpusLoader::new(&normalizer).load_path(path)?;
        Ok(Self::new(corpus, normalizer))
    }

    /// Resolve the language profile, load the corpus, apply messages.
    pub fn from_config(config: &EngineConfig) -> Result<Self, LoadError> {
        let path = config.corpus.path.as_deref().ok_or(LoadError::NoCorpusSource)?;
        let normalizer = TextNormalizer::new(config.language.resolve_profile()?);
        Ok(Self::from_path(path, normalizer)?.with_messages(config.messages.clone()))
    }

    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn manifest(&self) -> CorpusManifest {
        self.corpus.manifest()
    }

    pub fn resolve(&self, raw_query: &str) -> Answer<'_> {
        if Query::is_blank(raw_query) {
            tracing::debug!("blank query rejected");
            return Answer::InvalidInput;
        }
        let query = Query::new(raw_query, &self.normalizer);
        self.select(&query)
    }

    /// The response text for `raw_query`.
    pub fn answer(&self, raw_query: &str) -> String {
        self.resolve(raw_query).into_response(&self.messages)
    }

    /// Entry point for the speech collaborator: a transcript is answered like
    /// typed text, a recognition failure is echoed as its fixed message.
    pub fn respond(&self, input: Result<InputSource, RecognitionError>) -> String {
        match input {
            Ok(source) => {
                tracing::debug!(voice = source.is_voice(), "input received");
                self.answer(&source.into_text())
            }
            Err(error) => {
                tracing::info!(%error, "recognition failed");
                self.messages.recognition(error).to_string()
            }
        }
    }

    pub fn explain(&self, raw_query: &str) -> AnswerExplanation {
        let (query_tokens, answer) = if Query::is_blank(raw_query) {
            (Vec::new(), Answer::InvalidInput)
        } else {
            let query = Query::new(raw_query, &self.normalizer);
            let answer = self.select(&query);
            (query.tokens.into_iter().collect(), answer)
        };

        let matched = match &answer {
            Answer::Matched(m) => Some(MatchWhy {
                index: m.sentence.index(),
                score: m.overlap.score,
                intersection: m.overlap.intersection,
                union: m.overlap.union,
                sentence_tokens: m.sentence.tokens().iter().cloned().collect(),
            }),
            _ => None,
        };

        AnswerExplanation {
            query: raw_query.to_string(),
            query_tokens,
            outcome: answer.outcome(),
            matched,
            response: answer.into_response(&self.messages),
        }
    }

    /// [`explain`](Self::explain) for a recognized input of either source.
    pub fn explain_input(&self, input: &InputSource) -> AnswerExplanation {
        tracing::debug!(voice = input.is_voice(), "explaining input");
        self.explain(input.as_text())
    }

    fn select(&self, query: &Query) -> Answer<'_> {
        tracing::trace!(query = %query.raw, tokens = query.tokens.len(), "query normalized");
        match self.selector.select(&query.tokens, &self.corpus) {
            Some(m) => Answer::Matched(m),
            None => Answer::NoMatch,
        }
    }
}
