//! Deterministic lexical question answering over a fixed sentence corpus.
//!
//! `answer-core` splits a text into sentences and reduces each sentence to a
//! set of lemmas once, at startup. A query is answered with the raw text of
//! the sentence whose lemma set has the highest Jaccard similarity to the
//! query's. Ties go to the earliest sentence. Identical inputs always
//! produce identical answers.

pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod input;
pub mod logging;
pub mod normalize;
pub mod selection;
pub mod types;

pub use config::{EngineConfig, Messages};
pub use corpus::{Corpus, CorpusLoader, CorpusManifest, Sentence};
pub use engine::{Answer, AnswerEngine};
pub use error::{ConfigError, LoadError};
pub use input::{InputSource, RecognitionError, RecognitionLanguage};
pub use normalize::{LanguageProfile, TextNormalizer};
pub use selection::{Jaccard, Match, SentenceSelector, Similarity};
