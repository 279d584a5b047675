//! Error types for engine startup and configuration.
//!
//! Only startup can fail. Per-query conditions (empty input, no match) are
//! outcomes of [`crate::engine::Answer`], never errors.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal initialization error. An engine is never built when one of these
/// is returned.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read corpus {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No corpus source configured")]
    NoCorpusSource,

    #[error("Corpus is empty after whitespace normalization")]
    EmptyCorpus,

    #[error("Corpus yielded no sentences")]
    NoSentences,

    #[error("Language resource not found: {}", .0.display())]
    MissingResource(PathBuf),

    #[error("Failed to read language resource {}: {source}", .path.display())]
    UnreadableResource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Language resource is empty: {0}")]
    EmptyResource(String),

    #[error("Malformed entry in {file} at line {line}")]
    MalformedResource { file: String, line: usize },

    #[error("Unknown language profile: {0}")]
    UnknownLanguage(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),

    #[error("Failed to init logging: {0}")]
    Logging(String),
}
