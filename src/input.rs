//! Types at the boundary with the speech-to-text collaborator.
//!
//! The engine never captures audio. The collaborator either hands over a
//! recognized string or reports why it could not.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where a query came from. Both variants resolve to plain text before they
/// reach the query interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Text(String),
    /// A transcript produced by speech recognition.
    Voice(String),
}

impl InputSource {
    pub fn into_text(self) -> String {
        match self {
            InputSource::Text(text) | InputSource::Voice(text) => text,
        }
    }

    pub fn as_text(&self) -> &str {
        match self {
            InputSource::Text(text) | InputSource::Voice(text) => text,
        }
    }

    pub fn is_voice(&self) -> bool {
        matches!(self, InputSource::Voice(_))
    }
}

/// Why speech recognition produced no transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecognitionError {
    #[error("Speech could not be recognized")]
    Unrecognized,

    #[error("Timed out waiting for speech")]
    Timeout,

    #[error("Speech recognition service unavailable")]
    ServiceUnavailable,
}

/// Language the speech collaborator listens for.
///
/// Independent of the normalization language, which is fixed by the
/// language profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecognitionLanguage {
    French,
    #[default]
    English,
}

impl RecognitionLanguage {
    /// Language tag passed to the recognition service.
    pub fn code(&self) -> &'static str {
        match self {
            RecognitionLanguage::French => "fr",
            RecognitionLanguage::English => "en",
        }
    }

    /// Accepts codes and names in English or French. Anything else is English.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "fr" | "french" | "français" | "francais" => RecognitionLanguage::French,
            _ => RecognitionLanguage::English,
        }
    }
}

impl From<String> for RecognitionLanguage {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<RecognitionLanguage> for String {
    fn from(language: RecognitionLanguage) -> Self {
        language.code().to_string()
    }
}
