//! Engine configuration.
//!
//! Sources, lowest precedence first:
//! - built-in defaults
//! - YAML file (`--config`, `ANSWER_CONFIG`, or `./answer-core.yaml`)
//! - environment (`ANSWER_CORPUS`, `RUST_LOG`, `NO_COLOR`)
//! - command-line flags, via [`EngineConfig::with_overrides`]

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, LoadError};
use crate::input::{RecognitionError, RecognitionLanguage};
use crate::normalize::LanguageProfile;

pub const DEFAULT_CONFIG_FILE: &str = "answer-core.yaml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub corpus: CorpusConfig,
    pub language: LanguageConfig,
    pub speech: SpeechConfig,
    pub messages: Messages,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    pub path: Option<PathBuf>,
}

/// Normalization language. Fixed for the life of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    pub name: String,
    /// Directory holding `stopwords.txt` and `lemma_exceptions.txt`. When
    /// unset, the built-in resources for `name` are used.
    pub resources: Option<PathBuf>,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            name: "english".to_string(),
            resources: None,
        }
    }
}

impl LanguageConfig {
    pub fn resolve_profile(&self) -> Result<LanguageProfile, LoadError> {
        match &self.resources {
            Some(dir) => LanguageProfile::from_dir(&self.name, dir),
            None => LanguageProfile::named(&self.name),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    pub language: RecognitionLanguage,
}

/// Fixed response strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub no_match: String,
    pub invalid_input: String,
    pub unrecognized: String,
    pub timeout: String,
    pub service_unavailable: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            no_match: "Sorry, I could not find a relevant answer.".to_string(),
            invalid_input: "Please enter a valid question.".to_string(),
            unrecognized: "Could not understand the audio. Please try again, speaking more clearly."
                .to_string(),
            timeout: "Timed out waiting for speech. Please start speaking right after recording begins."
                .to_string(),
            service_unavailable:
                "Speech service error. Check your internet connection or access to the service."
                    .to_string(),
        }
    }
}

impl Messages {
    pub fn recognition(&self, error: RecognitionError) -> &str {
        match error {
            RecognitionError::Unrecognized => &self.unrecognized,
            RecognitionError::Timeout => &self.timeout,
            RecognitionError::ServiceUnavailable => &self.service_unavailable,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub color: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: None,
            color: true,
        }
    }
}

impl EngineConfig {
    /// Defaults, then the YAML file, then environment variables.
    ///
    /// `explicit` wins over `ANSWER_CONFIG`; a missing default file is not an
    /// error, a missing explicit one is.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os("ANSWER_CONFIG").map(PathBuf::from));

        let mut config = match path {
            Some(path) => Self::from_yaml_file(&path)?,
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_yaml_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };

        if let Some(corpus) = std::env::var_os("ANSWER_CORPUS") {
            config.corpus.path = Some(PathBuf::from(corpus));
        }
        if let Ok(level) = std::env::var("RUST_LOG") {
            config.logging.level = Some(level);
        }
        if std::env::var_os("NO_COLOR").is_some() {
            config.logging.color = false;
        }

        Ok(config)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "config file loaded");
        Ok(config)
    }

    /// Apply command-line flags on top of the loaded configuration.
    pub fn with_overrides(
        mut self,
        corpus: Option<PathBuf>,
        language_resources: Option<PathBuf>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(corpus) = corpus {
            self.corpus.path = Some(corpus);
        }

        if let Some(resources) = language_resources {
            self.language.resources = Some(resources);
        }

        if let Some(level) = log_level {
            self.logging.level = Some(level);
        }

        // Verbose mode implies debug logging unless a level was given
        if verbose && self.logging.level.is_none() {
            self.logging.level = Some("debug".to_string());
        }

        if no_color {
            self.logging.color = false;
        }

        self
    }
}
