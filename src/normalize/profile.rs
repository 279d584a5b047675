use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::Path;

use crate::error::LoadError;

pub const STOPWORDS_FILE: &str = "stopwords.txt";
pub const LEMMA_EXCEPTIONS_FILE: &str = "lemma_exceptions.txt";

const ENGLISH_STOPWORDS: &str = include_str!("../../resources/english/stopwords.txt");
const ENGLISH_LEMMA_EXCEPTIONS: &str = include_str!("../../resources/english/lemma_exceptions.txt");

/// Stopwords and irregular lemma forms for the single normalization language.
///
/// Resolved and validated once at startup. Nothing is fetched lazily.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    name: String,
    stopwords: HashSet<String>,
    lemma_exceptions: HashMap<String, String>,
}

impl LanguageProfile {
    /// Build a profile from in-memory resources. All entries are lowercased.
    pub fn new<W, F, L>(
        name: impl Into<String>,
        stopwords: impl IntoIterator<Item = W>,
        lemma_exceptions: impl IntoIterator<Item = (F, L)>,
    ) -> Self
    where
        W: Into<String>,
        F: Into<String>,
        L: Into<String>,
    {
        Self {
            name: name.into(),
            stopwords: stopwords
                .into_iter()
                .map(|w| w.into().to_lowercase())
                .collect(),
            lemma_exceptions: lemma_exceptions
                .into_iter()
                .map(|(form, lemma)| (form.into().to_lowercase(), lemma.into().to_lowercase()))
                .collect(),
        }
    }

    /// The built-in English profile.
    pub fn english() -> Result<Self, LoadError> {
        Self::parse("english", ENGLISH_STOPWORDS, ENGLISH_LEMMA_EXCEPTIONS)
    }

    /// Resolve a built-in profile by name. Only English ships with the crate.
    pub fn named(name: &str) -> Result<Self, LoadError> {
        match name.trim().to_lowercase().as_str() {
            "english" | "en" => Self::english(),
            _ => Err(LoadError::UnknownLanguage(name.to_string())),
        }
    }

    /// Load `stopwords.txt` and `lemma_exceptions.txt` from `dir`.
    pub fn from_dir(name: &str, dir: &Path) -> Result<Self, LoadError> {
        let stopwords = read_resource(&dir.join(STOPWORDS_FILE))?;
        let exceptions = read_resource(&dir.join(LEMMA_EXCEPTIONS_FILE))?;
        Self::parse(name, &stopwords, &exceptions)
    }

    fn parse(name: &str, stopwords_src: &str, exceptions_src: &str) -> Result<Self, LoadError> {
        let stopwords: HashSet<String> = resource_lines(stopwords_src)
            .map(|(_, line)| line.to_lowercase())
            .collect();
        if stopwords.is_empty() {
            return Err(LoadError::EmptyResource(format!("{name}/{STOPWORDS_FILE}")));
        }

        let mut lemma_exceptions = HashMap::new();
        for (line_no, line) in resource_lines(exceptions_src) {
            let mut fields = line.split_whitespace();
            match (fields.next(), fields.next(), fields.next()) {
                (Some(form), Some(lemma), None) => {
                    lemma_exceptions.insert(form.to_lowercase(), lemma.to_lowercase());
                }
                _ => {
                    return Err(LoadError::MalformedResource {
                        file: format!("{name}/{LEMMA_EXCEPTIONS_FILE}"),
                        line: line_no,
                    })
                }
            }
        }
        if lemma_exceptions.is_empty() {
            return Err(LoadError::EmptyResource(format!("{name}/{LEMMA_EXCEPTIONS_FILE}")));
        }

        tracing::debug!(
            language = name,
            stopwords = stopwords.len(),
            lemma_exceptions = lemma_exceptions.len(),
            "language profile loaded"
        );

        Ok(Self {
            name: name.to_string(),
            stopwords,
            lemma_exceptions,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `word` must already be lowercase.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn lemma_exception(&self, word: &str) -> Option<&str> {
        self.lemma_exceptions.get(word).map(String::as_str)
    }

    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }

    pub fn lemma_exception_count(&self) -> usize {
        self.lemma_exceptions.len()
    }
}

fn read_resource(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::MissingResource(path.to_path_buf()),
        _ => LoadError::UnreadableResource {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Non-empty, non-comment lines with their 1-based line numbers.
fn resource_lines(src: &str) -> impl Iterator<Item = (usize, &str)> {
    src.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}
