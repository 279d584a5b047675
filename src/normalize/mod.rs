pub mod lemmatizer;
pub mod profile;
pub mod tokenizer;

use std::collections::BTreeSet;

use crate::error::LoadError;
pub use lemmatizer::lemmatize;
pub use profile::LanguageProfile;
pub use tokenizer::split_words;

/// Reduces text to the set of meaning-bearing lemmas.
///
/// Holds only the immutable language profile, so `normalize` is a pure
/// function of its argument and is safe to call from any thread.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    profile: LanguageProfile,
}

impl TextNormalizer {
    pub fn new(profile: LanguageProfile) -> Self {
        Self { profile }
    }

    pub fn english() -> Result<Self, LoadError> {
        Ok(Self::new(LanguageProfile::english()?))
    }

    pub fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    /// Tokenize, lowercase, drop punctuation and stopwords, lemmatize.
    pub fn normalize(&self, text: &str) -> BTreeSet<String> {
        split_words(text)
            .into_iter()
            .map(|word| word.to_lowercase())
            .filter(|word| word.chars().any(char::is_alphanumeric))
            .filter(|word| !self.profile.is_stopword(word))
            .map(|word| lemmatize(&word, &self.profile))
            .collect()
    }
}
