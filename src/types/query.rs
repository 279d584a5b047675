use std::collections::BTreeSet;

use crate::normalize::TextNormalizer;

/// A normalized query.
///
/// Built per request and dropped once the response is computed.
#[derive(Debug, Clone)]
pub struct Query {
    pub raw: String,
    pub tokens: BTreeSet<String>,
}

impl Query {
    pub fn new(raw: impl Into<String>, normalizer: &TextNormalizer) -> Self {
        let raw = raw.into();
        let tokens = normalizer.normalize(&raw);
        Self { raw, tokens }
    }

    /// True when the raw text is empty or whitespace only.
    pub fn is_blank(raw: &str) -> bool {
        raw.trim().is_empty()
    }
}
