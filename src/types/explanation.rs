use serde::{Deserialize, Serialize};

/// How a query was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Matched,
    NoMatch,
    InvalidInput,
}

/// Diagnostic record of one resolution.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerExplanation {
    pub query: String,
    /// Sorted, since they come from a `BTreeSet`.
    pub query_tokens: Vec<String>,
    pub outcome: Outcome,
    pub matched: Option<MatchWhy>,
    /// Exactly what `answer` returns for the same query.
    pub response: String,
}

/// Explanation for why a sentence was chosen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchWhy {
    pub index: usize,
    pub score: f64,
    pub intersection: usize,
    pub union: usize,
    pub sentence_tokens: Vec<String>,
}
