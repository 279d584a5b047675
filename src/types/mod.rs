pub mod explanation;
pub mod identifiers;
pub mod query;

pub use explanation::{AnswerExplanation, MatchWhy, Outcome};
pub use identifiers::CorpusVersion;
pub use query::Query;
