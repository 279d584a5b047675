//! Command handlers for the answer-core CLI.

pub mod ask;
pub mod chat;
pub mod stats;

pub use ask::AskCommand;
pub use chat::ChatCommand;
pub use stats::StatsCommand;
