//! Ask command handler.

use anyhow::Result;
use clap::Args;

use answer_core::{AnswerEngine, InputSource};

/// Answer a single question
#[derive(Args, Debug)]
pub struct AskCommand {
    /// The question to ask
    pub question: String,

    /// Treat the question as a speech transcript
    #[arg(long)]
    pub voice: bool,

    /// Print how the answer was chosen, as JSON
    #[arg(long)]
    pub explain: bool,
}

impl AskCommand {
    pub fn execute(&self, engine: &AnswerEngine) -> Result<()> {
        tracing::debug!("Ask command options: {:?}", self);

        let source = if self.voice {
            InputSource::Voice(self.question.clone())
        } else {
            InputSource::Text(self.question.clone())
        };

        if self.explain {
            let explanation = engine.explain_input(&source);
            println!("{}", serde_json::to_string_pretty(&explanation)?);
            return Ok(());
        }

        println!("{}", engine.respond(Ok(source)));
        Ok(())
    }
}
