//! Chat command handler.
//!
//! One question per stdin line, one answer per stdout line. No state is
//! carried between questions.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Args;

use answer_core::AnswerEngine;

/// Answer questions read line by line from stdin
#[derive(Args, Debug)]
pub struct ChatCommand {
    /// Prompt printed before each question
    #[arg(long, default_value = "> ")]
    pub prompt: String,
}

impl ChatCommand {
    pub fn execute(&self, engine: &AnswerEngine) -> Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut answered = 0usize;

        loop {
            write!(stdout, "{}", self.prompt)?;
            stdout.flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }

            let question = line.trim();
            if matches!(question, "quit" | "exit") {
                break;
            }

            writeln!(stdout, "{}", engine.answer(question))?;
            answered += 1;
        }

        tracing::info!(answered, "chat session ended");
        Ok(())
    }
}
