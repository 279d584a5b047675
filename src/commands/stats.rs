//! Stats command handler.

use anyhow::Result;
use clap::Args;

use answer_core::AnswerEngine;

/// Show corpus statistics
#[derive(Args, Debug)]
pub struct StatsCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl StatsCommand {
    pub fn execute(&self, engine: &AnswerEngine) -> Result<()> {
        let manifest = engine.manifest();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&manifest)?);
            return Ok(());
        }

        let profile = engine.normalizer().profile();
        println!("Corpus version:   {}", manifest.version);
        println!("Language:         {}", manifest.language);
        println!("Sentences:        {}", manifest.sentence_count);
        println!("Vocabulary:       {} lemmas", manifest.vocabulary_size);
        println!("Stopwords:        {}", profile.stopword_count());
        println!("Lemma exceptions: {}", profile.lemma_exception_count());
        println!("Loaded at:        {}", manifest.loaded_at.to_rfc3339());
        Ok(())
    }
}
