//! answer-core CLI
//!
//! Loads a corpus once and answers questions from it.

mod commands;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use answer_core::{logging, AnswerEngine, EngineConfig};
use commands::{AskCommand, ChatCommand, StatsCommand};

/// Answer questions with the most similar sentence of a text corpus
#[derive(Parser, Debug)]
#[command(name = "answer-core")]
#[command(about = "Answer questions with the most similar sentence of a text corpus", long_about = None)]
#[command(version)]
struct Cli {
    /// Corpus text file
    #[arg(long, global = true, env = "ANSWER_CORPUS")]
    corpus: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, global = true, env = "ANSWER_CONFIG")]
    config: Option<PathBuf>,

    /// Directory with stopwords.txt and lemma_exceptions.txt
    #[arg(long, global = true)]
    language_resources: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Answer a single question
    Ask(AskCommand),

    /// Answer questions read line by line from stdin
    Chat(ChatCommand),

    /// Show corpus statistics
    Stats(StatsCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = EngineConfig::load(cli.config.as_deref())?.with_overrides(
        cli.corpus,
        cli.language_resources,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );

    logging::init_logging(config.logging.level.as_deref(), !config.logging.color)?;

    tracing::debug!(corpus = ?config.corpus.path, language = %config.language.name, "configuration resolved");
    tracing::debug!(
        recognition_language = config.speech.language.code(),
        "speech recognition language (normalization stays fixed)"
    );

    let engine = AnswerEngine::from_config(&config).context("failed to initialize answer engine")?;

    let command_name = match &cli.command {
        Commands::Ask(_) => "ask",
        Commands::Chat(_) => "chat",
        Commands::Stats(_) => "stats",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    let result = match cli.command {
        Commands::Ask(cmd) => cmd.execute(&engine),
        Commands::Chat(cmd) => cmd.execute(&engine),
        Commands::Stats(cmd) => cmd.execute(&engine),
    };

    if let Err(e) = &result {
        tracing::error!("Command failed: {e:#}");
    }

    result
}
