//! DataHunt - CLI
//!
//! Puzzle backend with an interactive word-decryption game, pair scoring,
//! embedding calibration, and a newline-delimited JSON request loop.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use datahunt::{
    commands::{run_calibration, run_play, score_pair, serve},
    config::{EmbeddingConfig, GameConfig},
    levels::LevelService,
    output::{print_calibration, print_score_result},
    similarity::SimilarityTable,
    wordlists::loader::load_from_file,
};
use std::io;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "datahunt",
    about = "Puzzle backend with a semantic word-guessing game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Score a guess must reach to win (0-100)
    #[arg(long, global = true, env = "DATAHUNT_THRESHOLD", default_value_t = 95.0)]
    threshold: f64,

    /// External embedding service URL
    #[arg(long, global = true, env = "DATAHUNT_EMBEDDING_URL")]
    embedding_url: Option<String>,

    /// Bearer credential for the external embedding service
    #[arg(long, global = true, env = "DATAHUNT_EMBEDDING_KEY", hide_env_values = true)]
    embedding_key: Option<String>,

    /// Timeout for one external embedding call, in milliseconds
    #[arg(long, global = true, env = "DATAHUNT_EMBEDDING_TIMEOUT_MS", default_value_t = 5000)]
    embedding_timeout_ms: u64,

    /// Similarity table file (`word related score` per line); built-in table if omitted
    #[arg(short, long, global = true)]
    table: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive word-guessing game (default)
    Play,

    /// Score a pair of words with the ladder and the embeddings
    Score {
        /// Reference word
        reference: String,

        /// Candidate word
        candidate: String,
    },

    /// Compare embedding similarities with the table scores
    Calibrate,

    /// Serve newline-delimited JSON requests on stdin/stdout
    ServeStdio,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            similarity_threshold: self.threshold,
            embedding: EmbeddingConfig {
                endpoint: self.embedding_url.clone(),
                api_key: self.embedding_key.clone(),
                timeout: Duration::from_millis(self.embedding_timeout_ms),
                ..EmbeddingConfig::default()
            },
        }
    }

    fn similarity_table(&self) -> Result<SimilarityTable> {
        match &self.table {
            None => Ok(SimilarityTable::builtin()),
            Some(path) => {
                let entries = load_from_file(path)
                    .with_context(|| format!("failed to load similarity table from {path}"))?;
                info!(path = %path, entries = entries.len(), "loaded similarity table");
                Ok(SimilarityTable::from_entries(entries))
            }
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if !(0.0..=100.0).contains(&cli.threshold) {
        anyhow::bail!("threshold must be between 0 and 100, got {}", cli.threshold);
    }

    let service = LevelService::with_table(&cli.game_config(), cli.similarity_table()?);

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play(&service),
        Commands::Score {
            reference,
            candidate,
        } => {
            let store = service.word_game();
            let result = score_pair(store.scorer(), store.embeddings(), &reference, &candidate);
            print_score_result(&result);
            Ok(())
        }
        Commands::Calibrate => {
            let store = service.word_game();
            let report = run_calibration(store.scorer(), store.embeddings());
            print_calibration(&report);
            Ok(())
        }
        Commands::ServeStdio => {
            let stats = serve(&service, io::stdin().lock(), io::stdout().lock())?;
            info!(handled = stats.handled, malformed = stats.malformed, "input closed");
            Ok(())
        }
    }
}
