//! Wordle Simulation - CLI
//!
//! Simulates an automated Wordle solver: scores guesses, accumulates
//! constraints, prunes candidates, and reports how fast games converge.

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use wordle_sim::{
    commands::{BatchConfig, DEFAULT_BATCH_GAMES, run_batch, score_pair, solve_word},
    core::Word,
    engine::play,
    output::{print_batch_result, print_game_result, print_score_result},
    wordlists::{builtin_words, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_sim",
    about = "Automated Wordle solver simulation using constraint-based candidate pruning",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a custom word list (one five-letter word per line)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Seed for reproducible simulations (random when omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate solving a specific secret word
    Solve {
        /// The secret word to solve
        word: String,

        /// Show candidate counts per round
        #[arg(short, long)]
        verbose: bool,
    },

    /// Run a batch of games and report aggregate statistics
    Batch {
        /// Number of games to simulate
        #[arg(short = 'n', long, default_value_t = DEFAULT_BATCH_GAMES)]
        count: usize,
    },

    /// Score a single guess against a secret word
    Score {
        /// The secret word
        secret: String,

        /// The guess to score
        guess: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = match &cli.wordlist {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to read word list {}", path.display()))?,
        None => builtin_words(),
    };
    ensure!(!words.is_empty(), "word list contains no valid words");

    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    match cli.command {
        Some(Commands::Solve { word, verbose }) => {
            let result = solve_word(&word, &words, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
            print_game_result(&result, verbose);
        }
        Some(Commands::Batch { count }) => {
            let config = BatchConfig { games: count, seed };
            let stats = run_batch(&words, &config);
            print_batch_result(&stats);
        }
        Some(Commands::Score { secret, guess }) => {
            let result = score_pair(&secret, &guess).map_err(|e| anyhow::anyhow!(e))?;
            print_score_result(&result);
        }
        None => {
            // Default: draw a random secret and simulate one game
            let secret: Word = words
                .choose(&mut rng)
                .cloned()
                .context("word list is empty")?;
            let result = play(&secret, &words, &mut rng);
            print_game_result(&result, true);
        }
    }

    Ok(())
}
