//! Batch simulation command
//!
//! Runs many independent games against randomly drawn secrets and
//! aggregates the results. Games share only the read-only word list, so
//! they fan out across threads; each game derives its own seed from the
//! batch seed and game index, keeping the whole run reproducible.

use crate::core::Word;
use crate::engine::{GameResult, play};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Default number of games per batch run.
pub const DEFAULT_BATCH_GAMES: usize = 50;

/// Configuration for a batch run
pub struct BatchConfig {
    pub games: usize,
    pub seed: u64,
}

/// Aggregate statistics from a batch run
pub struct BatchStatistics {
    pub total_games: usize,
    pub solved: usize,
    pub failed: usize,
    pub success_rate: f64,
    /// Mean rounds over solved games only
    pub average_rounds: f64,
    /// Winning round -> number of games solved in that round
    pub round_distribution: HashMap<usize, usize>,
    /// Secrets of the games that did not solve
    pub unsolved: Vec<String>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Derive an independent seed for one game of the batch
///
/// Golden-ratio increment keeps neighboring game seeds decorrelated.
const fn game_seed(base: u64, index: usize) -> u64 {
    base.wrapping_add((index as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Run a batch of simulated games
///
/// Secrets are drawn (with replacement) from the word list using the batch
/// seed; each game then plays with its own derived generator. The word list
/// is borrowed read-only by every game.
#[must_use]
pub fn run_batch(words: &[Word], config: &BatchConfig) -> BatchStatistics {
    let start = Instant::now();

    let mut secret_rng = ChaCha8Rng::seed_from_u64(config.seed);
    let secrets: Vec<Word> = (0..config.games)
        .filter_map(|_| words.choose(&mut secret_rng).cloned())
        .collect();

    let pb = ProgressBar::new(secrets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let results: Vec<GameResult> = secrets
        .par_iter()
        .enumerate()
        .map(|(index, secret)| {
            let mut rng = ChaCha8Rng::seed_from_u64(game_seed(config.seed, index));
            let result = play(secret, words, &mut rng);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_and_clear();

    let duration = start.elapsed();
    aggregate(&results, duration)
}

fn aggregate(results: &[GameResult], duration: Duration) -> BatchStatistics {
    let total_games = results.len();
    let solved = results.iter().filter(|r| r.outcome.is_solved()).count();
    let failed = total_games - solved;

    let mut round_distribution: HashMap<usize, usize> = HashMap::new();
    let mut total_rounds = 0;
    let mut unsolved = Vec::new();

    for result in results {
        if let Some(round) = result.outcome.solved_round() {
            *round_distribution.entry(round).or_insert(0) += 1;
            total_rounds += round;
        } else {
            unsolved.push(result.secret.text().to_string());
        }
    }

    let average_rounds = if solved > 0 {
        total_rounds as f64 / solved as f64
    } else {
        0.0
    };

    let success_rate = if total_games > 0 {
        solved as f64 / total_games as f64
    } else {
        0.0
    };

    BatchStatistics {
        total_games,
        solved,
        failed,
        success_rate,
        average_rounds,
        round_distribution,
        unsolved,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MAX_ROUNDS;
    use crate::wordlists::builtin_words;

    #[test]
    fn batch_runs_requested_games() {
        let words = builtin_words();
        let config = BatchConfig { games: 10, seed: 42 };

        let stats = run_batch(&words, &config);

        assert_eq!(stats.total_games, 10);
        assert_eq!(stats.solved + stats.failed, stats.total_games);
    }

    #[test]
    fn batch_distribution_sums_to_solved() {
        let words = builtin_words();
        let config = BatchConfig { games: 10, seed: 42 };

        let stats = run_batch(&words, &config);

        let distribution_sum: usize = stats.round_distribution.values().sum();
        assert_eq!(distribution_sum, stats.solved);
        assert_eq!(stats.unsolved.len(), stats.failed);
    }

    #[test]
    fn batch_metrics_are_consistent() {
        let words = builtin_words();
        let config = BatchConfig { games: 10, seed: 7 };

        let stats = run_batch(&words, &config);

        assert!((0.0..=1.0).contains(&stats.success_rate));
        if stats.solved > 0 {
            assert!(stats.average_rounds >= 1.0);
            assert!(stats.average_rounds <= MAX_ROUNDS as f64);
        }
        for &round in stats.round_distribution.keys() {
            assert!((1..=MAX_ROUNDS).contains(&round));
        }
    }

    #[test]
    fn batch_is_reproducible_with_a_seed() {
        let words = builtin_words();
        let config = BatchConfig { games: 8, seed: 99 };

        let stats1 = run_batch(&words, &config);
        let stats2 = run_batch(&words, &config);

        assert_eq!(stats1.solved, stats2.solved);
        assert_eq!(stats1.unsolved, stats2.unsolved);
        assert!((stats1.average_rounds - stats2.average_rounds).abs() < f64::EPSILON);
    }

    #[test]
    fn batch_empty_word_list() {
        let words: Vec<Word> = vec![];
        let config = BatchConfig { games: 5, seed: 1 };

        let stats = run_batch(&words, &config);

        assert_eq!(stats.total_games, 0);
        assert_eq!(stats.solved, 0);
    }

    #[test]
    fn game_seeds_differ_per_index() {
        let a = game_seed(42, 0);
        let b = game_seed(42, 1);
        let c = game_seed(43, 0);
        assert_ne!(a, b);
        assert_ne!(a, c);
    }
}
