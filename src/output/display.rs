//! Display functions for command results

use super::formatters::{colorize_guess, spaced_symbols};
use crate::commands::{BatchStatistics, ScoreResult};
use crate::engine::{GameResult, MAX_ROUNDS, Outcome};
use colored::Colorize;

/// Print the record of one simulated game
pub fn print_game_result(result: &GameResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, round) in result.rounds.iter().enumerate() {
        println!("\nAttempt {}:", i + 1);
        println!("  {}", colorize_guess(&round.guess, &round.feedback));
        println!("  {}", spaced_symbols(&round.feedback));

        if verbose && !round.feedback.is_win() {
            println!(
                "  Candidates: {} → {}",
                round.pool_before, round.pool_after
            );
        }
    }

    println!();
    match result.outcome {
        Outcome::Solved { round } => {
            println!(
                "{}",
                format!(
                    "✅ Solved in {round} {}!",
                    if round == 1 { "try" } else { "tries" }
                )
                .green()
                .bold()
            );
        }
        Outcome::Exhausted => {
            println!(
                "{}",
                format!(
                    "❌ Failed to guess {} in {MAX_ROUNDS} attempts",
                    result.secret.text().to_uppercase()
                )
                .red()
                .bold()
            );
        }
        Outcome::OutOfCandidates { round } => {
            println!(
                "{}",
                format!("❌ No candidates remaining at attempt {round}")
                    .red()
                    .bold()
            );
        }
    }
}

/// Print the feedback for one scored guess
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "\nSecret: {}",
        result.secret.text().to_uppercase().bright_yellow().bold()
    );
    println!("\n  {}", colorize_guess(&result.guess, &result.feedback));
    println!("  {}", spaced_symbols(&result.feedback));
    println!();
}

/// Print aggregate statistics from a batch run
pub fn print_batch_result(stats: &BatchStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BATCH RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", stats.total_games);
    println!(
        "   Solved:           {} {}",
        stats.solved,
        format!("({:.1}%)", stats.success_rate * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "   Failed:           {} {}",
            stats.failed,
            format!(
                "({:.1}%)",
                stats.failed as f64 / stats.total_games.max(1) as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "   Average attempts: {}",
        format!("{:.2}", stats.average_rounds).bright_yellow().bold()
    );
    println!("   Time taken:       {:.2}s", stats.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", stats.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = stats
        .round_distribution
        .values()
        .copied()
        .max()
        .unwrap_or(1);
    for round in 1..=MAX_ROUNDS {
        let count = stats.round_distribution.get(&round).copied().unwrap_or(0);
        if stats.solved > 0 {
            let percentage = count as f64 / stats.solved as f64 * 100.0;
            let bar_len = if max_count > 0 {
                (count * 40 / max_count).max(usize::from(count > 0))
            } else {
                0
            };
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
            );
            println!("   {round} attempts: {bar} {count:4} ({percentage:5.1}%)");
        }
    }

    if !stats.unsolved.is_empty() {
        println!("\n😰 {}", "Unsolved secrets".yellow().bold());
        for word in &stats.unsolved {
            println!("   {}", word.to_uppercase().yellow());
        }
    }
}
