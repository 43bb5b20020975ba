//! Display functions for command results

use super::formatters::{attempt_counter, guess_row};
use crate::core::{Evaluation, GameStatus, Hits, Session, Word};
use colored::Colorize;

/// Print one evaluated guess as a colored row with the attempt counter
pub fn print_evaluation(guess: &Word, result: &Evaluation, max_attempts: usize) {
    println!(
        "  {}  {}  {}",
        attempt_counter(result.attempt, max_attempts).bright_black(),
        guess_row(guess, &result.hits),
        result.hits.to_emoji()
    );
}

/// Print the end-of-game banner
///
/// Reveals the solution on a loss. No-op while the session is running.
pub fn print_outcome(session: &Session) {
    match session.status() {
        GameStatus::Won => {
            let performance = match session.attempt() {
                1 => "Incredible hole-in-one!",
                2 => "Outstanding performance!",
                3 => "Very well played!",
                4 => "Nice work!",
                _ => "Got it!",
            };

            println!();
            println!(
                "{}",
                format!(
                    "🎉 Solved in {} of {} attempts!",
                    session.attempt(),
                    session.max_attempts()
                )
                .green()
                .bold()
            );
            println!("   {performance}");
        }
        GameStatus::Lost => {
            println!();
            println!(
                "{}",
                format!(
                    "❌ Out of attempts! The word was {}",
                    session.solution().text().to_uppercase()
                )
                .red()
                .bold()
            );
        }
        GameStatus::Running => {}
    }
}

/// Print a one-shot scoring result: colored row, emoji row, and stable tags
pub fn print_score(solution: &Word, guess: &Word, hits: &Hits) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Solution: {}",
        solution.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}  {}", guess_row(guess, hits), hits.to_emoji());
    println!("\n  Tags:      {}", hits.tags());
    println!(
        "  Correct:   {}   Misplaced: {}",
        hits.count_correct(),
        hits.count_misplaced()
    );
}
