//! Formatting utilities for terminal output

use crate::core::{Hit, Hits, Word};
use colored::Colorize;

/// Format a guess as a row of colored letter tiles
///
/// Correct letters on green, misplaced on yellow, incorrect dimmed.
#[must_use]
pub fn guess_row(guess: &Word, hits: &Hits) -> String {
    guess
        .text()
        .to_uppercase()
        .chars()
        .zip(hits.as_slice())
        .map(|(letter, hit)| {
            let tile = format!(" {letter} ");
            match hit {
                Hit::Correct => tile.black().on_green().to_string(),
                Hit::Misplaced => tile.black().on_yellow().to_string(),
                Hit::Incorrect => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Format the attempt counter, e.g. `"3/6"`
#[must_use]
pub fn attempt_counter(attempt: usize, max_attempts: usize) -> String {
    format!("{attempt}/{max_attempts}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(s: &str) -> String {
        // Strip ANSI escapes so tests are terminal-independent
        let mut out = String::new();
        let mut in_escape = false;
        for ch in s.chars() {
            match ch {
                '\x1b' => in_escape = true,
                'm' if in_escape => in_escape = false,
                _ if in_escape => {}
                _ => out.push(ch),
            }
        }
        out
    }

    #[test]
    fn guess_row_uppercases_letters() {
        let guess = Word::new("llama").unwrap();
        let solution = Word::new("alloy").unwrap();
        let hits = Hits::calculate(&guess, &solution);

        assert_eq!(plain(&guess_row(&guess, &hits)), " L  L  A  M  A ");
    }

    #[test]
    fn guess_row_one_tile_per_letter() {
        let guess = Word::new("ox").unwrap();
        let solution = Word::new("ox").unwrap();
        let hits = Hits::calculate(&guess, &solution);

        assert_eq!(plain(&guess_row(&guess, &hits)), " O  X ");
    }

    #[test]
    fn attempt_counter_format() {
        assert_eq!(attempt_counter(3, 6), "3/6");
        assert_eq!(attempt_counter(0, 1), "0/1");
    }
}
