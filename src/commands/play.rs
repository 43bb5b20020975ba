//! Interactive play mode
//!
//! Text-based game loop: the player types guesses, the session scores them.

use crate::core::{Session, Word};
use crate::output::{print_evaluation, print_outcome};
use rand::seq::IndexedRandom;
use std::io::{self, Write};

/// Configuration for an interactive game
pub struct PlayConfig {
    /// Fixed solution word; a random answer is drawn when absent
    pub solution: Option<String>,
    /// Attempt budget
    pub max_attempts: usize,
}

/// Run the interactive play mode
///
/// The vocabulary is restricted to words matching the solution's length, so
/// mixed-length word lists are safe to pass in.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input, if the
/// configured solution word is invalid, or if no answer word is available to
/// draw a solution from.
pub fn run_play(config: &PlayConfig, allowed: &[Word], answers: &[Word]) -> Result<(), String> {
    let solution = match &config.solution {
        Some(text) => Word::new(text).map_err(|e| format!("Invalid solution word: {e}"))?,
        None => answers
            .choose(&mut rand::rng())
            .cloned()
            .ok_or("No answer words available to draw a solution from")?,
    };

    let length = solution.len();
    let guess_words: Vec<Word> = allowed.iter().filter(|w| w.len() == length).cloned().collect();
    let answer_words: Vec<Word> = answers.iter().filter(|w| w.len() == length).cloned().collect();

    let mut session = Session::new(solution, config.max_attempts, &guess_words, &answer_words);

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle Simulator                         ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Guess the {}-letter word in {} attempts.",
        session.word_length(),
        session.max_attempts()
    );
    println!("  🟩 correct position   🟨 wrong position   ⬜ not in the word");
    println!("Commands: 'quit' to exit\n");

    loop {
        let prompt = format!(
            "Guess {}/{}",
            session.attempt() + 1,
            session.max_attempts()
        );
        let input = get_user_input(&prompt)?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!(
                    "\n👋 The word was {}. Thanks for playing!\n",
                    session.solution().text().to_uppercase()
                );
                return Ok(());
            }
            "" => continue,
            _ => {}
        }

        let guess = match Word::new(&input) {
            Ok(word) => word,
            Err(e) => {
                println!("❌ {e}\n");
                continue;
            }
        };

        let result = session.evaluate(&guess);

        // The loop exits on terminal status, so a rejection here can only
        // mean the word is not in the vocabulary
        if !result.validity.is_valid() {
            println!("❌ {} is not in the word list\n", input.to_uppercase());
            continue;
        }

        print_evaluation(&guess, &result, session.max_attempts());

        if session.is_over() {
            print_outcome(&session);
            println!();
            return Ok(());
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
