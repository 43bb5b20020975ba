//! Wordle Simulator - CLI
//!
//! Interactive Wordle-family game and one-shot guess scoring on top of the
//! session core.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_sim::{
    commands::{PlayConfig, run_play, score_pair},
    core::Word,
    output::print_score,
    wordlists::{ALLOWED, ANSWERS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_sim",
    about = "Wordle-family game simulator with duplicate-letter-aware scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Attempt budget per game
    #[arg(short = 'a', long, global = true, default_value = "6")]
    attempts: usize,

    /// Wordlist: 'built-in' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "built-in")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game (default)
    Play {
        /// Fix the solution instead of drawing one at random
        #[arg(short, long)]
        solution: Option<String>,
    },

    /// Score a single guess against a solution
    Score {
        /// The solution word
        solution: String,

        /// The guess to score
        guess: String,
    },
}

/// Load wordlists based on the -w flag
///
/// Returns (`guess_pool`, `answer_candidates`)
/// - "built-in": embedded ALLOWED for guessing, embedded ANSWERS as candidates
/// - "<path>": load a custom wordlist used for both
fn load_wordlists(wordlist_mode: &str) -> Result<(Vec<Word>, Vec<Word>)> {
    use wordle_sim::wordlists::loader::load_from_file;

    match wordlist_mode {
        "built-in" => {
            let all_words = words_from_slice(ALLOWED);
            let answer_words = words_from_slice(ANSWERS);
            Ok((all_words, answer_words))
        }
        path => {
            let custom_words = load_from_file(path)?;
            Ok((custom_words.clone(), custom_words))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    anyhow::ensure!(cli.attempts > 0, "attempts must be at least 1");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { solution: None });

    match command {
        Commands::Play { solution } => {
            let (all_words, answer_words) = load_wordlists(&cli.wordlist)?;
            let config = PlayConfig {
                solution,
                max_attempts: cli.attempts,
            };
            run_play(&config, &all_words, &answer_words).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Score { solution, guess } => {
            let outcome = score_pair(&solution, &guess).map_err(|e| anyhow::anyhow!(e))?;
            print_score(&outcome.solution, &outcome.guess, &outcome.hits);
            Ok(())
        }
    }
}
