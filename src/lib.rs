//! Wordle Simulator
//!
//! A Wordle-family game core: one session object owns the solution, the
//! attempt budget, and the vocabulary, and scores successive guesses with
//! duplicate-letter-aware feedback until the game is won or lost.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_sim::core::{GameStatus, Session, Word};
//! use wordle_sim::wordlists::{ALLOWED, ANSWERS, loader::words_from_slice};
//!
//! let allowed = words_from_slice(ALLOWED);
//! let answers = words_from_slice(ANSWERS);
//!
//! let mut session = Session::new(Word::new("crane").unwrap(), 6, &allowed, &answers);
//!
//! let result = session.evaluate(&Word::new("slate").unwrap());
//! assert_eq!(result.status, GameStatus::Running);
//! assert_eq!(result.hits.tags(), "__c_c");
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
