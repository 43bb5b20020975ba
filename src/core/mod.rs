//! Core game types
//!
//! This module contains the fundamental domain types: the validated word,
//! the per-position hit classification with its duplicate-letter-aware
//! scoring, and the session that drives one game to a win or loss.

mod hits;
mod session;
mod status;
mod word;

pub use hits::{Hit, Hits};
pub use session::{Evaluation, Session};
pub use status::{GameStatus, GuessValidity};
pub use word::{Word, WordError};
