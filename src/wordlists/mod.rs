//! Word lists for the game vocabulary
//!
//! Provides embedded lists compiled into the binary plus a file loader for
//! custom vocabularies.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
