//! One-shot guess scoring
//!
//! Scores a single guess against a solution without driving a session.

use crate::core::{Hits, Word};

/// Result of scoring one guess against one solution
#[derive(Debug)]
pub struct ScoreOutcome {
    pub solution: Word,
    pub guess: Word,
    pub hits: Hits,
}

/// Score `guess` against `solution`
///
/// # Errors
///
/// Returns an error if either word fails validation or if the two words
/// differ in length.
pub fn score_pair(solution: &str, guess: &str) -> Result<ScoreOutcome, String> {
    let solution = Word::new(solution).map_err(|e| format!("Invalid solution word: {e}"))?;
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess word: {e}"))?;

    if guess.len() != solution.len() {
        return Err(format!(
            "Length mismatch: guess has {} letters, solution has {}",
            guess.len(),
            solution.len()
        ));
    }

    let hits = Hits::calculate(&guess, &solution);

    Ok(ScoreOutcome {
        solution,
        guess,
        hits,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_pair_exact_match() {
        let outcome = score_pair("crane", "CRANE").unwrap();
        assert!(outcome.hits.is_all_correct());
        assert_eq!(outcome.guess.text(), "crane");
        assert_eq!(outcome.solution.text(), "crane");
    }

    #[test]
    fn score_pair_duplicate_letters() {
        let outcome = score_pair("alloy", "llama").unwrap();
        assert_eq!(outcome.hits.tags(), "mcm__");
    }

    #[test]
    fn score_pair_rejects_length_mismatch() {
        let err = score_pair("crane", "cranes").unwrap_err();
        assert!(err.contains("Length mismatch"));
    }

    #[test]
    fn score_pair_rejects_invalid_words() {
        assert!(score_pair("cr4ne", "crane").is_err());
        assert!(score_pair("crane", "cr4ne").is_err());
        assert!(score_pair("", "crane").is_err());
    }
}
