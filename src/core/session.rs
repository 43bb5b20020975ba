//! Game session: the stateful guess evaluator
//!
//! A Session owns one solution, one attempt budget, and one vocabulary. All
//! mutation goes through [`Session::evaluate`], which validates a guess,
//! scores it, and advances the attempt counter and status. Rejections (game
//! over, word not in the vocabulary) are reported through the returned
//! [`Evaluation`], never as errors.

use rustc_hash::FxHashSet;

use super::{GameStatus, GuessValidity, Hits, Word};

/// One game round bound to a single solution
///
/// Created once with its configuration fixed, then driven through
/// `evaluate` until the status turns terminal. A Session is owned and
/// mutated by exactly one caller; it has no internal locking.
#[derive(Debug, Clone)]
pub struct Session {
    solution: Word,
    max_attempts: usize,
    vocabulary: FxHashSet<Word>,
    attempt: usize,
    status: GameStatus,
}

/// The outcome of one `evaluate` call
///
/// A plain value; the Session does not retain it. `hits` always has the
/// session's word length, filled with Incorrect when the guess was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Session status after this call
    pub status: GameStatus,
    /// Whether this call's guess was accepted for scoring
    pub validity: GuessValidity,
    /// Valid attempts consumed so far, including this one if accepted
    pub attempt: usize,
    /// Per-position classification of the guess
    pub hits: Hits,
}

impl Session {
    /// Create a session for one solution
    ///
    /// `valid_guesses` and `valid_answers` together form the vocabulary;
    /// membership is always tested against their union, so they are stored
    /// as one set. Neither needs to contain the solution itself.
    ///
    /// All vocabulary words are expected to match the solution's length;
    /// feeding mixed lengths is a caller error (see `evaluate`).
    ///
    /// # Panics
    /// Panics in debug mode if `max_attempts` is zero.
    #[must_use]
    pub fn new(
        solution: Word,
        max_attempts: usize,
        valid_guesses: &[Word],
        valid_answers: &[Word],
    ) -> Self {
        debug_assert!(max_attempts > 0, "max_attempts must be positive");

        let vocabulary = valid_guesses
            .iter()
            .chain(valid_answers)
            .cloned()
            .collect();

        Self {
            solution,
            max_attempts,
            vocabulary,
            attempt: 0,
            status: GameStatus::Running,
        }
    }

    /// Evaluate one guess and advance the session
    ///
    /// - After the game has ended, every call is an Invalid no-op: the
    ///   counter and status are untouched, so calling repeatedly is safe.
    /// - A word outside the vocabulary is rejected the same way and does
    ///   not consume an attempt. Membership is exact match on the
    ///   normalized word; a length mismatch is simply a non-member.
    /// - An accepted guess consumes one attempt and is scored with the
    ///   duplicate-letter-aware two-pass algorithm ([`Hits::calculate`]).
    /// - Exhausting the budget loses the game unless this same guess is
    ///   fully correct: a correct final guess wins.
    ///
    /// # Examples
    /// ```
    /// use wordle_sim::core::{GameStatus, GuessValidity, Session, Word};
    ///
    /// let answers = vec![Word::new("crane").unwrap(), Word::new("slate").unwrap()];
    /// let mut session = Session::new(Word::new("crane").unwrap(), 6, &[], &answers);
    ///
    /// let result = session.evaluate(&Word::new("slate").unwrap());
    /// assert_eq!(result.validity, GuessValidity::Valid);
    /// assert_eq!(result.attempt, 1);
    /// assert_eq!(result.status, GameStatus::Running);
    ///
    /// let result = session.evaluate(&Word::new("crane").unwrap());
    /// assert_eq!(result.status, GameStatus::Won);
    /// ```
    ///
    /// # Panics
    /// Panics in debug mode if a vocabulary word with a length different
    /// from the solution's reaches scoring. That indicates a malformed
    /// vocabulary, which is a contract violation of the caller.
    pub fn evaluate(&mut self, guess: &Word) -> Evaluation {
        // Game over: the session is frozen
        if self.status.is_terminal() {
            return self.rejection();
        }

        // Word must be in the vocabulary
        if !self.vocabulary.contains(guess) {
            return self.rejection();
        }

        self.attempt += 1;

        let hits = Hits::calculate(guess, &self.solution);

        // Loss by exhaustion first, then the win check: a correct guess on
        // the last attempt overrides the loss
        if self.attempt >= self.max_attempts {
            self.status = GameStatus::Lost;
        }
        if hits.is_all_correct() {
            self.status = GameStatus::Won;
        }

        Evaluation {
            status: self.status,
            validity: GuessValidity::Valid,
            attempt: self.attempt,
            hits,
        }
    }

    /// The Invalid result shared by the freeze and membership rejections
    fn rejection(&self) -> Evaluation {
        Evaluation {
            status: self.status,
            validity: GuessValidity::Invalid,
            attempt: self.attempt,
            hits: Hits::all_incorrect(self.word_length()),
        }
    }

    /// The solution word
    #[inline]
    #[must_use]
    pub fn solution(&self) -> &Word {
        &self.solution
    }

    /// Length of the solution, and of every returned hit row
    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.solution.len()
    }

    /// Valid attempts consumed so far
    #[inline]
    #[must_use]
    pub const fn attempt(&self) -> usize {
        self.attempt
    }

    /// The attempt budget
    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Attempts still available
    #[inline]
    #[must_use]
    pub const fn attempts_left(&self) -> usize {
        self.max_attempts - self.attempt
    }

    /// Current status
    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether the session has reached Won or Lost
    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_terminal()
    }
}
