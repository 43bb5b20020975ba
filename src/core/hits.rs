//! Per-letter hit classification and scoring
//!
//! A guess is scored against the solution position by position:
//! - Correct: right letter, right position
//! - Misplaced: right letter, wrong position, within the remaining
//!   duplicate budget
//! - Incorrect: letter not present, or its budget is exhausted
//!
//! The stable single-character encoding is `'c'`/`'m'`/`'_'`; front ends that
//! speak the wire format rely on those exact tags.

use super::Word;

/// Classification of one guessed letter at one position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hit {
    /// Right letter, right position
    Correct,
    /// Right letter, wrong position
    Misplaced,
    /// Letter not in the word (or duplicate budget exhausted)
    Incorrect,
}

impl Hit {
    /// Stable single-character tag: `'c'`, `'m'`, or `'_'`
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Correct => 'c',
            Self::Misplaced => 'm',
            Self::Incorrect => '_',
        }
    }

    /// Parse a hit from its tag character
    #[inline]
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'c' => Some(Self::Correct),
            'm' => Some(Self::Misplaced),
            '_' => Some(Self::Incorrect),
            _ => None,
        }
    }
}

impl std::fmt::Display for Hit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The scored feedback row for one guess
///
/// Always the same length as the solution word it was scored against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hits(Vec<Hit>);

impl Hits {
    /// Score `guess` against `solution` with duplicate-letter handling
    ///
    /// # Algorithm
    /// 1. Build a per-letter remaining-budget table from the solution
    /// 2. First pass: mark exact matches Correct, each consuming one unit
    ///    of its letter's budget
    /// 3. Second pass, left to right: mark Misplaced while budget remains,
    ///    otherwise Incorrect
    ///
    /// Exact matches always consume budget before misplaced matches compete
    /// for what remains, so a letter is never credited more times than it
    /// occurs in the solution.
    ///
    /// # Examples
    /// ```
    /// use wordle_sim::core::{Hit, Hits, Word};
    ///
    /// let solution = Word::new("alloy").unwrap();
    /// let guess = Word::new("llama").unwrap();
    /// let hits = Hits::calculate(&guess, &solution);
    ///
    /// // Only two L's exist in ALLOY: one Correct, one Misplaced.
    /// // The second A in LLAMA finds its budget already spent.
    /// assert_eq!(
    ///     hits.as_slice(),
    ///     &[Hit::Misplaced, Hit::Correct, Hit::Misplaced, Hit::Incorrect, Hit::Incorrect]
    /// );
    /// ```
    ///
    /// # Panics
    /// Panics in debug mode if the words differ in length. Equal lengths are
    /// a caller precondition; the session's membership check upholds it.
    #[must_use]
    pub fn calculate(guess: &Word, solution: &Word) -> Self {
        debug_assert_eq!(
            guess.len(),
            solution.len(),
            "guess and solution must be the same length"
        );

        let length = solution.len();
        let mut result = vec![Hit::Incorrect; length];
        let mut budget = solution.letter_counts();

        // First pass: exact position matches
        // Allow: index needed to access guess[i], solution[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..length {
            if guess.char_at(i) == solution.char_at(i) {
                result[i] = Hit::Correct;

                if let Some(count) = budget.get_mut(&guess.char_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters, left to right, from the remaining budget
        #[allow(clippy::needless_range_loop)]
        for i in 0..length {
            if result[i] != Hit::Correct {
                let letter = guess.char_at(i);
                if let Some(count) = budget.get_mut(&letter)
                    && *count > 0
                {
                    result[i] = Hit::Misplaced;
                    *count -= 1;
                }
            }
        }

        Self(result)
    }

    /// A row of the given length with every position Incorrect
    ///
    /// Returned for rejected guesses so callers always receive a row of the
    /// session's word length.
    #[must_use]
    pub fn all_incorrect(length: usize) -> Self {
        Self(vec![Hit::Incorrect; length])
    }

    /// Check whether every position is Correct (a winning row)
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        self.0.iter().all(|&hit| hit == Hit::Correct)
    }

    /// Number of positions in the row
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the row has no positions
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The row as a slice
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Hit] {
        &self.0
    }

    /// Count the Correct positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&hit| hit == Hit::Correct).count()
    }

    /// Count the Misplaced positions
    #[must_use]
    pub fn count_misplaced(&self) -> usize {
        self.0.iter().filter(|&&hit| hit == Hit::Misplaced).count()
    }

    /// Encode the row as its stable tag string, one character per position
    ///
    /// # Examples
    /// ```
    /// use wordle_sim::core::{Hits, Word};
    ///
    /// let solution = Word::new("crane").unwrap();
    /// let guess = Word::new("slate").unwrap();
    /// assert_eq!(Hits::calculate(&guess, &solution).tags(), "__c_c");
    /// ```
    #[must_use]
    pub fn tags(&self) -> String {
        self.0.iter().map(|hit| hit.as_char()).collect()
    }

    /// Parse a row from a tag string like `"mcm__"`
    ///
    /// Returns `None` if any character is not a valid tag.
    #[must_use]
    pub fn from_tags(s: &str) -> Option<Self> {
        s.chars().map(Hit::from_char).collect::<Option<Vec<_>>>().map(Self)
    }

    /// Render the row as emoji squares, e.g. `"🟨🟩🟨⬜⬜"`
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|hit| match hit {
                Hit::Correct => '🟩',
                Hit::Misplaced => '🟨',
                Hit::Incorrect => '⬜',
            })
            .collect()
    }
}

impl std::fmt::Display for Hits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tags())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn score(guess: &str, solution: &str) -> Hits {
        Hits::calculate(&word(guess), &word(solution))
    }

    #[test]
    fn all_incorrect_when_no_letters_shared() {
        let hits = score("abcde", "fghij");
        assert_eq!(hits.tags(), "_____");
        assert_eq!(hits.count_correct(), 0);
        assert_eq!(hits.count_misplaced(), 0);
    }

    #[test]
    fn all_correct_on_exact_match() {
        let hits = score("crane", "crane");
        assert!(hits.is_all_correct());
        assert_eq!(hits.count_correct(), 5);
    }

    #[test]
    fn classic_crane_vs_slate() {
        // C(incorrect) R(incorrect) A(correct) N(incorrect) E(correct)
        let hits = score("crane", "slate");
        assert_eq!(hits.tags(), "__c_c");
    }

    #[test]
    fn duplicate_letters_correct_takes_priority() {
        // SPEED vs ERASE: both E's are misplaced (ERASE has two E's),
        // S misplaced, P and D incorrect
        let hits = score("speed", "erase");
        assert_eq!(hits.tags(), "m_mm_");
    }

    #[test]
    fn duplicate_letters_budget_exhausted() {
        // ROBOT vs FLOOR: first O misplaced, second O correct, single R misplaced
        let hits = score("robot", "floor");
        assert_eq!(hits.tags(), "mm_c_");
    }

    #[test]
    fn duplicate_letters_left_to_right_tie_break() {
        // ALLOY vs LLAMA: position 1 L is an exact match and consumes one of
        // the two L's; position 0 L takes the last one as Misplaced. The
        // single A goes to the leftmost misplaced A (position 2); the A at
        // position 4 finds the budget spent.
        let hits = score("llama", "alloy");
        assert_eq!(
            hits.as_slice(),
            &[
                Hit::Misplaced,
                Hit::Correct,
                Hit::Misplaced,
                Hit::Incorrect,
                Hit::Incorrect
            ]
        );
    }

    #[test]
    fn hit_conservation_with_duplicates() {
        // Guess has three A's, solution has one: exactly one may be credited
        let hits = score("aaaba", "xaxxx");
        assert_eq!(hits.count_correct(), 1);
        assert_eq!(hits.count_misplaced(), 0);
    }

    #[test]
    fn scoring_is_length_agnostic() {
        let hits = score("oxo", "oox");
        assert_eq!(hits.tags(), "cmm");
    }

    #[test]
    fn all_incorrect_row() {
        let hits = Hits::all_incorrect(5);
        assert_eq!(hits.len(), 5);
        assert_eq!(hits.tags(), "_____");
        assert!(!hits.is_all_correct());
    }

    #[test]
    fn self_score_is_always_perfect() {
        for text in ["crane", "slate", "aaaaa", "ox", "banana"] {
            let w = word(text);
            assert!(Hits::calculate(&w, &w).is_all_correct());
        }
    }

    #[test]
    fn tags_round_trip() {
        let hits = score("llama", "alloy");
        let parsed = Hits::from_tags(&hits.tags()).unwrap();
        assert_eq!(parsed, hits);
    }

    #[test]
    fn from_tags_rejects_unknown_characters() {
        assert!(Hits::from_tags("cmx__").is_none());
        assert!(Hits::from_tags("CM___").is_none());
    }

    #[test]
    fn emoji_rendering() {
        let hits = score("llama", "alloy");
        assert_eq!(hits.to_emoji(), "🟨🟩🟨⬜⬜");
    }

    #[test]
    fn hit_char_round_trip() {
        for hit in [Hit::Correct, Hit::Misplaced, Hit::Incorrect] {
            assert_eq!(Hit::from_char(hit.as_char()), Some(hit));
        }
        assert_eq!(Hit::from_char('x'), None);
    }
}
