//! Guessed-letter tracking
//!
//! A round's guesses form a set over the alphabet `A-Z`. Membership lives in
//! a 26-bit mask; the order letters were submitted in is kept separately for
//! display.

/// Set of letters submitted during a round
///
/// Grows monotonically while a round is in progress and is cleared only when
/// a new round starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessedLetters {
    mask: u32,
    order: Vec<char>,
}

impl GuessedLetters {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mask bit for an uppercase ASCII letter, `None` for anything else
    fn bit(letter: char) -> Option<u32> {
        letter
            .is_ascii_uppercase()
            .then(|| 1 << (letter as u32 - 'A' as u32))
    }

    /// Check whether a letter has been guessed
    ///
    /// Characters outside `A-Z` are never members.
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        Self::bit(letter).is_some_and(|bit| self.mask & bit != 0)
    }

    /// Record a letter
    ///
    /// Returns `false`, changing nothing, when the letter is already present
    /// or is not in `A-Z`.
    pub fn insert(&mut self, letter: char) -> bool {
        let Some(bit) = Self::bit(letter) else {
            return false;
        };
        if self.mask & bit != 0 {
            return false;
        }
        self.mask |= bit;
        self.order.push(letter);
        true
    }

    /// Guessed letters in the order they were submitted
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[char] {
        &self.order
    }

    /// Number of distinct letters guessed so far
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Forget every guess (round start)
    pub fn clear(&mut self) {
        self.mask = 0;
        self.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_set_is_empty() {
        let guessed = GuessedLetters::new();
        assert!(guessed.is_empty());
        assert_eq!(guessed.len(), 0);
        assert_eq!(guessed.as_slice(), &[] as &[char]);
    }

    #[test]
    fn insert_records_membership() {
        let mut guessed = GuessedLetters::new();
        assert!(guessed.insert('A'));
        assert!(guessed.insert('Z'));

        assert!(guessed.contains('A'));
        assert!(guessed.contains('Z'));
        assert!(!guessed.contains('B'));
        assert_eq!(guessed.len(), 2);
    }

    #[test]
    fn insert_rejects_duplicates() {
        let mut guessed = GuessedLetters::new();
        assert!(guessed.insert('Q'));
        assert!(!guessed.insert('Q'));
        assert_eq!(guessed.len(), 1);
    }

    #[test]
    fn insert_rejects_non_letters() {
        let mut guessed = GuessedLetters::new();
        assert!(!guessed.insert('1'));
        assert!(!guessed.insert('-'));
        assert!(!guessed.insert(' '));
        assert!(guessed.is_empty());
    }

    #[test]
    fn lowercase_is_not_a_member() {
        // Callers normalize before inserting; the set itself is uppercase only
        let mut guessed = GuessedLetters::new();
        assert!(!guessed.insert('a'));
        guessed.insert('A');
        assert!(!guessed.contains('a'));
        assert!(guessed.contains('A'));
    }

    #[test]
    fn order_matches_submission() {
        let mut guessed = GuessedLetters::new();
        for letter in ['T', 'A', 'C'] {
            guessed.insert(letter);
        }
        assert_eq!(guessed.as_slice(), &['T', 'A', 'C']);
    }

    #[test]
    fn clear_resets_everything() {
        let mut guessed = GuessedLetters::new();
        guessed.insert('A');
        guessed.insert('B');

        guessed.clear();

        assert!(guessed.is_empty());
        assert!(!guessed.contains('A'));
        // Membership works again after clearing
        assert!(guessed.insert('A'));
    }

    #[test]
    fn covers_the_whole_alphabet() {
        let mut guessed = GuessedLetters::new();
        for letter in 'A'..='Z' {
            assert!(guessed.insert(letter));
        }
        assert_eq!(guessed.len(), 26);
        for letter in 'A'..='Z' {
            assert!(guessed.contains(letter));
        }
    }
}
