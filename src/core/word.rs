//! Secret word representation
//!
//! A `SecretWord` stores the word to guess, normalized to uppercase, and
//! renders the masked view from the set of guessed letters.

use super::GuessedLetters;
use std::fmt;

/// Placeholder shown in place of letters that have not been guessed yet
pub const PLACEHOLDER: char = '-';

/// The word being guessed, held uppercase for the lifetime of a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
}

/// Error type for unusable secret words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    /// Nothing was left after trimming whitespace
    Empty,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Secret word must not be empty"),
        }
    }
}

impl std::error::Error for WordError {}

impl SecretWord {
    /// Create a new `SecretWord` from raw text
    ///
    /// Input is trimmed and uppercased, so the caller's casing does not
    /// matter.
    ///
    /// # Errors
    /// Returns `WordError::Empty` if nothing remains after trimming.
    ///
    /// # Examples
    /// ```
    /// use word_guess::core::SecretWord;
    ///
    /// let word = SecretWord::new("  stuff ").unwrap();
    /// assert_eq!(word.as_str(), "STUFF");
    ///
    /// assert!(SecretWord::new("   ").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_uppercase();
        if text.is_empty() {
            return Err(WordError::Empty);
        }
        Ok(Self { text })
    }

    /// Get the full word as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Check if the word contains a specific character
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.text.chars().any(|c| c == letter)
    }

    /// Render the word with unguessed letters replaced by [`PLACEHOLDER`]
    ///
    /// Every occurrence of a guessed letter is shown at once, so `"PUZZLE"`
    /// with only `Z` guessed renders as `"--ZZ--"`.
    #[must_use]
    pub fn masked(&self, guessed: &GuessedLetters) -> String {
        self.text
            .chars()
            .map(|c| if guessed.contains(c) { c } else { PLACEHOLDER })
            .collect()
    }

    /// Check whether every character of the word has been guessed
    ///
    /// Computed from the word and the guess set directly, never by
    /// inspecting a rendered mask.
    #[must_use]
    pub fn is_fully_revealed(&self, guessed: &GuessedLetters) -> bool {
        self.text.chars().all(|c| guessed.contains(c))
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guessed(letters: &[char]) -> GuessedLetters {
        let mut set = GuessedLetters::new();
        for &letter in letters {
            set.insert(letter);
        }
        set
    }

    #[test]
    fn creation_normalizes_case_and_whitespace() {
        let word = SecretWord::new("  unity\n").unwrap();
        assert_eq!(word.as_str(), "UNITY");

        let word2 = SecretWord::new("Puzzle").unwrap();
        assert_eq!(word2.as_str(), "PUZZLE");
    }

    #[test]
    fn creation_rejects_empty_input() {
        assert!(matches!(SecretWord::new(""), Err(WordError::Empty)));
        assert!(matches!(SecretWord::new("   \t "), Err(WordError::Empty)));
    }

    #[test]
    fn contains_is_exact() {
        let word = SecretWord::new("stuff").unwrap();
        assert!(word.contains('S'));
        assert!(word.contains('F'));
        assert!(!word.contains('s'));
        assert!(!word.contains('X'));
    }

    #[test]
    fn masked_hides_unguessed_letters() {
        let word = SecretWord::new("stuff").unwrap();
        assert_eq!(word.masked(&guessed(&[])), "-----");
        assert_eq!(word.masked(&guessed(&['S', 'F'])), "S--FF");
        assert_eq!(word.masked(&guessed(&['S', 'T', 'U', 'F'])), "STUFF");
    }

    #[test]
    fn masked_reveals_every_occurrence_at_once() {
        let word = SecretWord::new("puzzle").unwrap();
        assert_eq!(word.masked(&guessed(&['Z'])), "--ZZ--");
    }

    #[test]
    fn fully_revealed_tracks_the_guess_set() {
        let word = SecretWord::new("dog").unwrap();
        assert!(!word.is_fully_revealed(&guessed(&['D', 'O'])));
        assert!(word.is_fully_revealed(&guessed(&['G', 'D', 'O'])));
        // Extra guesses do not hurt
        assert!(word.is_fully_revealed(&guessed(&['X', 'D', 'O', 'G'])));
    }

    #[test]
    fn non_letter_characters_are_never_revealed() {
        // A secret containing characters outside A-Z can never be completed
        let word = SecretWord::new("x-ray").unwrap();
        let all = guessed(&('A'..='Z').collect::<Vec<_>>());
        assert_eq!(word.masked(&all), "X-RAY");
        assert!(!word.is_fully_revealed(&all));
    }

    #[test]
    fn display_shows_the_full_word() {
        let word = SecretWord::new("cat").unwrap();
        assert_eq!(format!("{word}"), "CAT");
    }
}
