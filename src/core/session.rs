//! Round state machine
//!
//! A `GuessSession` owns everything one round needs: the secret word, the
//! guessed letters, the attempts counter, and the outcome. It knows nothing
//! about terminals or word lists; callers feed it raw guess text and render
//! the snapshots it hands back.

use super::{GuessedLetters, SecretWord, WordError};
use std::fmt;

/// Wrong guesses allowed before a round is lost
pub const MAX_ATTEMPTS: u8 = 3;

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Still accepting guesses
    InProgress,
    /// Every letter of the secret word has been revealed
    Won,
    /// Attempts ran out before the word was completed
    Lost,
}

/// Why a submitted guess was ignored
///
/// Rejections are ordinary results, not faults. A rejected guess leaves the
/// session exactly as it was and never costs an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The round is already won or lost; start a new round first
    RoundOver,
    /// Input was not exactly one character after trimming
    InvalidLength,
    /// The character is not a letter from A to Z
    InvalidCharacter,
    /// The letter was already guessed this round
    AlreadyGuessed,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::RoundOver => "The round is over",
            Self::InvalidLength => "Enter exactly one character",
            Self::InvalidCharacter => "Enter a letter from A to Z",
            Self::AlreadyGuessed => "You already guessed that letter",
        };
        write!(f, "{reason}")
    }
}

/// Read-only snapshot handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    /// Masked word, or the full secret once the round is lost
    pub masked_word: String,
    /// Wrong guesses still allowed
    pub attempts_remaining: u8,
    /// Guessed letters in the order they were submitted
    pub guessed_letters: Vec<char>,
    /// Current lifecycle state
    pub outcome: Outcome,
}

/// Result of submitting a single guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessResult {
    /// The guess was applied; carries the updated state
    Accepted(DisplayState),
    /// The guess was ignored and nothing changed
    Rejected(Rejection),
}

/// State machine for one round of the guessing game
#[derive(Debug, Clone)]
pub struct GuessSession {
    secret: SecretWord,
    guessed: GuessedLetters,
    attempts_remaining: u8,
    outcome: Outcome,
}

impl GuessSession {
    /// Create a session with its first round ready to play
    ///
    /// # Errors
    /// Returns `WordError::Empty` if the secret word is empty after
    /// trimming.
    pub fn new(secret_word: impl AsRef<str>) -> Result<Self, WordError> {
        Ok(Self {
            secret: SecretWord::new(secret_word)?,
            guessed: GuessedLetters::new(),
            attempts_remaining: MAX_ATTEMPTS,
            outcome: Outcome::InProgress,
        })
    }

    /// Begin a new round with a fresh secret word
    ///
    /// Clears the guessed letters, restores the attempts counter, and sets
    /// the outcome back to in progress. Callable at any time, including mid
    /// round. On error the previous round is left untouched.
    ///
    /// # Errors
    /// Returns `WordError::Empty` if the secret word is empty after
    /// trimming.
    pub fn start_round(&mut self, secret_word: impl AsRef<str>) -> Result<(), WordError> {
        self.secret = SecretWord::new(secret_word)?;
        self.guessed.clear();
        self.attempts_remaining = MAX_ATTEMPTS;
        self.outcome = Outcome::InProgress;
        Ok(())
    }

    /// Submit one guess
    ///
    /// Input is trimmed and uppercased before validation, so `" a "` and
    /// `"A"` are the same guess. Checks run in a fixed order: round over,
    /// length, character class, already guessed. The first failure wins and
    /// the session is left unchanged.
    ///
    /// An accepted wrong guess costs one attempt; a correct guess is free.
    /// The outcome is then re-evaluated, with a completed word winning even
    /// on the last attempt.
    pub fn submit_guess(&mut self, input: &str) -> GuessResult {
        if self.outcome != Outcome::InProgress {
            return GuessResult::Rejected(Rejection::RoundOver);
        }

        let normalized = input.trim().to_uppercase();
        let mut chars = normalized.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(letter), None) => letter,
            _ => return GuessResult::Rejected(Rejection::InvalidLength),
        };

        if !letter.is_ascii_uppercase() {
            return GuessResult::Rejected(Rejection::InvalidCharacter);
        }

        if self.guessed.contains(letter) {
            return GuessResult::Rejected(Rejection::AlreadyGuessed);
        }

        self.guessed.insert(letter);
        if !self.secret.contains(letter) {
            // InProgress guarantees attempts_remaining > 0 here
            self.attempts_remaining -= 1;
        }
        self.evaluate_outcome();

        GuessResult::Accepted(self.display_state())
    }

    /// Re-derive the outcome after an accepted guess, win checked first
    fn evaluate_outcome(&mut self) {
        if self.secret.is_fully_revealed(&self.guessed) {
            self.outcome = Outcome::Won;
        } else if self.attempts_remaining == 0 {
            self.outcome = Outcome::Lost;
        }
    }

    /// Snapshot of everything the presentation layer shows
    ///
    /// Once the round is lost the masked word is replaced by the full
    /// secret.
    #[must_use]
    pub fn display_state(&self) -> DisplayState {
        let masked_word = if self.outcome == Outcome::Lost {
            self.secret.as_str().to_string()
        } else {
            self.secret.masked(&self.guessed)
        };

        DisplayState {
            masked_word,
            attempts_remaining: self.attempts_remaining,
            guessed_letters: self.guessed.as_slice().to_vec(),
            outcome: self.outcome,
        }
    }

    /// The word being guessed
    #[inline]
    #[must_use]
    pub fn secret_word(&self) -> &str {
        self.secret.as_str()
    }

    /// Current lifecycle state
    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Wrong guesses still allowed
    #[inline]
    #[must_use]
    pub const fn attempts_remaining(&self) -> u8 {
        self.attempts_remaining
    }
}
