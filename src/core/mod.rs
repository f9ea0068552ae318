//! Core domain types for the guessing game
//!
//! This module contains the round state machine and its value types with
//! zero external dependencies. Everything here is pure: no I/O, no
//! randomness, no presentation strings.

mod letters;
mod session;
mod word;

pub use letters::GuessedLetters;
pub use session::{DisplayState, GuessResult, GuessSession, MAX_ATTEMPTS, Outcome, Rejection};
pub use word::{PLACEHOLDER, SecretWord, WordError};
