//! Word Guess
//!
//! A single-round word-guessing game: reveal the secret word letter by
//! letter before three wrong guesses lose the round.
//!
//! # Quick Start
//!
//! ```rust
//! use word_guess::core::{GuessResult, GuessSession, Outcome};
//!
//! let mut session = GuessSession::new("cat").unwrap();
//!
//! // A correct guess reveals every occurrence of the letter
//! if let GuessResult::Accepted(state) = session.submit_guess("a") {
//!     assert_eq!(state.masked_word, "-A-");
//!     assert_eq!(state.outcome, Outcome::InProgress);
//! }
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
