//! Word lists for the guessing game
//!
//! Provides the embedded default word list compiled into the binary plus
//! the [`WordSource`] pool that rounds draw their secret words from.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{WORDS, WORDS_COUNT};
pub use source::{FALLBACK_WORDS, WordSource};
