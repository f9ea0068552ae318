//! Word list loading utilities
//!
//! Provides functions to build a [`WordSource`] from files or from the
//! embedded constants.

use super::WordSource;
use std::fs;
use std::io;
use std::path::Path;

/// Load a word source from a file, one word per line
///
/// Entries are normalized by [`WordSource::load`], so blank lines and
/// surrounding whitespace are harmless. A readable file with no usable
/// entries yields the built-in fallback words rather than an error.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_guess::wordlists::loader::load_from_file;
///
/// let source = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", source.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordSource> {
    let content = fs::read_to_string(path)?;
    Ok(WordSource::load(content.lines()))
}

/// Build a word source from an embedded string slice
///
/// # Examples
/// ```
/// use word_guess::wordlists::loader::source_from_slice;
/// use word_guess::wordlists::WORDS;
///
/// let source = source_from_slice(WORDS);
/// assert_eq!(source.len(), WORDS.len());
/// ```
#[must_use]
pub fn source_from_slice(slice: &[&str]) -> WordSource {
    WordSource::load(slice.iter().copied())
}
