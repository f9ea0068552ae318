//! Word source with normalization and fallback
//!
//! A `WordSource` holds the candidate secret words for a session. Loading
//! never fails: when no usable entries survive normalization the source
//! silently falls back to a small built-in list, so a session can always
//! start.

use rand::Rng;

/// Words used when loading produces nothing usable
pub const FALLBACK_WORDS: &[&str] = &["STUFF", "UNITY", "PUZZLE"];

/// Pool of candidate secret words, normalized to uppercase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSource {
    words: Vec<String>,
}

impl WordSource {
    /// Build a source from raw entries
    ///
    /// Each entry is trimmed and uppercased; entries that are empty after
    /// trimming are dropped. If nothing survives, the source falls back to
    /// [`FALLBACK_WORDS`] and logs a warning.
    ///
    /// # Examples
    /// ```
    /// use word_guess::wordlists::WordSource;
    ///
    /// let source = WordSource::load(["apple", "  tiger ", "   "]);
    /// assert_eq!(source.len(), 2);
    /// assert_eq!(source.words()[0], "APPLE");
    /// ```
    #[must_use]
    pub fn load<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = entries
            .into_iter()
            .filter_map(|entry| {
                let trimmed = entry.as_ref().trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_uppercase())
                }
            })
            .collect();

        if words.is_empty() {
            log::warn!(
                "Word list was empty after normalization, using the {} built-in fallback words",
                FALLBACK_WORDS.len()
            );
            return Self::fallback();
        }

        Self { words }
    }

    /// Build a source holding only [`FALLBACK_WORDS`]
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            words: FALLBACK_WORDS.iter().map(ToString::to_string).collect(),
        }
    }

    /// Pick a secret word uniformly at random
    ///
    /// The source is never empty, so this always returns a word. Passing a
    /// seeded generator makes the choice reproducible.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let index = rng.random_range(0..self.words.len());
        &self.words[index]
    }

    /// All candidate words, in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of candidate words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(source: &WordSource) -> Vec<&str> {
        source.words().iter().map(String::as_str).collect()
    }

    #[test]
    fn load_normalizes_entries() {
        let source = WordSource::load(["  cat ", "Dog", "BIRD\n"]);
        assert_eq!(words(&source), vec!["CAT", "DOG", "BIRD"]);
    }

    #[test]
    fn load_drops_blank_entries() {
        let source = WordSource::load(["cat", "", "   ", "\t", "dog"]);
        assert_eq!(words(&source), vec!["CAT", "DOG"]);
    }

    #[test]
    fn load_preserves_order_and_duplicates() {
        let source = WordSource::load(["cat", "dog", "CAT"]);
        assert_eq!(words(&source), vec!["CAT", "DOG", "CAT"]);
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = WordSource::load(["  Cat ", "dOg"]);
        let twice = WordSource::load(once.words());
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_input_falls_back() {
        let source = WordSource::load(Vec::<String>::new());
        assert_eq!(words(&source), FALLBACK_WORDS);
    }

    #[test]
    fn all_blank_input_falls_back() {
        let source = WordSource::load(["", "  ", "\t\n"]);
        assert_eq!(words(&source), FALLBACK_WORDS);
    }

    #[test]
    fn fallback_words_are_ready_to_play() {
        let source = WordSource::fallback();
        assert_eq!(source.len(), 3);
        for word in source.words() {
            assert!(!word.is_empty());
            assert_eq!(word.to_uppercase(), *word);
        }
    }

    #[test]
    fn source_is_never_empty() {
        assert!(!WordSource::load(["cat"]).is_empty());
        assert!(!WordSource::load(Vec::<String>::new()).is_empty());
        assert!(!WordSource::fallback().is_empty());
    }

    #[test]
    fn pick_random_returns_member_words() {
        let source = WordSource::load(["cat", "dog", "bird"]);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let picked = source.pick_random(&mut rng);
            assert!(source.words().iter().any(|word| word == picked));
        }
    }

    #[test]
    fn pick_random_is_reproducible_with_same_seed() {
        let source = WordSource::load(["cat", "dog", "bird", "lion", "wolf"]);

        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(
                source.pick_random(&mut first),
                source.pick_random(&mut second)
            );
        }
    }

    #[test]
    fn pick_random_reaches_every_word() {
        let source = WordSource::load(["cat", "dog", "bird"]);
        let mut rng = StdRng::seed_from_u64(1);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(source.pick_random(&mut rng).to_string());
        }
        assert_eq!(seen.len(), source.len());
    }

    #[test]
    fn single_word_source_always_picks_it() {
        let source = WordSource::load(["cat"]);
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..5 {
            assert_eq!(source.pick_random(&mut rng), "CAT");
        }
    }
}
