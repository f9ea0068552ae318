//! Formatting utilities for terminal output

use crate::core::MAX_ATTEMPTS;

/// Space out a word so the letters and placeholders read clearly
///
/// `"S--FF"` becomes `"S - - F F"`.
#[must_use]
pub fn spaced(word: &str) -> String {
    let mut result = String::with_capacity(word.len() * 2);
    for (i, c) in word.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(c);
    }
    result
}

/// Format the attempts counter line
#[must_use]
pub fn attempts_line(attempts: u8) -> String {
    format!("Attempts Remaining: {attempts}")
}

/// Format the guessed-letters line, letters in submission order
#[must_use]
pub fn guessed_line(letters: &[char]) -> String {
    let mut line = String::from("Guessed:");
    for &letter in letters {
        line.push(' ');
        line.push(letter);
    }
    line
}

/// Render the attempts counter as a meter of filled and spent slots
#[must_use]
pub fn attempts_meter(attempts: u8) -> String {
    let filled = usize::from(attempts.min(MAX_ATTEMPTS));
    let spent = usize::from(MAX_ATTEMPTS) - filled;

    format!("{}{}", "●".repeat(filled), "○".repeat(spent))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_separates_letters() {
        assert_eq!(spaced("S--FF"), "S - - F F");
        assert_eq!(spaced("A"), "A");
        assert_eq!(spaced(""), "");
    }

    #[test]
    fn attempts_line_counts_down() {
        assert_eq!(attempts_line(3), "Attempts Remaining: 3");
        assert_eq!(attempts_line(0), "Attempts Remaining: 0");
    }

    #[test]
    fn guessed_line_lists_in_order() {
        assert_eq!(guessed_line(&['D', 'Z', 'O']), "Guessed: D Z O");
        assert_eq!(guessed_line(&['A']), "Guessed: A");
    }

    #[test]
    fn guessed_line_empty() {
        assert_eq!(guessed_line(&[]), "Guessed:");
    }

    #[test]
    fn attempts_meter_fills_and_drains() {
        assert_eq!(attempts_meter(3), "●●●");
        assert_eq!(attempts_meter(2), "●●○");
        assert_eq!(attempts_meter(0), "○○○");
    }
}
