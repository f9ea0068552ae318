//! Display functions for round state

use super::formatters::{attempts_line, attempts_meter, guessed_line, spaced};
use crate::core::{DisplayState, MAX_ATTEMPTS};
use colored::Colorize;

/// Print the current round state
pub fn print_round(state: &DisplayState) {
    println!("\n  {}", spaced(&state.masked_word).bright_white().bold());

    let attempts = attempts_line(state.attempts_remaining);
    let attempts = match state.attempts_remaining {
        MAX_ATTEMPTS => attempts.green(),
        2 => attempts.yellow(),
        _ => attempts.red(),
    };
    println!("  {} {}", attempts, attempts_meter(state.attempts_remaining));
    println!("  {}", guessed_line(&state.guessed_letters).bright_black());
}

/// Print the win celebration
pub fn print_win(state: &DisplayState) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        "    🎉  Y O U   W I N !  🎉    ".bright_green().bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());

    let performance = match state.attempts_remaining {
        MAX_ATTEMPTS => ("🏆 Flawless!", "Not a single wrong guess!"),
        2 => ("⭐ Excellent!", "Only one miss."),
        _ => ("✨ Solved!", "That was a close one."),
    };

    println!("\n  {}", performance.0.bright_yellow().bold());
    println!("  {}", performance.1.bright_white());
    println!(
        "\n  The word was {}",
        state.masked_word.bright_cyan().bold()
    );
    println!("  {}", guessed_line(&state.guessed_letters).bright_black());
    println!("\n{}", "═".repeat(60).bright_cyan());
}

/// Print the loss notice, revealing the word
pub fn print_loss(state: &DisplayState) {
    println!("\n{}", "─".repeat(60).red());
    println!(
        "  {}",
        format!("You lose! The word was {}.", state.masked_word)
            .red()
            .bold()
    );
    println!("  {}", guessed_line(&state.guessed_letters).bright_black());
    println!("{}", "─".repeat(60).red());
}
