//! Simple interactive CLI mode
//!
//! Text-based play without the TUI.

use crate::core::{GuessResult, GuessSession, Outcome};
use crate::output::{print_loss, print_round, print_win};
use crate::wordlists::WordSource;
use anyhow::Result;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode
///
/// Guesses are read from `input`, which is stdin in production and a buffer
/// in tests. The loop runs until the player quits or input ends.
///
/// # Errors
///
/// Returns an error if reading a guess or flushing the prompt fails.
pub fn run_simple<R, I>(source: &WordSource, rng: &mut R, input: &mut I) -> Result<()>
where
    R: Rng + ?Sized,
    I: BufRead,
{
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Word Guess - Simple Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the secret word one letter at a time.");
    println!("A wrong letter costs one attempt; run out and the round is lost.\n");
    println!("Commands: 'quit' to exit, 'new' to draw a different word\n");

    let mut session = GuessSession::new(source.pick_random(rng))?;
    print_round(&session.display_state());

    loop {
        let Some(line) = prompt(input, "Guess a letter")? else {
            // End of input counts as quitting
            println!();
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "quit" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" => {
                session.start_round(source.pick_random(rng))?;
                println!("\n🔄 New round started!");
                print_round(&session.display_state());
                continue;
            }
            _ => {}
        }

        match session.submit_guess(&line) {
            GuessResult::Accepted(state) => match state.outcome {
                Outcome::InProgress => print_round(&state),
                Outcome::Won | Outcome::Lost => {
                    if state.outcome == Outcome::Won {
                        print_win(&state);
                    } else {
                        print_loss(&state);
                    }

                    if !play_again(input)? {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }

                    session.start_round(source.pick_random(rng))?;
                    println!("\n🔄 New round started!");
                    print_round(&session.display_state());
                }
            },
            GuessResult::Rejected(reason) => println!("❌ {reason}"),
        }
    }
}

/// Prompt for one line of input, `None` once input is exhausted
fn prompt<I: BufRead>(input: &mut I, text: &str) -> io::Result<Option<String>> {
    print!("{text}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn play_again<I: BufRead>(input: &mut I) -> io::Result<bool> {
    match prompt(input, "Play again? (yes/no)")? {
        Some(answer) => Ok(matches!(answer.to_lowercase().as_str(), "yes" | "y")),
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn single_word_source(word: &str) -> WordSource {
        WordSource::load([word])
    }

    fn run(word: &str, transcript: &str) -> Result<()> {
        let source = single_word_source(word);
        let mut rng = StdRng::seed_from_u64(0);
        let mut input = Cursor::new(transcript.to_string());
        run_simple(&source, &mut rng, &mut input)
    }

    #[test]
    fn quit_command_ends_the_loop() {
        assert!(run("cat", "quit\n").is_ok());
        assert!(run("cat", "EXIT\n").is_ok());
    }

    #[test]
    fn end_of_input_ends_the_loop() {
        assert!(run("cat", "").is_ok());
        assert!(run("cat", "c\na\n").is_ok());
    }

    #[test]
    fn winning_then_declining_replay_exits() {
        assert!(run("cat", "c\na\nt\nno\n").is_ok());
    }

    #[test]
    fn losing_then_replaying_starts_a_fresh_round() {
        // Three misses lose the round, then the same word is drawn again
        assert!(run("cat", "x\ny\nz\nyes\nc\na\nt\nno\n").is_ok());
    }

    #[test]
    fn rejected_guesses_keep_the_loop_alive() {
        assert!(run("cat", "12\n?\n\nquit\n").is_ok());
    }

    #[test]
    fn new_command_redraws_mid_round() {
        assert!(run("cat", "x\nnew\nc\na\nt\nn\n").is_ok());
    }

    #[test]
    fn single_letter_n_is_a_guess_not_a_command() {
        // The secret contains N, so guessing it must not restart the round
        let source = single_word_source("unity");
        let mut rng = StdRng::seed_from_u64(0);
        let mut input = Cursor::new("n\nu\ni\nt\ny\nno\n".to_string());
        assert!(run_simple(&source, &mut rng, &mut input).is_ok());
    }
}
