//! Word Guess - CLI
//!
//! Single-round word-guessing game with TUI and plain CLI modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use word_guess::{
    commands::run_simple,
    interactive::{App, run_tui},
    wordlists::{WORDS, WordSource, loader},
};

#[derive(Parser)]
#[command(
    name = "word_guess",
    about = "Guess the secret word one letter at a time before your attempts run out",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for the word picker, for reproducible rounds
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (plain text, no TUI)
    Simple,
}

/// Load the word source based on the -w flag
///
/// A word list that cannot be read is reported and replaced by the built-in
/// fallback words, so the game always starts.
fn load_word_source(wordlist_mode: &str) -> WordSource {
    let source = match wordlist_mode {
        "embedded" => loader::source_from_slice(WORDS),
        path => match loader::load_from_file(path) {
            Ok(source) => source,
            Err(err) => {
                log::error!("Failed to read word list from {path}: {err}");
                WordSource::fallback()
            }
        },
    };

    log::debug!(
        "Word source ready with {} candidates ({wordlist_mode})",
        source.len()
    );
    source
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let source = load_word_source(&cli.wordlist);
    let rng = make_rng(cli.seed);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&source, rng),
        Commands::Simple => run_simple_command(&source, rng),
    }
}

fn run_play_command(source: &WordSource, rng: StdRng) -> Result<()> {
    let app = App::new(source, rng)?;
    run_tui(app)
}

fn run_simple_command(source: &WordSource, mut rng: StdRng) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_simple(source, &mut rng, &mut input)
}
