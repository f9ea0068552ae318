//! TUI application state and logic

use crate::core::{GuessResult, GuessSession, MAX_ATTEMPTS, Outcome, WordError};
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub source: &'a WordSource,
    rng: StdRng,
    pub session: GuessSession,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Typing guesses for the current round
    Guessing,
    /// The round is won or lost; waiting for new-round or quit
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_won: usize,
}

impl<'a> App<'a> {
    /// Create the app with its first round drawn from `source`
    ///
    /// # Errors
    ///
    /// Returns an error if the source hands back an empty secret word,
    /// which a normalized source never does.
    pub fn new(source: &'a WordSource, mut rng: StdRng) -> Result<Self, WordError> {
        let session = GuessSession::new(source.pick_random(&mut rng))?;

        Ok(Self {
            source,
            rng,
            session,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Guess the secret word one letter at a time.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a letter and press Enter to submit.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        })
    }

    /// Submit the input buffer as a guess
    pub fn submit_guess(&mut self) {
        let input = self.input_buffer.clone();
        self.input_buffer.clear();

        match self.session.submit_guess(&input) {
            GuessResult::Accepted(state) => match state.outcome {
                Outcome::InProgress => {
                    if let Some(&letter) = state.guessed_letters.last() {
                        if self.session.secret_word().contains(letter) {
                            self.add_message(
                                &format!("{letter} is in the word!"),
                                MessageStyle::Success,
                            );
                        } else {
                            self.add_message(
                                &format!("No {letter} in the word."),
                                MessageStyle::Error,
                            );
                        }
                    }
                }
                Outcome::Won => {
                    self.stats.rounds_played += 1;
                    self.stats.rounds_won += 1;
                    self.input_mode = InputMode::RoundOver;

                    let celebration = match state.attempts_remaining {
                        MAX_ATTEMPTS => "🏆 FLAWLESS! Not a single miss! 🏆",
                        2 => "🔥 MAGNIFICENT! Only one miss! 🔥",
                        _ => "🎉 SOLVED! That was close! 🎉",
                    };

                    self.add_message(celebration, MessageStyle::Success);
                    self.add_message("Press 'n' for new round or 'q' to quit.", MessageStyle::Info);
                }
                Outcome::Lost => {
                    self.stats.rounds_played += 1;
                    self.input_mode = InputMode::RoundOver;

                    // The lost-round snapshot carries the revealed word
                    self.add_message(
                        &format!("You lose! The word was {}.", state.masked_word),
                        MessageStyle::Error,
                    );
                    self.add_message("Press 'n' for new round or 'q' to quit.", MessageStyle::Info);
                }
            },
            GuessResult::Rejected(reason) => {
                self.add_message(&reason.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Draw a new secret word and reset the round
    pub fn new_round(&mut self) {
        let secret = self.source.pick_random(&mut self.rng);
        if let Err(err) = self.session.start_round(secret) {
            self.add_message(&err.to_string(), MessageStyle::Error);
            return;
        }

        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New round started! Guess a letter.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::RoundOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_round();
                    }
                    _ => {
                        // When the round is over, ignore other keys
                    }
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    // Every letter is a legal guess, so new-round needs a modifier
                    KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.new_round();
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c) => {
                        app.input_buffer.push(c);
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        app.submit_guess();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
