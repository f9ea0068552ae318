//! TUI rendering with ratatui
//!
//! Visualizations for the word-guessing interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{MAX_ATTEMPTS, Outcome};
use crate::output::formatters::{attempts_meter, spaced};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left panel
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORD GUESS - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60), // Word display
            Constraint::Percentage(40), // Guessed letters
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_guessed(f, app, chunks[1]);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let state = app.session.display_state();

    let color = match state.outcome {
        Outcome::Won => Color::Green,
        Outcome::Lost => Color::Red,
        Outcome::InProgress => Color::White,
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            spaced(&state.masked_word),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} letters", state.masked_word.chars().count()),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_guessed(f: &mut Frame, app: &App, area: Rect) {
    let state = app.session.display_state();

    let content = if state.guessed_letters.is_empty() {
        vec![Line::from("No guesses yet")]
    } else {
        let legend = Line::from(vec![
            Span::styled("🟢", Style::default().fg(Color::Green)),
            Span::raw(" = in the word  "),
            Span::styled("🔴", Style::default().fg(Color::Red)),
            Span::raw(" = miss"),
        ]);

        let mut letters = vec![Span::raw("  ")];
        for (i, &letter) in state.guessed_letters.iter().enumerate() {
            if i > 0 {
                letters.push(Span::raw("  "));
            }
            let style = if app.session.secret_word().contains(letter) {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Red)
            };
            letters.push(Span::styled(letter.to_string(), style));
        }

        vec![legend, Line::from(""), Line::from(letters)]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Guessed Letters ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Attempts gauge
            Constraint::Min(5),     // Messages
        ])
        .split(area);

    render_attempts(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let attempts = app.session.attempts_remaining();
    let percent = u16::from(attempts) * 100 / u16::from(MAX_ATTEMPTS);

    let color = match attempts {
        MAX_ATTEMPTS => Color::Green,
        2 => Color::Yellow,
        _ => Color::Red,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts Remaining ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{attempts}/{MAX_ATTEMPTS}"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::RoundOver => match app.session.outcome() {
            Outcome::Won => (
                " 🎉 YOU WIN! | Press 'n' for new round or 'q' to quit ",
                "",
                Color::Green,
            ),
            _ => (
                " 💀 YOU LOSE! | Press 'n' for new round or 'q' to quit ",
                "",
                Color::Red,
            ),
        },
        InputMode::Guessing => (
            " Guess a Letter (Enter to submit) ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let round_text = format!("Round: {}", app.stats.rounds_played + 1);
    let round = Paragraph::new(round_text).alignment(Alignment::Center);
    f.render_widget(round, chunks[0]);

    let stats_text = format!(
        "Won: {}/{} | Win Rate: {:.0}%",
        app.stats.rounds_won,
        app.stats.rounds_played,
        if app.stats.rounds_played > 0 {
            app.stats.rounds_won as f64 / app.stats.rounds_played as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let attempts_text = format!(
        "Attempts: {}",
        attempts_meter(app.session.attempts_remaining())
    );
    let attempts = Paragraph::new(attempts_text).alignment(Alignment::Center);
    f.render_widget(attempts, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::RoundOver => "q: Quit | n: New Round",
        InputMode::Guessing => "Esc: Quit | Ctrl+N: New Round | Enter: Submit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
