//! Interactive TUI mode
//!
//! Terminal user interface built on ratatui and crossterm.

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};
