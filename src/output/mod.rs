//! Terminal output formatting
//!
//! Display utilities for round state and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_loss, print_round, print_win};
