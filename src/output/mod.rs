//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_calibration, print_guess_result, print_history, print_levels, print_score_result};
