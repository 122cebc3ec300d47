//! Formatting utilities for terminal output

use colored::{ColoredString, Colorize};

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || !value.is_finite() {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value.max(0.0) / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for a 0-100 similarity score
#[must_use]
pub fn similarity_bar(score: f64, width: usize) -> String {
    create_progress_bar(score, 100.0, width)
}

/// Color a piece of text by how close its score is
#[must_use]
pub fn heat(text: &str, score: f64) -> ColoredString {
    match score {
        s if s >= 95.0 => text.bright_green().bold(),
        s if s >= 75.0 => text.green(),
        s if s >= 50.0 => text.yellow(),
        s if s >= 30.0 => text.bright_red(),
        _ => text.bright_black(),
    }
}

/// Short label for a score band
#[must_use]
pub fn heat_label(score: f64) -> &'static str {
    match score {
        s if s >= 95.0 => "cracked",
        s if s >= 75.0 => "hot",
        s if s >= 50.0 => "warm",
        s if s >= 30.0 => "cool",
        _ => "cold",
    }
}
