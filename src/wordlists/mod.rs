//! Curated word data for the guessing game
//!
//! Provides the hand-authored similarity table and hint list compiled into the
//! binary for zero-cost access.

mod embedded;
pub mod loader;

pub use embedded::{BASE_SIMILARITIES, BASE_SIMILARITIES_COUNT, HINT_WORDS, HINT_WORDS_COUNT};

/// The single secret word every session guesses against
pub const ANCHOR_WORD: &str = "espionage";
