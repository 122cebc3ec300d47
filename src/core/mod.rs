//! Core domain types for the word game
//!
//! This module contains the fundamental value types with no I/O and no shared
//! state. All types here are pure, testable, and have clear mathematical
//! properties.

pub(crate) mod embedding;
mod word;

pub use embedding::Embedding;
pub use word::Word;
