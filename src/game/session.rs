//! Game session state

use crate::core::{Embedding, Word};
use serde::Serialize;
use std::sync::Arc;

/// One scored guess in a session's history
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuessRecord {
    pub word: String,
    pub similarity: f64,
}

/// Result of checking a guess
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuessOutcome {
    /// The normalized guess
    pub guess: String,
    /// Score rounded to two decimals
    pub similarity: f64,
    /// Always true: guesses are not checked against a dictionary
    pub is_valid_word: bool,
    /// Whether the score reached the success threshold
    pub is_successful: bool,
}

/// A single guessing game
///
/// The guess history only grows.
#[derive(Debug, Clone)]
pub struct GameSession {
    id: String,
    target: Word,
    target_embedding: Arc<Embedding>,
    guesses: Vec<GuessRecord>,
}

impl GameSession {
    #[must_use]
    pub fn new(id: String, target: Word, target_embedding: Arc<Embedding>) -> Self {
        Self {
            id,
            target,
            target_embedding,
            guesses: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn target_embedding(&self) -> &Embedding {
        &self.target_embedding
    }

    #[must_use]
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    /// Append a scored guess to the history
    pub fn record(&mut self, word: &Word, similarity: f64) {
        self.guesses.push(GuessRecord {
            word: word.text().to_string(),
            similarity,
        });
    }

    /// Highest score seen so far
    #[must_use]
    pub fn best_similarity(&self) -> Option<f64> {
        self.guesses
            .iter()
            .map(|g| g.similarity)
            .max_by(f64::total_cmp)
    }
}
