//! Semantic word-guessing game
//!
//! Sessions are isolated guess histories against the fixed secret word. Scoring
//! is delegated to the [`SimilarityScorer`](crate::similarity::SimilarityScorer).

mod session;
mod store;

pub use session::{GameSession, GuessOutcome, GuessRecord};
pub use store::WordGameStore;
