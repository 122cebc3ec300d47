//! Word similarity scoring
//!
//! Converts an arbitrary pair of words into a deterministic closeness score in
//! `[0, 100]`, using a curated symmetric table first and heuristics after.

mod scorer;
mod table;

pub use scorer::{ANCHOR_HEURISTICS, ScoreRule, SimilarityScorer};
pub use table::{SimilarityEntry, SimilarityTable};
