//! Word-pair scoring command
//!
//! Compares the ladder score with the embedding cosine for one pair of words.

use crate::embedding::EmbeddingProvider;
use crate::similarity::{ScoreRule, SimilarityScorer};

/// Both scores for one pair
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub reference: String,
    pub candidate: String,
    pub score: f64,
    pub rule: ScoreRule,
    pub embedding_similarity: f64,
}

/// Score `candidate` against `reference` with the ladder and the embeddings
#[must_use]
pub fn score_pair(
    scorer: &SimilarityScorer,
    embeddings: &EmbeddingProvider,
    reference: &str,
    candidate: &str,
) -> ScoreResult {
    let (score, rule) = scorer.score_with_rule(reference, candidate);

    ScoreResult {
        reference: reference.trim().to_lowercase(),
        candidate: candidate.trim().to_lowercase(),
        score,
        rule,
        embedding_similarity: embeddings.similarity(reference, candidate),
    }
}
