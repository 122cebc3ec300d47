//! Deterministic synthetic embeddings
//!
//! Vectors are drawn from seeded uniform noise and blended with the anchor
//! embedding so that the cosine with the anchor equals the table's target
//! similarity.

use super::EmbeddingSource;
use crate::config::DEFAULT_EMBEDDING_DIMENSIONS;
use crate::core::embedding::{dot, l2_norm};
use crate::core::{Embedding, Word};
use crate::error::EmbeddingError;
use crate::similarity::SimilarityTable;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashMap;

/// Seed for the anchor word's own vector
pub const ANCHOR_SEED: u64 = 42;

/// Target cosine for words the table does not relate to the anchor
const DEFAULT_TARGET: f64 = 0.4;

/// Target cosine used by the single-word fallback constructor
const FALLBACK_TARGET: f64 = 0.3;

/// Residual norm below which orthogonalization is considered degenerate
const DEGENERATE_NORM: f64 = 1e-10;

/// Seeded generator reproducing the table's anchor similarities
#[derive(Debug, Clone)]
pub struct SyntheticSource {
    anchor_word: Word,
    anchor: Embedding,
    targets: FxHashMap<String, f64>,
    dimensions: usize,
}

impl SyntheticSource {
    /// Build a generator for `anchor_word`, calibrated to its table row
    ///
    /// A zero `dimensions` falls back to [`DEFAULT_EMBEDDING_DIMENSIONS`].
    #[must_use]
    pub fn new(table: &SimilarityTable, anchor_word: &str, dimensions: usize) -> Self {
        let dimensions = if dimensions == 0 {
            DEFAULT_EMBEDDING_DIMENSIONS
        } else {
            dimensions
        };

        let anchor_word = Word::new(anchor_word);
        let targets = table
            .related(anchor_word.text())
            .map(|row| {
                row.iter()
                    .map(|(word, score)| (word.clone(), (score / 100.0).clamp(0.0, 1.0)))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            anchor_word,
            anchor: seeded_unit_vector(ANCHOR_SEED, dimensions),
            targets,
            dimensions,
        }
    }

    /// The anchor word's embedding
    #[must_use]
    pub fn anchor(&self) -> &Embedding {
        &self.anchor
    }

    /// Vector length
    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Target cosine with the anchor for `word`, if the table defines one
    #[must_use]
    pub fn target(&self, word: &Word) -> Option<f64> {
        self.targets.get(word.text()).copied()
    }

    /// Calibrated embedding: cosine with the anchor equals the target
    ///
    /// # Examples
    /// ```
    /// use datahunt::core::Word;
    /// use datahunt::embedding::SyntheticSource;
    /// use datahunt::similarity::SimilarityTable;
    ///
    /// let source = SyntheticSource::new(&SimilarityTable::builtin(), "espionage", 100);
    /// let spy = source.calibrated(&Word::new("spy"));
    /// assert!((source.anchor().cosine(&spy) - 0.9).abs() < 1e-3);
    /// ```
    #[must_use]
    pub fn calibrated(&self, word: &Word) -> Embedding {
        if *word == self.anchor_word {
            return self.anchor.clone();
        }

        let target = self.target(word).unwrap_or(DEFAULT_TARGET);
        let random = seeded_unit_vector(word.char_code_sum(), self.dimensions);
        let anchor = self.anchor.values();

        // Remove the component parallel to the anchor
        let projection = dot(random.values(), anchor);
        let residual: Vec<f64> = random
            .values()
            .iter()
            .zip(anchor)
            .map(|(r, a)| r - a * projection)
            .collect();

        if l2_norm(&residual) <= DEGENERATE_NORM {
            return random;
        }
        let Some(orthogonal) = Embedding::normalized(residual) else {
            return random;
        };

        blend(&self.anchor, &orthogonal, target).unwrap_or(random)
    }

    /// Single-word fallback used when another source fails
    ///
    /// Blends seeded noise with `anchor` (if given and of matching length)
    /// without orthogonalizing, so the cosine only approximates the target.
    #[must_use]
    pub fn fallback(&self, word: &Word, anchor: Option<&Embedding>) -> Embedding {
        let random = seeded_unit_vector(word.char_code_sum(), self.dimensions);

        match anchor {
            Some(anchor) if anchor.dimensions() == self.dimensions => {
                let target = self.target(word).unwrap_or(FALLBACK_TARGET);
                blend(anchor, &random, target).unwrap_or(random)
            }
            _ => random,
        }
    }
}

impl EmbeddingSource for SyntheticSource {
    fn name(&self) -> &'static str {
        "synthetic"
    }

    fn embed(&self, word: &Word) -> Result<Embedding, EmbeddingError> {
        Ok(self.calibrated(word))
    }
}

/// `target * anchor + sqrt(1 - target^2) * other`, renormalized
fn blend(anchor: &Embedding, other: &Embedding, target: f64) -> Option<Embedding> {
    let target = target.clamp(0.0, 1.0);
    let weight = (1.0 - target * target).sqrt();

    let mixed = anchor
        .values()
        .iter()
        .zip(other.values())
        .map(|(a, o)| target * a + weight * o)
        .collect();
    Embedding::normalized(mixed)
}

/// Uniform `[0, 1)` noise from a fixed seed, normalized to unit length
fn seeded_unit_vector(seed: u64, dimensions: usize) -> Embedding {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    loop {
        let values: Vec<f64> = (0..dimensions).map(|_| rng.random::<f64>()).collect();
        // An all-zero draw is astronomically unlikely; draw again from the same stream
        if let Some(embedding) = Embedding::normalized(values) {
            return embedding;
        }
    }
}
