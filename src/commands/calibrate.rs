//! Embedding calibration report
//!
//! Checks, for every table word, how close the cached embedding's cosine with
//! the anchor comes to the table score.

use crate::embedding::EmbeddingProvider;
use crate::similarity::SimilarityScorer;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Target and achieved similarity for one word
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationEntry {
    pub word: String,
    /// Table score against the anchor
    pub target: f64,
    /// Embedding cosine with the anchor, as a percentage
    pub achieved: f64,
}

impl CalibrationEntry {
    #[must_use]
    pub fn error(&self) -> f64 {
        (self.achieved - self.target).abs()
    }
}

/// Calibration over the whole table
#[derive(Debug)]
pub struct CalibrationReport {
    pub anchor: String,
    pub source: &'static str,
    /// Sorted by descending target
    pub entries: Vec<CalibrationEntry>,
    pub duration: Duration,
}

impl CalibrationReport {
    /// Largest absolute error over all entries
    #[must_use]
    pub fn max_error(&self) -> f64 {
        self.entries
            .iter()
            .map(CalibrationEntry::error)
            .fold(0.0, f64::max)
    }

    /// Mean absolute error, 0 for an empty report
    #[must_use]
    pub fn mean_error(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        self.entries.iter().map(CalibrationEntry::error).sum::<f64>() / self.entries.len() as f64
    }
}

/// Measure every word the table relates to the anchor
#[must_use]
pub fn run_calibration(scorer: &SimilarityScorer, embeddings: &EmbeddingProvider) -> CalibrationReport {
    let start = Instant::now();
    let anchor = scorer.anchor().text();
    let anchor_embedding = embeddings.embed(anchor);

    let mut entries: Vec<CalibrationEntry> = scorer
        .table()
        .words()
        .into_par_iter()
        .filter_map(|word| {
            let target = scorer.table().get(anchor, word)?;
            let achieved = anchor_embedding.similarity(&embeddings.embed(word));
            Some(CalibrationEntry {
                word: word.to_string(),
                target,
                achieved,
            })
        })
        .collect();

    entries.sort_by(|a, b| b.target.total_cmp(&a.target).then_with(|| a.word.cmp(&b.word)));

    CalibrationReport {
        anchor: anchor.to_string(),
        source: embeddings.source_name(),
        entries,
        duration: start.elapsed(),
    }
}
