//! Cached embedding provider with synthetic fallback

use super::{EmbeddingSource, HttpSource, SyntheticSource};
use crate::config::EmbeddingConfig;
use crate::core::{Embedding, Word};
use crate::similarity::SimilarityTable;
use crate::wordlists::ANCHOR_WORD;
use parking_lot::RwLock;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Per-process embedding cache in front of a single source
///
/// The source is chosen once at construction. Any source failure is logged and
/// replaced by the synthetic single-word fallback; callers always get a vector.
/// The first vector cached for a word is the one returned for the rest of the
/// process lifetime.
pub struct EmbeddingProvider {
    source: Box<dyn EmbeddingSource>,
    synthetic: SyntheticSource,
    anchor: Word,
    cache: RwLock<FxHashMap<String, Arc<Embedding>>>,
}

impl EmbeddingProvider {
    /// Create a provider around an arbitrary source
    #[must_use]
    pub fn new(source: Box<dyn EmbeddingSource>, synthetic: SyntheticSource) -> Self {
        Self {
            source,
            synthetic,
            anchor: Word::new(ANCHOR_WORD),
            cache: RwLock::new(FxHashMap::default()),
        }
    }

    /// Create a provider that only uses synthetic vectors
    #[must_use]
    pub fn synthetic(table: &SimilarityTable, dimensions: usize) -> Self {
        let synthetic = SyntheticSource::new(table, ANCHOR_WORD, dimensions);
        Self::new(Box::new(synthetic.clone()), synthetic)
    }

    /// Pick the source from configuration: external if fully configured
    /// and constructible, synthetic otherwise
    #[must_use]
    pub fn from_config(config: &EmbeddingConfig, table: &SimilarityTable) -> Self {
        let synthetic = SyntheticSource::new(table, ANCHOR_WORD, config.effective_dimensions());

        match HttpSource::from_config(config) {
            Ok(Some(http)) => {
                info!(endpoint = http.endpoint(), "using external embedding source");
                Self::new(Box::new(http), synthetic)
            }
            Ok(None) => {
                info!("no embedding credential configured, using synthetic embeddings");
                Self::new(Box::new(synthetic.clone()), synthetic)
            }
            Err(err) => {
                warn!(error = %err, "external embedding source unavailable, using synthetic embeddings");
                Self::new(Box::new(synthetic.clone()), synthetic)
            }
        }
    }

    /// Name of the primary source
    #[must_use]
    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// Embed every word up front: the anchor first, then the rest in parallel
    pub fn warm<'a>(&self, words: impl IntoIterator<Item = &'a str>) {
        self.embed(self.anchor.text());

        let pending: Vec<Word> = words
            .into_iter()
            .map(Word::new)
            .filter(|w| self.cached(w.text()).is_none())
            .collect();

        let computed: Vec<(Word, Embedding)> = pending
            .into_par_iter()
            .map(|word| {
                let embedding = self.compute(&word);
                (word, embedding)
            })
            .collect();

        let mut cache = self.cache.write();
        for (word, embedding) in computed {
            cache
                .entry(word.into_text())
                .or_insert_with(|| Arc::new(embedding));
        }
        debug!(cached = cache.len(), "embedding cache warmed");
    }

    /// Embedding for `word`, computed and cached on first request
    ///
    /// # Examples
    /// ```
    /// use datahunt::embedding::EmbeddingProvider;
    /// use datahunt::similarity::SimilarityTable;
    ///
    /// let provider = EmbeddingProvider::synthetic(&SimilarityTable::builtin(), 100);
    /// let a = provider.embed("Spy");
    /// let b = provider.embed("spy");
    /// assert_eq!(a, b);
    /// assert!((a.norm() - 1.0).abs() < 1e-6);
    /// ```
    pub fn embed(&self, word: &str) -> Arc<Embedding> {
        let word = Word::new(word);
        if let Some(cached) = self.cached(word.text()) {
            return cached;
        }

        let embedding = Arc::new(self.compute(&word));
        let mut cache = self.cache.write();
        Arc::clone(cache.entry(word.into_text()).or_insert(embedding))
    }

    /// Cached embedding for `word`, if any
    #[must_use]
    pub fn cached(&self, word: &str) -> Option<Arc<Embedding>> {
        self.cache.read().get(word).cloned()
    }

    /// Number of cached words
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.cache.read().len()
    }

    /// Cosine similarity of two words' embeddings, as a percentage
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        self.embed(a).similarity(&self.embed(b))
    }

    fn compute(&self, word: &Word) -> Embedding {
        match self.source.embed(word) {
            Ok(embedding) if embedding.dimensions() == self.synthetic.dimensions() => {
                debug!(word = word.text(), source = self.source.name(), "embedded word");
                embedding
            }
            Ok(embedding) => {
                warn!(
                    word = word.text(),
                    dimensions = embedding.dimensions(),
                    "embedding has wrong length, using synthetic fallback"
                );
                self.fallback(word)
            }
            Err(err) => {
                warn!(word = word.text(), error = %err, "embedding source failed, using synthetic fallback");
                self.fallback(word)
            }
        }
    }

    fn fallback(&self, word: &Word) -> Embedding {
        let anchor = self.cached(self.anchor.text());
        self.synthetic.fallback(word, anchor.as_deref())
    }
}
