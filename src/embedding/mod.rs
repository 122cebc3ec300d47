//! Word embeddings
//!
//! Vectors come from an [`EmbeddingSource`]: either an external service or a
//! deterministic synthetic generator calibrated to the similarity table. The
//! [`EmbeddingProvider`] caches them and hides source failures behind the
//! synthetic fallback.

mod http;
mod provider;
mod synthetic;

pub use http::HttpSource;
pub use provider::EmbeddingProvider;
pub use synthetic::{ANCHOR_SEED, SyntheticSource};

use crate::core::{Embedding, Word};
use crate::error::EmbeddingError;

/// Something that can turn a word into a fixed-length unit vector
pub trait EmbeddingSource: Send + Sync {
    /// Short name for logs and diagnostics
    fn name(&self) -> &'static str;

    /// Produce the embedding for a normalized word
    ///
    /// # Errors
    ///
    /// Returns an [`EmbeddingError`] if the source cannot produce a valid
    /// vector. Callers are expected to fall back rather than propagate.
    fn embed(&self, word: &Word) -> Result<Embedding, EmbeddingError>;
}
