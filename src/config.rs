//! Runtime configuration
//!
//! Plain structs with defaults; the binary fills them from command-line flags
//! and environment variables.

use std::time::Duration;

/// Score a guess must reach to win
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 95.0;

/// Length of every embedding vector
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 100;

/// Upper bound on a single external embedding call
pub const DEFAULT_EMBEDDING_TIMEOUT: Duration = Duration::from_secs(5);

/// Game configuration
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Guesses scoring at or above this are successful
    pub similarity_threshold: f64,
    /// Embedding provider settings
    pub embedding: EmbeddingConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            embedding: EmbeddingConfig::default(),
        }
    }
}

/// Embedding provider configuration
///
/// External mode is used only when both `endpoint` and `api_key` are set.
#[derive(Debug, Clone)]
pub struct EmbeddingConfig {
    /// URL of the external embedding service
    pub endpoint: Option<String>,
    /// Bearer credential for the external service
    pub api_key: Option<String>,
    /// Model name sent with each request
    pub model: String,
    /// Request timeout for external calls
    pub timeout: Duration,
    /// Vector length for every source
    pub dimensions: usize,
}

impl EmbeddingConfig {
    /// Whether an external source is fully configured
    #[must_use]
    pub fn has_external(&self) -> bool {
        self.endpoint.as_deref().is_some_and(|e| !e.is_empty())
            && self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    /// Configured vector length, or the default when it is zero
    #[must_use]
    pub fn effective_dimensions(&self) -> usize {
        if self.dimensions == 0 {
            DEFAULT_EMBEDDING_DIMENSIONS
        } else {
            self.dimensions
        }
    }
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            model: "embedding-001".to_string(),
            timeout: DEFAULT_EMBEDDING_TIMEOUT,
            dimensions: DEFAULT_EMBEDDING_DIMENSIONS,
        }
    }
}
