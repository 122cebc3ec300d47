//! External embedding service client
//!
//! POSTs `{"model", "input"}` JSON with a bearer credential and expects
//! `{"embedding": [..]}` back. Every request is bounded by the configured
//! timeout.

use super::EmbeddingSource;
use crate::config::EmbeddingConfig;
use crate::core::{Embedding, Word};
use crate::error::EmbeddingError;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Deserialize)]
struct EmbedResponse {
    embedding: Vec<f64>,
}

/// Blocking HTTP embedding source
#[derive(Debug)]
pub struct HttpSource {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
    dimensions: usize,
}

impl HttpSource {
    /// Build a client from configuration
    ///
    /// Returns `Ok(None)` if the endpoint or credential is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: &EmbeddingConfig) -> Result<Option<Self>, EmbeddingError> {
        if !config.has_external() {
            return Ok(None);
        }
        let (Some(endpoint), Some(api_key)) = (&config.endpoint, &config.api_key) else {
            return Ok(None);
        };

        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Some(Self {
            client,
            endpoint: endpoint.clone(),
            api_key: api_key.clone(),
            model: config.model.clone(),
            dimensions: config.effective_dimensions(),
        }))
    }

    /// The service URL
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl EmbeddingSource for HttpSource {
    fn name(&self) -> &'static str {
        "http"
    }

    fn embed(&self, word: &Word) -> Result<Embedding, EmbeddingError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&EmbedRequest {
                model: &self.model,
                input: word.text(),
            })
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(EmbeddingError::Status(status.as_u16()));
        }

        let body: EmbedResponse = response.json()?;
        if body.embedding.len() != self.dimensions {
            return Err(EmbeddingError::Dimension {
                expected: self.dimensions,
                actual: body.embedding.len(),
            });
        }

        Embedding::normalized(body.embedding).ok_or(EmbeddingError::Degenerate)
    }
}
