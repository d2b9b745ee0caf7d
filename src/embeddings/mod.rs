pub mod openai;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum EmbedderError {
    /// The embedding service could not be reached (connection refused,
    /// timeout, DNS failure).
    #[error("RequestError: {0}")]
    RequestError(String),
    /// The service answered but the body was not the expected shape.
    #[error("ParseError: {0}")]
    ParseError(String),
    /// The service answered with a non-success HTTP status.
    #[error("Provider error -> HTTP Status {0}: {1}")]
    ProviderError(u16, String),
}

/// Turns text into a fixed-dimension vector.
///
/// Implementations must not assume the dimensionality statically; callers use
/// whatever length the model returns. Every call is a fresh round trip, no
/// caching.
#[async_trait]
pub trait EmbeddingModel: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f64>, EmbedderError>;
}
