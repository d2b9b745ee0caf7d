pub mod openai;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CompletionError {
    /// The completion service could not be reached (connection refused,
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

/// Produces a free-text answer to `question` using only `context`.
///
/// The answer comes back unparsed and unvalidated; a model refusal is
/// ordinary content, not an error.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    async fn generate(&self, context: &str, question: &str) -> Result<String, CompletionError>;
}
