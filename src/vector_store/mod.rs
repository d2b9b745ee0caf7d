pub mod in_memory;
pub mod qdrant;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::document::Document;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum VectorStoreError {
    /// The underlying storage could not be reached.
    #[error("Store unreachable: {0}")]
    Unavailable(String),
    /// The store answered but the body was not the expected shape.
    #[error("ParseError: {0}")]
    ParseError(String),
    /// The store answered with a non-success HTTP status.
    #[error("Store error -> HTTP Status {0}: {1}")]
    ProviderError(u16, String),
    /// The embedding's length disagrees with the dimensionality of the
    /// collection. Rejecting here keeps a single bad insert from making the
    /// whole collection uncomparable.
    #[error("Embedding has {got} dimensions, the collection holds {expected}")]
    DimensionMismatch { expected: usize, got: usize },
    #[error("Failed to create store: {0}")]
    FailedToCreateStore(String),
}

/// Persists documents with their embeddings and answers nearest-neighbor
/// queries over them.
///
/// A single `insert` is atomic; `insert` and `nearest` may run concurrently
/// and a search racing an insert may or may not observe the new document.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Stores a new document and returns its store-assigned id.
    async fn insert(&self, content: String, embedding: Vec<f64>)
        -> Result<Uuid, VectorStoreError>;

    /// Returns up to `k` documents ordered by ascending distance to
    /// `query`. Fewer than `k` stored documents returns all of them; an
    /// empty store returns an empty list. Neither is an error.
    async fn nearest(&self, query: &[f64], k: usize) -> Result<Vec<Document>, VectorStoreError>;
}

/// L2 distance between two vectors, the canonical ranking metric for every
/// store in this crate. Embeddings compared under different metrics are not
/// comparable, so this is fixed per deployment, not per call.
#[must_use]
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "vectors must have equal length");
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}
