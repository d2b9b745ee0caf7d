use crate::{
    completion::CompletionError, embeddings::EmbedderError, vector_store::VectorStoreError,
};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("Embedder error: {0}")]
    Embedder(#[from] EmbedderError),
    #[error("Completion error: {0}")]
    Completion(#[from] CompletionError),
    #[error("VectorStore error: {0}")]
    VectorStore(#[from] VectorStoreError),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}
