//! # Ragkit - Core API Documentation
//!
//! Ragkit is a small retrieval-augmented generation library. It turns text
//! into embeddings, stores them for nearest-neighbor retrieval, and answers
//! questions grounded in the retrieved documents.
//!
//! ## Features
//!
//! - **Modular Architecture** with clearly defined components:
//!   - **Embedding Models**: OpenAI-compatible text embedding clients
//!   - **Vector Stores**: Embedding storage and retrieval (in-memory, Qdrant)
//!   - **Completion Models**: Grounded answer generation over retrieved context
//!   - **Engine**: The ingest and answer pipelines wired from the above
//! - **Typed failures** for every collaborator, so callers can tell an
//!   unreachable upstream from a malformed response or a bad request
//! - **No hidden state**: configuration is an explicit struct, every network
//!   call carries a timeout, nothing is cached between requests
//!
//! ## Building a simple RAG
//!
//! ```rust,no_run
//! use ragkit::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ragkit::error::Error> {
//!     let config = RagConfig::default();
//!     let engine = RagEngine::new(
//!         OpenAIEmbeddingModel::new(&config),
//!         OpenAICompletionModel::new(&config),
//!         InMemoryVectorStore::new(),
//!     );
//!
//!     engine
//!         .ingest("Postgres with pgvector is great for RAG systems")
//!         .await?;
//!
//!     let result = engine.answer("What is pgvector?", DEFAULT_TOP_K).await?;
//!     println!("{}", result.answer);
//!     for source in &result.sources {
//!         println!("  source: {source}");
//!     }
//!     Ok(())
//! }
//! ```

/// Grounded answer generation over retrieved context
///
/// Contains:
/// - The `CompletionModel` trait implemented by chat-completion clients
/// - An OpenAI-compatible client
pub mod completion;

/// Component configuration
pub mod config;

/// Document processing and representation utilities
///
/// Provides core types for handling text documents in embedding and retrieval workflows.
pub mod document;

/// Text embeddings support
pub mod embeddings;

/// The ingest and answer pipelines
pub mod engine;

/// Error types for all library operations
pub mod error;

/// Convenience prelude exports
///
/// Re-exports commonly used types:
/// - `RagConfig`, `RagEngine` and the default collaborator implementations
pub mod prelude;

/// Vector storage and retrieval
pub mod vector_store;
