pub use crate::completion::{openai::OpenAICompletionModel, CompletionModel};
pub use crate::config::RagConfig;
pub use crate::document::{Document, IngestReceipt, SearchResult};
pub use crate::embeddings::{openai::OpenAIEmbeddingModel, EmbeddingModel};
pub use crate::engine::{RagEngine, DEFAULT_TOP_K};
pub use crate::vector_store::{
    in_memory::InMemoryVectorStore,
    qdrant::{QdrantConfig, QdrantVectorStore},
    VectorStore,
};
