use tracing::{info, instrument};

use crate::completion::CompletionModel;
use crate::document::{IngestReceipt, SearchResult};
use crate::embeddings::EmbeddingModel;
use crate::error::Error;
use crate::vector_store::VectorStore;

pub const DEFAULT_TOP_K: usize = 3;

/// Separator between source documents in the assembled context, so the
/// completion model can tell document boundaries apart.
const SOURCE_SEPARATOR: &str = "\n\n";

/// The retrieval-and-grounding pipeline: composes an embedding model, a
/// completion model and a vector store into the two core operations,
/// [`ingest`](Self::ingest) and [`answer`](Self::answer).
///
/// Collaborators are injected at construction; the engine itself holds no
/// other state, so both methods take `&self` and a single engine can be
/// shared across request handlers (e.g. behind an `Arc`). Failures are never
/// retried here and never degraded into partial results; each one propagates
/// as the typed error of the collaborator that produced it.
pub struct RagEngine<E, C, V> {
    embedding_model: E,
    completion_model: C,
    vector_store: V,
}

impl<E, C, V> RagEngine<E, C, V>
where
    E: EmbeddingModel,
    C: CompletionModel,
    V: VectorStore,
{
    pub fn new(embedding_model: E, completion_model: C, vector_store: V) -> Self {
        Self {
            embedding_model,
            completion_model,
            vector_store,
        }
    }

    /// Embeds `content` and stores it as a new document.
    ///
    /// Either step failing aborts the whole operation: if the store rejects
    /// the document, the embedding is discarded, not retried or cached.
    #[instrument(skip(self, content), fields(content_len = content.len()))]
    pub async fn ingest(&self, content: &str) -> Result<IngestReceipt, Error> {
        let embedding = self.embedding_model.embed(content).await?;
        let embedding_length = embedding.len();
        let document_id = self
            .vector_store
            .insert(content.to_string(), embedding)
            .await?;
        info!(%document_id, embedding_length, "Ingested document");
        Ok(IngestReceipt {
            document_id,
            embedding_length,
        })
    }

    /// Answers `query` grounded in the `top_k` nearest stored documents.
    ///
    /// The retrieved document texts are returned as `sources` so callers can
    /// verify provenance. An empty store degenerates to generation over an
    /// empty context and empty `sources`, not an error.
    #[instrument(skip(self, query), fields(query_len = query.len()))]
    pub async fn answer(&self, query: &str, top_k: usize) -> Result<SearchResult, Error> {
        if top_k == 0 {
            return Err(Error::InvalidRequest("top_k must be at least 1".to_string()));
        }

        let query_embedding = self.embedding_model.embed(query).await?;
        let documents = self
            .vector_store
            .nearest(&query_embedding, top_k)
            .await?;
        let sources: Vec<String> = documents.into_iter().map(|d| d.content).collect();
        let context = sources.join(SOURCE_SEPARATOR);
        let answer = self.completion_model.generate(&context, query).await?;

        info!(source_count = sources.len(), "Answered query");
        Ok(SearchResult {
            query: query.to_string(),
            answer,
            sources,
        })
    }
}
