use serde::Serialize;
use uuid::Uuid;

/// A stored unit of knowledge: the original text plus its embedding.
///
/// Created once at ingestion and never mutated afterwards; the store owns it
/// for its lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Store-assigned, unique. Ordering carries no meaning.
    pub id: Uuid,
    pub content: String,
    pub embedding: Vec<f64>,
}

impl Document {
    #[must_use]
    pub fn new(content: String, embedding: Vec<f64>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
            embedding,
        }
    }

    #[must_use]
    pub fn new_with_id(id: Uuid, content: String, embedding: Vec<f64>) -> Self {
        Self {
            id,
            content,
            embedding,
        }
    }
}

/// Answer to a query together with the document texts it was grounded in,
/// ordered by ascending distance to the query embedding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub query: String,
    pub answer: String,
    pub sources: Vec<String>,
}

/// What ingestion reports back: the assigned id and the embedding length,
/// the latter mainly as a sanity signal for operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IngestReceipt {
    pub document_id: Uuid,
    pub embedding_length: usize,
}
