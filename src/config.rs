use std::time::Duration;

const DEFAULT_EMBEDDING_URL: &str = "http://127.0.0.1:1234/v1/embeddings";
const DEFAULT_CHAT_URL: &str = "http://127.0.0.1:1234/v1/chat/completions";
const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-nomic-embed-text-v1.5";
const DEFAULT_CHAT_MODEL: &str = "phi-3.1-mini-4k-instruct";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration shared by the embedding and completion clients.
///
/// Passed by reference to the client constructors; each client keeps only the
/// fields it needs. The defaults point at a local OpenAI-compatible server
/// (e.g. LM Studio) with no API key.
#[derive(Debug, Clone)]
pub struct RagConfig {
    /// Embeddings endpoint, OpenAI wire format.
    pub embedding_url: String,
    /// Chat-completions endpoint, OpenAI wire format.
    pub chat_url: String,
    pub embedding_model: String,
    pub chat_model: String,
    /// Bearer token sent with every upstream request, if set.
    pub api_key: Option<String>,
    /// Upper bound on each upstream request. Applied per request, so a hung
    /// embedding or completion service fails the pipeline instead of
    /// stalling it indefinitely.
    pub timeout: Duration,
}

impl Default for RagConfig {
    fn default() -> Self {
        Self {
            embedding_url: DEFAULT_EMBEDDING_URL.to_string(),
            chat_url: DEFAULT_CHAT_URL.to_string(),
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
