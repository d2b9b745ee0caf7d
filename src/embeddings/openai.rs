use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, error, instrument};

use super::{EmbedderError, EmbeddingModel};
use crate::config::RagConfig;

/// Embedding client for OpenAI-compatible `/v1/embeddings` endpoints.
pub struct OpenAIEmbeddingModel {
    api_url: String,
    api_key: Option<String>,
    model: String,
    timeout: Duration,
    client: Client,
}

impl OpenAIEmbeddingModel {
    #[must_use]
    pub fn new(config: &RagConfig) -> Self {
        Self {
            api_url: config.embedding_url.clone(),
            api_key: config.api_key.clone(),
            model: config.embedding_model.clone(),
            timeout: config.timeout,
            client: Client::new(),
        }
    }
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f64>,
}

#[async_trait]
impl EmbeddingModel for OpenAIEmbeddingModel {
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn embed(&self, text: &str) -> Result<Vec<f64>, EmbedderError> {
        let request_body = json!({
            "model": self.model,
            "input": text,
        });
        let mut request = self
            .client
            .post(&self.api_url)
            .timeout(self.timeout)
            .header("Content-Type", "application/json")
            .json(&request_body);
        if let Some(key) = &self.api_key {
            request = request.header("Authorization", format!("Bearer {key}"));
        }
        let response = request.send().await.map_err(|e| {
            error!(error = ?e, "Embedding request failed");
            EmbedderError::RequestError(e.to_string())
        })?;

        if response.status().is_success() {
            let response = response.json::<EmbeddingResponse>().await.map_err(|e| {
                error!(error = ?e, "Failed to parse embedding response");
                EmbedderError::ParseError(e.to_string())
            })?;

            let embedding = response
                .data
                .into_iter()
                .next()
                .map(|d| d.embedding)
                .ok_or_else(|| {
                    error!("Embedding response carried an empty data array");
                    EmbedderError::ParseError("empty data array in embedding response".to_string())
                })?;

            debug!(dimensions = embedding.len(), "Embedded text");
            Ok(embedding)
        } else {
            let status = response.status();
            let error_message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            error!(%status, error = %error_message, "Embedding provider returned error");
            Err(EmbedderError::ProviderError(status.into(), error_message))
        }
    }
}
