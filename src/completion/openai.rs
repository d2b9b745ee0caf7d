use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, error, instrument};

use super::{CompletionError, CompletionModel};
use crate::config::RagConfig;

const SYSTEM_PROMPT: &str =
    "You are a helpful assistant. Answer ONLY using the provided context.";
const TEMPERATURE: f64 = 0.2;

/// Completion client for OpenAI-compatible `/v1/chat/completions` endpoints.
pub struct OpenAICompletionModel {
    api_url: String,
    api_key: Option<String>,
    model: String,
    timeout: Duration,
    client: Client,
}

impl OpenAICompletionModel {
    #[must_use]
    pub fn new(config: &RagConfig) -> Self {
        Self {
            api_url: config.chat_url.clone(),
            api_key: config.api_key.clone(),
            model: config.chat_model.clone(),
            timeout: config.timeout,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl CompletionModel for OpenAICompletionModel {
    /// Known open risk: `context` is interpolated verbatim into the prompt.
    /// Context comes from this service's own stored documents, but a
    /// maliciously ingested document can still steer the answer past the
    /// system instruction. No sanitization is attempted here.
    #[instrument(skip(self, context, question), fields(context_len = context.len()))]
    async fn generate(&self, context: &str, question: &str) -> Result<String, CompletionError> {
        let user_content = format!(
            "Context:\n{context}\n\nQuestion:\n{question}\n\nAnswer clearly and concisely."
        );
        let request_body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": user_content },
            ],
            "temperature": TEMPERATURE,
        });
        debug!(request_body = ?request_body, "Sending completion request");

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
            error!(error = ?e, "Completion request failed");
            CompletionError::RequestError(e.to_string())
        })?;

        let status = response.status();
        debug!(%status, "Received completion response");

        if status.is_success() {
            let response_json: serde_json::Value = response.json().await.map_err(|e| {
                error!(error = ?e, "Failed to parse completion response JSON");
                CompletionError::ParseError(e.to_string())
            })?;

            let answer = response_json["choices"][0]["message"]["content"]
                .as_str()
                .ok_or_else(|| {
                    error!("Missing content in completion response");
                    CompletionError::ParseError(
                        "missing choices[0].message.content".to_string(),
                    )
                })?
                .to_string();

            Ok(answer)
        } else {
            let error_msg = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error (failed to read response body)".to_string());

            error!(status = %status, error = %error_msg, "Completion provider returned error");
            Err(CompletionError::ProviderError(status.into(), error_msg))
        }
    }
}
