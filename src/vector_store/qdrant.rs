use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

use super::{VectorStore, VectorStoreError};
use crate::document::Document;

const RETRIES: u8 = 3;

#[derive(Debug, Clone)]
pub struct QdrantConfig {
    /// Base URL of the Qdrant REST API.
    pub url: String,
    pub collection: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for QdrantConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:6333".to_string(),
            collection: "documents".to_string(),
            api_key: None,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Remote store backed by a Qdrant collection, L2 distance.
///
/// The collection is created on the first insert with that embedding's
/// length, so dimensionality is enforced by the collection schema from then
/// on; inserts are also checked locally to fail with a typed error instead
/// of an opaque upstream rejection.
pub struct QdrantVectorStore {
    client: Client,
    config: QdrantConfig,
    collection_url: Url,
    points_url: Url,
    search_url: Url,
    dimensions: RwLock<Option<usize>>,
}

#[derive(Deserialize)]
struct CollectionInfoResponse {
    result: CollectionInfo,
}

#[derive(Deserialize)]
struct CollectionInfo {
    config: CollectionConfig,
}

#[derive(Deserialize)]
struct CollectionConfig {
    params: CollectionParams,
}

#[derive(Deserialize)]
struct CollectionParams {
    vectors: VectorParams,
}

#[derive(Deserialize)]
struct VectorParams {
    size: usize,
}

#[derive(Deserialize)]
struct SearchResponse {
    result: Vec<ScoredPoint>,
}

#[derive(Deserialize)]
struct ScoredPoint {
    id: Uuid,
    payload: PointPayload,
    vector: Vec<f64>,
}

#[derive(Deserialize)]
struct PointPayload {
    content: String,
}

impl QdrantVectorStore {
    /// Verifies the service is reachable (with a few startup retries) and
    /// reads the collection's dimensionality if it already exists.
    pub async fn connect(config: QdrantConfig) -> Result<Self, VectorStoreError> {
        let base_url = Url::parse(&config.url)
            .map_err(|e| VectorStoreError::FailedToCreateStore(e.to_string()))?;
        let collections_url = base_url
            .join("collections")
            .map_err(|e| VectorStoreError::FailedToCreateStore(e.to_string()))?;
        let collection_url = base_url
            .join(&format!("collections/{}", config.collection))
            .map_err(|e| VectorStoreError::FailedToCreateStore(e.to_string()))?;
        let points_url = base_url
            .join(&format!("collections/{}/points", config.collection))
            .map_err(|e| VectorStoreError::FailedToCreateStore(e.to_string()))?;
        let search_url = base_url
            .join(&format!("collections/{}/points/search", config.collection))
            .map_err(|e| VectorStoreError::FailedToCreateStore(e.to_string()))?;

        let store = Self {
            client: Client::new(),
            config,
            collection_url,
            points_url,
            search_url,
            dimensions: RwLock::new(None),
        };

        let mut attempts = 0u8;
        loop {
            let response = store
                .authorized(store.client.get(collections_url.clone()))
                .send()
                .await;
            match response {
                Ok(response) if response.status().is_success() => break,
                other => {
                    attempts += 1;
                    if attempts >= RETRIES {
                        let reason = match other {
                            Ok(response) => format!("HTTP status {}", response.status()),
                            Err(e) => e.to_string(),
                        };
                        return Err(VectorStoreError::FailedToCreateStore(format!(
                            "Qdrant not reachable: {reason}"
                        )));
                    }
                    tokio::time::sleep(tokio::time::Duration::from_secs(1)).await;
                }
            }
        }

        let response = store
            .authorized(store.client.get(store.collection_url.clone()))
            .send()
            .await
            .map_err(|e| VectorStoreError::Unavailable(e.to_string()))?;
        match response.status() {
            StatusCode::OK => {
                let info: CollectionInfoResponse = response
                    .json()
                    .await
                    .map_err(|e| VectorStoreError::ParseError(e.to_string()))?;
                let size = info.result.config.params.vectors.size;
                info!(collection = %store.config.collection, dimensions = size, "Found existing collection");
                *store.dimensions.write().await = Some(size);
            }
            // created lazily on first insert, once a dimensionality is known
            StatusCode::NOT_FOUND => {
                info!(collection = %store.config.collection, "Collection not found, deferring creation");
            }
            status => {
                let error_message = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                return Err(VectorStoreError::ProviderError(status.into(), error_message));
            }
        }

        Ok(store)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.timeout(self.config.timeout);
        match &self.config.api_key {
            Some(key) => request.header("api-key", key),
            None => request,
        }
    }

    async fn create_collection(&self, dimensions: usize) -> Result<(), VectorStoreError> {
        let response = self
            .authorized(self.client.put(self.collection_url.clone()))
            .json(&json!({
                "vectors": { "size": dimensions, "distance": "Euclid" }
            }))
            .send()
            .await
            .map_err(|e| VectorStoreError::Unavailable(e.to_string()))?;

        if response.status().is_success() {
            info!(collection = %self.config.collection, dimensions, "Created collection");
            Ok(())
        } else {
            let status = response.status();
            let error_message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!(%status, error = %error_message, "Failed to create collection");
            Err(VectorStoreError::FailedToCreateStore(error_message))
        }
    }
}

#[async_trait]
impl VectorStore for QdrantVectorStore {
    #[instrument(skip(self, content, embedding), fields(dimensions = embedding.len()))]
    async fn insert(
        &self,
        content: String,
        embedding: Vec<f64>,
    ) -> Result<Uuid, VectorStoreError> {
        // fast path once the dimensionality is pinned; the write lock is
        // only taken for the first-insert create, so concurrent inserts
        // don't queue behind each other's round trips
        let pinned = *self.dimensions.read().await;
        match pinned {
            Some(expected) if expected != embedding.len() => {
                return Err(VectorStoreError::DimensionMismatch {
                    expected,
                    got: embedding.len(),
                });
            }
            Some(_) => {}
            None => {
                let mut dimensions = self.dimensions.write().await;
                // re-check, another writer may have created the collection
                match *dimensions {
                    Some(expected) if expected != embedding.len() => {
                        return Err(VectorStoreError::DimensionMismatch {
                            expected,
                            got: embedding.len(),
                        });
                    }
                    Some(_) => {}
                    None => {
                        self.create_collection(embedding.len()).await?;
                        *dimensions = Some(embedding.len());
                    }
                }
            }
        }

        let id = Uuid::new_v4();
        let response = self
            .authorized(self.client.put(self.points_url.clone()))
            .query(&[("wait", "true")])
            .json(&json!({
                "points": [{
                    "id": id,
                    "vector": embedding,
                    "payload": { "content": content },
                }]
            }))
            .send()
            .await
            .map_err(|e| VectorStoreError::Unavailable(e.to_string()))?;

        if response.status().is_success() {
            debug!(%id, "Upserted point");
            Ok(id)
        } else {
            let status = response.status();
            let error_message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!(%status, error = %error_message, "Upsert rejected");
            Err(VectorStoreError::ProviderError(status.into(), error_message))
        }
    }

    #[instrument(skip(self, query))]
    async fn nearest(&self, query: &[f64], k: usize) -> Result<Vec<Document>, VectorStoreError> {
        let response = self
            .authorized(self.client.post(self.search_url.clone()))
            .json(&json!({
                "vector": query,
                "limit": k,
                "with_payload": true,
                "with_vector": true,
            }))
            .send()
            .await
            .map_err(|e| VectorStoreError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(VectorStoreError::ProviderError(status.into(), error_message));
        }

        let results: SearchResponse = response
            .json()
            .await
            .map_err(|e| VectorStoreError::ParseError(e.to_string()))?;

        Ok(results
            .result
            .into_iter()
            .map(|point| Document::new_with_id(point.id, point.payload.content, point.vector))
            .collect())
    }
}
