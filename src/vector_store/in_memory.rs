use async_trait::async_trait;
use std::cmp::Ordering;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{euclidean_distance, VectorStore, VectorStoreError};
use crate::document::Document;

/// Process-local store backed by a `tokio` read-write lock.
///
/// The first insert pins the collection's dimensionality; later inserts and
/// queries with a different length are rejected with `DimensionMismatch`.
#[derive(Debug, Default)]
pub struct InMemoryVectorStore {
    documents: RwLock<Vec<Document>>,
}

impl InMemoryVectorStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VectorStore for InMemoryVectorStore {
    async fn insert(
        &self,
        content: String,
        embedding: Vec<f64>,
    ) -> Result<Uuid, VectorStoreError> {
        let mut documents = self.documents.write().await;
        if let Some(existing) = documents.first() {
            if existing.embedding.len() != embedding.len() {
                return Err(VectorStoreError::DimensionMismatch {
                    expected: existing.embedding.len(),
                    got: embedding.len(),
                });
            }
        }
        let document = Document::new(content, embedding);
        let id = document.id;
        documents.push(document);
        Ok(id)
    }

    async fn nearest(&self, query: &[f64], k: usize) -> Result<Vec<Document>, VectorStoreError> {
        let documents = self.documents.read().await;
        if let Some(existing) = documents.first() {
            if existing.embedding.len() != query.len() {
                return Err(VectorStoreError::DimensionMismatch {
                    expected: existing.embedding.len(),
                    got: query.len(),
                });
            }
        }
        let mut scored = documents
            .iter()
            .map(|document| (euclidean_distance(query, &document.embedding), document))
            .collect::<Vec<_>>();
        // stable sort, so equal distances keep insertion order
        scored.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        scored.truncate(k);
        Ok(scored.into_iter().map(|(_, d)| d.clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded_store() -> InMemoryVectorStore {
        let store = InMemoryVectorStore::new();
        store
            .insert("near".to_string(), vec![1.0, 0.0, 0.0])
            .await
            .unwrap();
        store
            .insert("middle".to_string(), vec![0.0, 2.0, 0.0])
            .await
            .unwrap();
        store
            .insert("far".to_string(), vec![0.0, 0.0, 9.0])
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn nearest_orders_by_ascending_distance() {
        let store = seeded_store().await;

        let results = store.nearest(&[0.0, 0.0, 0.0], 3).await.unwrap();
        let contents: Vec<_> = results.iter().map(|d| d.content.as_str()).collect();
        assert_eq!(contents, vec!["near", "middle", "far"]);
    }

    #[tokio::test]
    async fn nearest_truncates_to_k() {
        let store = seeded_store().await;

        let results = store.nearest(&[0.0, 0.0, 0.0], 2).await.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].content, "near");
    }

    #[tokio::test]
    async fn nearest_with_k_beyond_count_returns_everything() {
        let store = seeded_store().await;

        let results = store.nearest(&[0.0, 0.0, 0.0], 50).await.unwrap();
        assert_eq!(results.len(), 3);
    }

    #[tokio::test]
    async fn nearest_on_empty_store_returns_empty() {
        let store = InMemoryVectorStore::new();

        let results = store.nearest(&[1.0, 2.0], 3).await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn equal_distances_keep_insertion_order() {
        let store = InMemoryVectorStore::new();
        store
            .insert("first".to_string(), vec![1.0, 0.0])
            .await
            .unwrap();
        store
            .insert("second".to_string(), vec![0.0, 1.0])
            .await
            .unwrap();

        let results = store.nearest(&[0.0, 0.0], 2).await.unwrap();
        let contents: Vec<_> = results.iter().map(|d| d.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn mismatched_dimensions_are_rejected() {
        let store = InMemoryVectorStore::new();
        store
            .insert("three dims".to_string(), vec![1.0, 2.0, 3.0])
            .await
            .unwrap();

        let result = store.insert("two dims".to_string(), vec![1.0, 2.0]).await;
        assert_eq!(
            result,
            Err(VectorStoreError::DimensionMismatch {
                expected: 3,
                got: 2
            })
        );

        // the failed insert must not have landed
        let results = store.nearest(&[0.0, 0.0, 0.0], 10).await.unwrap();
        assert_eq!(results.len(), 1);
    }

    #[tokio::test]
    async fn query_with_wrong_dimensions_is_rejected() {
        let store = seeded_store().await;

        let result = store.nearest(&[0.0, 0.0], 3).await;
        assert_eq!(
            result,
            Err(VectorStoreError::DimensionMismatch {
                expected: 3,
                got: 2
            })
        );
    }

    #[tokio::test]
    async fn insert_assigns_unique_ids() {
        let store = InMemoryVectorStore::new();
        let a = store
            .insert("a".to_string(), vec![1.0])
            .await
            .unwrap();
        let b = store
            .insert("b".to_string(), vec![2.0])
            .await
            .unwrap();
        assert_ne!(a, b);
    }
}
