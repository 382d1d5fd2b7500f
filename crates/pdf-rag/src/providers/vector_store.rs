//! Vector store provider trait for persisting and searching fragments

use async_trait::async_trait;
use std::collections::HashSet;

use crate::error::Result;
use crate::types::Fragment;

/// Search result from the vector store
#[derive(Debug, Clone)]
pub struct ScoredFragment {
    /// Fragment id (the storage key)
    pub id: String,
    /// The matched fragment
    pub fragment: Fragment,
    /// Cosine similarity to the query (higher is closer)
    pub similarity: f32,
}

/// Trait for vector storage and similarity search.
///
/// The store owns persisted entries; the indexing core never mutates them,
/// it only decides whether to create new ones. Entries persist until the
/// store is explicitly cleared as a whole.
#[async_trait]
pub trait VectorStoreProvider: Send + Sync {
    /// All currently persisted fragment ids, in a single round-trip
    async fn list_ids(&self) -> Result<HashSet<String>>;

    /// Persist a fragment and its embedding under the given id.
    /// Put-by-key semantics: a second write to the same id overwrites.
    async fn put(&self, id: &str, fragment: &Fragment, embedding: &[f32]) -> Result<()>;

    /// Search for the fragments closest to the query embedding
    async fn search(&self, query_embedding: &[f32], top_k: usize) -> Result<Vec<ScoredFragment>>;

    /// Delete every persisted entry. Whole-store deletion only.
    async fn clear(&self) -> Result<()>;

    /// Number of persisted entries
    async fn len(&self) -> Result<usize>;

    /// Check if the store is empty
    async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }

    /// Check if the provider is healthy
    async fn health_check(&self) -> Result<bool>;

    /// Provider name for logging
    fn name(&self) -> &str;
}
