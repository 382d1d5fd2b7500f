//! Local vector store persisting fragments and embeddings to disk
//!
//! Brute-force cosine similarity over a JSON-backed entry map. File IO and
//! scoring are synchronous; the provider trait wraps them in blocking
//! tasks.

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::types::Fragment;

use super::vector_store::{ScoredFragment, VectorStoreProvider};

const ENTRIES_FILE: &str = "entries.json";

/// Cosine similarity between two embedding vectors.
/// Mismatched lengths or zero vectors score 0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// One persisted entry: fragment text plus its embedding, keyed by id
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredEntry {
    fragment: Fragment,
    embedding: Vec<f32>,
}

struct Inner {
    storage_dir: PathBuf,
    entries: RwLock<HashMap<String, StoredEntry>>,
}

/// Disk-persisted vector store with put-by-key semantics.
///
/// The whole entry map lives in memory and is flushed to
/// `<storage_dir>/entries.json` after every mutation. Last write wins for
/// a given id; concurrent indexing runs are tolerated, not coordinated.
#[derive(Clone)]
pub struct LocalVectorStore {
    inner: Arc<Inner>,
}

impl LocalVectorStore {
    /// Open (or create) a store rooted at the given directory
    pub fn open(storage_dir: impl Into<PathBuf>) -> Result<Self> {
        let storage_dir = storage_dir.into();
        std::fs::create_dir_all(&storage_dir)?;

        let entries_path = storage_dir.join(ENTRIES_FILE);
        let entries = if entries_path.exists() {
            let data = std::fs::read(&entries_path)?;
            serde_json::from_slice(&data)
                .map_err(|e| Error::vector_store(format!("Corrupt store file: {}", e)))?
        } else {
            HashMap::new()
        };

        tracing::info!(
            "Opened vector store at {} ({} entries)",
            storage_dir.display(),
            entries.len()
        );

        Ok(Self {
            inner: Arc::new(Inner {
                storage_dir,
                entries: RwLock::new(entries),
            }),
        })
    }

    fn flush(&self) -> Result<()> {
        let entries = self.inner.entries.read();
        let data = serde_json::to_vec(&*entries)?;
        std::fs::write(self.inner.storage_dir.join(ENTRIES_FILE), data)?;
        Ok(())
    }

    fn put_sync(&self, id: &str, fragment: &Fragment, embedding: &[f32]) -> Result<()> {
        self.inner.entries.write().insert(
            id.to_string(),
            StoredEntry {
                fragment: fragment.clone(),
                embedding: embedding.to_vec(),
            },
        );
        self.flush()
    }

    fn search_sync(&self, query_embedding: &[f32], top_k: usize) -> Vec<ScoredFragment> {
        let entries = self.inner.entries.read();
        let mut results: Vec<ScoredFragment> = entries
            .iter()
            .map(|(id, entry)| ScoredFragment {
                id: id.clone(),
                fragment: entry.fragment.clone(),
                similarity: cosine_similarity(query_embedding, &entry.embedding),
            })
            .collect();
        results.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results.truncate(top_k);
        results
    }

    fn clear_sync(&self) -> Result<()> {
        self.inner.entries.write().clear();
        let entries_path = self.inner.storage_dir.join(ENTRIES_FILE);
        if entries_path.exists() {
            std::fs::remove_file(entries_path)?;
        }
        Ok(())
    }
}

#[async_trait]
impl VectorStoreProvider for LocalVectorStore {
    async fn list_ids(&self) -> Result<HashSet<String>> {
        let store = self.clone();
        tokio::task::spawn_blocking(move || Ok(store.inner.entries.read().keys().cloned().collect()))
            .await
            .map_err(|e| Error::internal(format!("Task join error: {}", e)))?
    }

    async fn put(&self, id: &str, fragment: &Fragment, embedding: &[f32]) -> Result<()> {
        let store = self.clone();
        let id = id.to_string();
        let fragment = fragment.clone();
        let embedding = embedding.to_vec();
        tokio::task::spawn_blocking(move || store.put_sync(&id, &fragment, &embedding))
            .await
            .map_err(|e| Error::internal(format!("Task join error: {}", e)))?
    }

    async fn search(&self, query_embedding: &[f32], top_k: usize) -> Result<Vec<ScoredFragment>> {
        let store = self.clone();
        let query = query_embedding.to_vec();
        tokio::task::spawn_blocking(move || Ok(store.search_sync(&query, top_k)))
            .await
            .map_err(|e| Error::internal(format!("Task join error: {}", e)))?
    }

    async fn clear(&self) -> Result<()> {
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.clear_sync())
            .await
            .map_err(|e| Error::internal(format!("Task join error: {}", e)))?
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.inner.entries.read().len())
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(self.inner.storage_dir.exists())
    }

    fn name(&self) -> &str {
        "local-json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frag(content: &str) -> Fragment {
        Fragment::new("a.pdf", 0, content)
    }

    #[test]
    fn cosine_of_identical_vectors_is_one() {
        let v = vec![0.5, 0.3, -0.2];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn cosine_of_orthogonal_vectors_is_zero() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn cosine_handles_mismatched_and_zero_vectors() {
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 2.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
    }

    #[tokio::test]
    async fn put_then_list_and_len() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalVectorStore::open(dir.path()).unwrap();

        store.put("a.pdf:0:0", &frag("alpha"), &[1.0, 0.0]).await.unwrap();
        store.put("a.pdf:0:1", &frag("beta"), &[0.0, 1.0]).await.unwrap();

        assert_eq!(store.len().await.unwrap(), 2);
        let ids = store.list_ids().await.unwrap();
        assert!(ids.contains("a.pdf:0:0"));
        assert!(ids.contains("a.pdf:0:1"));
    }

    #[tokio::test]
    async fn search_returns_closest_first() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalVectorStore::open(dir.path()).unwrap();

        store.put("a.pdf:0:0", &frag("north"), &[1.0, 0.0]).await.unwrap();
        store.put("a.pdf:0:1", &frag("east"), &[0.0, 1.0]).await.unwrap();
        store.put("a.pdf:0:2", &frag("northish"), &[0.9, 0.1]).await.unwrap();

        let results = store.search(&[1.0, 0.0], 2).await.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, "a.pdf:0:0");
        assert_eq!(results[1].id, "a.pdf:0:2");
        assert!(results[0].similarity >= results[1].similarity);
    }

    #[tokio::test]
    async fn search_on_empty_store_returns_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalVectorStore::open(dir.path()).unwrap();
        assert!(store.search(&[1.0, 0.0], 5).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn entries_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = LocalVectorStore::open(dir.path()).unwrap();
            store.put("a.pdf:0:0", &frag("persisted"), &[1.0]).await.unwrap();
        }
        let reopened = LocalVectorStore::open(dir.path()).unwrap();
        assert_eq!(reopened.len().await.unwrap(), 1);
        assert!(reopened.list_ids().await.unwrap().contains("a.pdf:0:0"));
    }

    #[tokio::test]
    async fn clear_removes_everything() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalVectorStore::open(dir.path()).unwrap();
        store.put("a.pdf:0:0", &frag("gone"), &[1.0]).await.unwrap();
        store.clear().await.unwrap();
        assert!(store.is_empty().await.unwrap());

        // And stays empty after reopen
        let reopened = LocalVectorStore::open(dir.path()).unwrap();
        assert!(reopened.is_empty().await.unwrap());
    }

    #[tokio::test]
    async fn put_by_key_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalVectorStore::open(dir.path()).unwrap();
        store.put("a.pdf:0:0", &frag("old"), &[1.0]).await.unwrap();
        store.put("a.pdf:0:0", &frag("new"), &[0.5]).await.unwrap();
        assert_eq!(store.len().await.unwrap(), 1);
    }
}
