//! End-to-end tests for identification, incremental diff, and retrieval
//! using in-memory fake providers.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use pdf_rag::config::RagConfig;
use pdf_rag::error::{Error, Result};
use pdf_rag::indexing::{assign_fragment_ids, run_index_pipeline, IncrementalIndexer};
use pdf_rag::providers::{
    EmbeddingProvider, LlmProvider, ScoredFragment, VectorStoreProvider,
};
use pdf_rag::retrieval::QueryEngine;
use pdf_rag::types::{Fragment, QueryRequest};

/// In-memory store that counts writes and can be told to fail after a
/// number of successful puts.
#[derive(Default)]
struct FakeStore {
    entries: Mutex<HashMap<String, (Fragment, Vec<f32>)>>,
    writes: Mutex<u32>,
    fail_after: Mutex<Option<u32>>,
}

impl FakeStore {
    fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn write_count(&self) -> u32 {
        *self.writes.lock()
    }

    fn fail_after(&self, n: u32) {
        *self.fail_after.lock() = Some(n);
    }

    fn heal(&self) {
        *self.fail_after.lock() = None;
    }
}

#[async_trait]
impl VectorStoreProvider for FakeStore {
    async fn list_ids(&self) -> Result<HashSet<String>> {
        Ok(self.entries.lock().keys().cloned().collect())
    }

    async fn put(&self, id: &str, fragment: &Fragment, embedding: &[f32]) -> Result<()> {
        if let Some(limit) = *self.fail_after.lock() {
            if *self.writes.lock() >= limit {
                return Err(Error::vector_store("backend unreachable"));
            }
        }
        *self.writes.lock() += 1;
        self.entries
            .lock()
            .insert(id.to_string(), (fragment.clone(), embedding.to_vec()));
        Ok(())
    }

    async fn search(&self, query_embedding: &[f32], top_k: usize) -> Result<Vec<ScoredFragment>> {
        let entries = self.entries.lock();
        let mut results: Vec<ScoredFragment> = entries
            .iter()
            .map(|(id, (fragment, embedding))| {
                let dot: f32 = query_embedding.iter().zip(embedding).map(|(a, b)| a * b).sum();
                ScoredFragment {
                    id: id.clone(),
                    fragment: fragment.clone(),
                    similarity: dot,
                }
            })
            .collect();
        results.sort_by(|a, b| b.similarity.partial_cmp(&a.similarity).unwrap());
        results.truncate(top_k);
        Ok(results)
    }

    async fn clear(&self) -> Result<()> {
        self.entries.lock().clear();
        Ok(())
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.entries.lock().len())
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }

    fn name(&self) -> &str {
        "fake"
    }
}

/// Deterministic embedder: the embedding is a function of text length
struct FakeEmbedder;

#[async_trait]
impl EmbeddingProvider for FakeEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let len = text.chars().count() as f32;
        Ok(vec![len, 1.0 / (len + 1.0)])
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }

    fn name(&self) -> &str {
        "fake"
    }
}

/// LLM that echoes a canned answer
struct FakeLlm;

#[async_trait]
impl LlmProvider for FakeLlm {
    async fn generate(&self, prompt: &str) -> Result<String> {
        Ok(format!("answer based on {} chars of prompt", prompt.len()))
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }

    fn name(&self) -> &str {
        "fake"
    }

    fn model(&self) -> &str {
        "fake-model"
    }
}

fn fragments_for(path: &str, page: u32, count: usize) -> Vec<Fragment> {
    (0..count)
        .map(|i| Fragment::new(path, page, format!("{} page {} fragment {}", path, page, i)))
        .collect()
}

#[tokio::test]
async fn empty_store_bootstrap_submits_everything() {
    let store = FakeStore::new();
    let embedder = FakeEmbedder;
    let identified = assign_fragment_ids(fragments_for("f", 0, 3));

    let indexer = IncrementalIndexer::new(store.as_ref(), &embedder);
    let report = indexer.index(&identified).await.unwrap();

    assert_eq!(report.existing, 0);
    assert_eq!(report.added, vec!["f:0:0", "f:0:1", "f:0:2"]);
    assert_eq!(report.skipped, 0);
    assert_eq!(store.write_count(), 3);
}

#[tokio::test]
async fn diff_submits_only_unseen_ids() {
    let store = FakeStore::new();
    let embedder = FakeEmbedder;
    let indexer = IncrementalIndexer::new(store.as_ref(), &embedder);

    // Seed the store with the first two fragments
    let seed = assign_fragment_ids(fragments_for("f", 0, 2));
    indexer.index(&seed).await.unwrap();
    assert_eq!(store.write_count(), 2);

    // Re-run with a third fragment appended: exactly one write
    let extended = assign_fragment_ids(fragments_for("f", 0, 3));
    let report = indexer.index(&extended).await.unwrap();

    assert_eq!(report.existing, 2);
    assert_eq!(report.added, vec!["f:0:2"]);
    assert_eq!(report.skipped, 2);
    assert_eq!(store.write_count(), 3);
}

#[tokio::test]
async fn reindexing_unchanged_input_performs_zero_writes() {
    let store = FakeStore::new();
    let embedder = FakeEmbedder;
    let indexer = IncrementalIndexer::new(store.as_ref(), &embedder);

    let mut fragments = fragments_for("a.pdf", 0, 3);
    fragments.extend(fragments_for("a.pdf", 1, 2));
    fragments.extend(fragments_for("b.pdf", 0, 4));
    let identified = assign_fragment_ids(fragments);

    indexer.index(&identified).await.unwrap();
    let first_run_writes = store.write_count();
    assert_eq!(first_run_writes, 9);

    let report = indexer.index(&identified).await.unwrap();
    assert!(report.added.is_empty());
    assert_eq!(report.skipped, 9);
    assert_eq!(store.write_count(), first_run_writes);
}

#[tokio::test]
async fn mid_batch_failure_keeps_prior_writes_and_is_resumable() {
    let store = FakeStore::new();
    let embedder = FakeEmbedder;
    let indexer = IncrementalIndexer::new(store.as_ref(), &embedder);

    let identified = assign_fragment_ids(fragments_for("f", 0, 5));

    // Backend dies after two successful writes
    store.fail_after(2);
    let err = indexer.index(&identified).await.unwrap_err();
    assert!(matches!(err, Error::VectorStore(_)));
    assert_eq!(store.len().await.unwrap(), 2);

    // Retry after the backend recovers: only the remainder is written
    store.heal();
    let report = indexer.index(&identified).await.unwrap();
    assert_eq!(report.skipped, 2);
    assert_eq!(report.added.len(), 3);
    assert_eq!(store.len().await.unwrap(), 5);
}

#[tokio::test]
async fn pipeline_rerun_adds_nothing_and_reset_clears() {
    let data_dir = tempfile::tempdir().unwrap();
    let mut config = RagConfig::default();
    config.sources.data_dir = data_dir.path().to_path_buf();

    let store = FakeStore::new();
    let embedder = FakeEmbedder;

    // Pre-existing content that a non-reset run must leave alone
    store
        .put("old.pdf:0:0", &Fragment::new("old.pdf", 0, "kept"), &[1.0, 0.5])
        .await
        .unwrap();

    let first = run_index_pipeline(&config, store.as_ref(), &embedder, false)
        .await
        .unwrap();
    assert_eq!(first.pages_loaded, 0);
    assert_eq!(first.fragments_added, 0);
    assert!(!first.reset);

    let second = run_index_pipeline(&config, store.as_ref(), &embedder, false)
        .await
        .unwrap();
    assert_eq!(second.fragments_added, 0);
    assert_eq!(store.write_count(), 1);
    assert_eq!(store.len().await.unwrap(), 1);

    let reset_run = run_index_pipeline(&config, store.as_ref(), &embedder, true)
        .await
        .unwrap();
    assert!(reset_run.reset);
    assert_eq!(store.len().await.unwrap(), 0);
}

#[tokio::test]
async fn query_against_empty_store_is_an_explicit_not_found() {
    let store = FakeStore::new();
    let engine = QueryEngine::new(store, Arc::new(FakeEmbedder), Arc::new(FakeLlm));

    let err = engine
        .answer(&QueryRequest::new("how do I build a hotel?"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::NoRelevantContent));
}

#[tokio::test]
async fn query_returns_answer_with_sources() {
    let store = FakeStore::new();
    let embedder = FakeEmbedder;
    let indexer = IncrementalIndexer::new(store.as_ref(), &embedder);
    let identified = assign_fragment_ids(fragments_for("rules.pdf", 2, 3));
    indexer.index(&identified).await.unwrap();

    let engine = QueryEngine::new(
        Arc::clone(&store) as Arc<dyn VectorStoreProvider>,
        Arc::new(FakeEmbedder),
        Arc::new(FakeLlm),
    );

    let response = engine
        .answer(&QueryRequest::new("what are the rules?").with_top_k(2))
        .await
        .unwrap();

    assert!(response.answer.starts_with("answer based on"));
    assert_eq!(response.sources.len(), 2);
    assert!(response.sources.iter().all(|s| s.starts_with("rules.pdf:2:")));
}
