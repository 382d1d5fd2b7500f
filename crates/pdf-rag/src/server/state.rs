//! Application state for the RAG server

use std::sync::Arc;

use crate::config::RagConfig;
use crate::error::Result;
use crate::providers::{
    EmbeddingProvider, LlmProvider, LocalVectorStore, OllamaProvider, VectorStoreProvider,
};
use crate::retrieval::QueryEngine;

/// Shared application state
///
/// Provider handles are built once at startup and passed explicitly; there
/// is no process-global store, so two servers (or tests) can run
/// side-by-side against different storage directories.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: RagConfig,
    store: Arc<dyn VectorStoreProvider>,
    embedder: Arc<dyn EmbeddingProvider>,
    llm: Arc<dyn LlmProvider>,
    engine: QueryEngine,
}

impl AppState {
    /// Create state from config, wiring the local store and Ollama providers
    pub fn new(config: RagConfig) -> Result<Self> {
        tracing::info!("Initializing RAG application state...");

        let store: Arc<dyn VectorStoreProvider> =
            Arc::new(LocalVectorStore::open(&config.store.storage_dir)?);
        tracing::info!("Vector store ready ({})", store.name());

        let (embedder, llm) = OllamaProvider::build(&config.llm)?;
        let embedder: Arc<dyn EmbeddingProvider> = Arc::new(embedder);
        let llm: Arc<dyn LlmProvider> = Arc::new(llm);
        tracing::info!(
            "Ollama providers ready (embed: {}, generate: {})",
            config.llm.embed_model,
            llm.model()
        );

        let engine = QueryEngine::new(Arc::clone(&store), Arc::clone(&embedder), Arc::clone(&llm));

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                embedder,
                llm,
                engine,
            }),
        })
    }

    /// Create state with explicit provider handles instead of the default
    /// local store + Ollama wiring
    pub fn with_providers(
        config: RagConfig,
        store: Arc<dyn VectorStoreProvider>,
        embedder: Arc<dyn EmbeddingProvider>,
        llm: Arc<dyn LlmProvider>,
    ) -> Self {
        let engine = QueryEngine::new(Arc::clone(&store), Arc::clone(&embedder), Arc::clone(&llm));
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                embedder,
                llm,
                engine,
            }),
        }
    }

    /// Configuration
    pub fn config(&self) -> &RagConfig {
        &self.inner.config
    }

    /// Vector store handle
    pub fn store(&self) -> &Arc<dyn VectorStoreProvider> {
        &self.inner.store
    }

    /// Embedding provider handle
    pub fn embedder(&self) -> &Arc<dyn EmbeddingProvider> {
        &self.inner.embedder
    }

    /// LLM provider handle
    pub fn llm(&self) -> &Arc<dyn LlmProvider> {
        &self.inner.llm
    }

    /// Query engine
    pub fn engine(&self) -> &QueryEngine {
        &self.inner.engine
    }

    /// Readiness: store reachable and providers responding
    pub async fn is_ready(&self) -> bool {
        matches!(self.inner.store.health_check().await, Ok(true))
    }
}
