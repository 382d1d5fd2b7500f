//! Query-time pipeline: embed, search, prompt, generate

use std::sync::Arc;
use std::time::Instant;

use crate::error::{Error, Result};
use crate::generation::PromptBuilder;
use crate::providers::local::cosine_similarity;
use crate::providers::{EmbeddingProvider, LlmProvider, VectorStoreProvider};
use crate::types::{CompareRequest, CompareResponse, QueryRequest, QueryResponse};

/// Answers questions against the vector store.
///
/// Holds explicit provider handles scoped to this engine; nothing here
/// reaches for process-global state.
pub struct QueryEngine {
    store: Arc<dyn VectorStoreProvider>,
    embedder: Arc<dyn EmbeddingProvider>,
    llm: Arc<dyn LlmProvider>,
}

impl QueryEngine {
    /// Create an engine over the given providers
    pub fn new(
        store: Arc<dyn VectorStoreProvider>,
        embedder: Arc<dyn EmbeddingProvider>,
        llm: Arc<dyn LlmProvider>,
    ) -> Self {
        Self {
            store,
            embedder,
            llm,
        }
    }

    /// Answer a question from the indexed fragments.
    ///
    /// Zero search results surface as [`Error::NoRelevantContent`] rather
    /// than an empty or fabricated answer.
    pub async fn answer(&self, request: &QueryRequest) -> Result<QueryResponse> {
        let start = Instant::now();
        tracing::info!("Query: \"{}\"", request.query_text);

        let query_embedding = self.embedder.embed(&request.query_text).await?;
        let results = self.store.search(&query_embedding, request.top_k).await?;

        if results.is_empty() {
            return Err(Error::NoRelevantContent);
        }

        let context = PromptBuilder::build_context(&results);
        let prompt = PromptBuilder::build_qa_prompt(&request.query_text, &context);
        tracing::debug!("Generated prompt ({} chars)", prompt.len());

        let answer = self.llm.generate(&prompt).await?;
        let sources = results.into_iter().map(|r| r.id).collect();

        let processing_time_ms = start.elapsed().as_millis() as u64;
        tracing::info!("Query completed in {}ms", processing_time_ms);

        Ok(QueryResponse::new(answer, sources, processing_time_ms))
    }

    /// Compare two queries by the similarity of their best-matching
    /// fragments' embeddings.
    pub async fn compare(&self, request: &CompareRequest) -> Result<CompareResponse> {
        let top_1 = self.best_match(&request.query_1).await?;
        let top_2 = self.best_match(&request.query_2).await?;

        let embedding_1 = self.embedder.embed(&top_1.1).await?;
        let embedding_2 = self.embedder.embed(&top_2.1).await?;

        Ok(CompareResponse {
            query_1: request.query_1.clone(),
            query_2: request.query_2.clone(),
            similarity_score: cosine_similarity(&embedding_1, &embedding_2),
            source_1: top_1.0,
            source_2: top_2.0,
        })
    }

    /// Top-1 search for a query; not finding anything is a not-found error
    async fn best_match(&self, query: &str) -> Result<(String, String)> {
        let embedding = self.embedder.embed(query).await?;
        let results = self.store.search(&embedding, 1).await?;
        let top = results.into_iter().next().ok_or(Error::NoRelevantContent)?;
        Ok((top.id, top.fragment.content))
    }
}
