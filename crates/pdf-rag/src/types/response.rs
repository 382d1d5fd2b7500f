//! Response types for the HTTP API

use serde::{Deserialize, Serialize};

/// Answer to a RAG query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Generated answer text
    pub answer: String,
    /// Fragment ids of the retrieved context, closest first
    pub sources: Vec<String>,
    /// Total processing time in milliseconds
    pub processing_time_ms: u64,
}

impl QueryResponse {
    /// Create a new query response
    pub fn new(answer: String, sources: Vec<String>, processing_time_ms: u64) -> Self {
        Self {
            answer,
            sources,
            processing_time_ms,
        }
    }
}

/// Result of comparing two queries via their best-matching fragments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareResponse {
    pub query_1: String,
    pub query_2: String,
    /// Cosine similarity between the matched fragments' embeddings
    pub similarity_score: f32,
    /// Fragment id matched by the first query
    pub source_1: String,
    /// Fragment id matched by the second query
    pub source_2: String,
}

/// Outcome of an indexing run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulateResponse {
    /// Pages loaded from the source directory
    pub pages_loaded: usize,
    /// Fragments produced by the splitter
    pub fragments_total: usize,
    /// Fragments embedded and written this run
    pub fragments_added: usize,
    /// Fragments already present, skipped
    pub fragments_skipped: usize,
    /// Whether the store was cleared before indexing
    pub reset: bool,
    /// Total processing time in milliseconds
    pub processing_time_ms: u64,
}
