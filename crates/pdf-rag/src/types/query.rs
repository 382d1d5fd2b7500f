//! Request types for the HTTP API

use serde::{Deserialize, Serialize};

/// Query request for RAG search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    /// The question to answer
    pub query_text: String,

    /// Number of fragments to retrieve (default: 5)
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_top_k() -> usize {
    5
}

impl QueryRequest {
    /// Create a new query with default settings
    pub fn new(query_text: impl Into<String>) -> Self {
        Self {
            query_text: query_text.into(),
            top_k: default_top_k(),
        }
    }

    /// Set the number of fragments to retrieve
    pub fn with_top_k(mut self, k: usize) -> Self {
        self.top_k = k;
        self
    }
}

/// Request to compare two queries by the similarity of their best matches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareRequest {
    pub query_1: String,
    pub query_2: String,
}

/// Request to (re)populate the vector store from the source directory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PopulateRequest {
    /// Delete the entire store before reindexing. Whole-store deletion only;
    /// there is no selective invalidation.
    #[serde(default)]
    pub reset: bool,
}
