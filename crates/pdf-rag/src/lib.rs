//! pdf-rag: PDF question-answering with incremental indexing
//!
//! Loads a directory of PDFs page by page, splits pages into overlapping
//! character fragments, assigns each fragment a deterministic id
//! (`source_path:page:position`), and persists only the fragments whose
//! ids are not yet in the vector store. Questions are answered by
//! similarity search over the stored embeddings plus an Ollama-hosted
//! model, behind a thin axum API.

pub mod config;
pub mod error;
pub mod generation;
pub mod indexing;
pub mod ingestion;
pub mod providers;
pub mod retrieval;
pub mod server;
pub mod types;

pub use config::RagConfig;
pub use error::{Error, Result};
pub use types::{
    document::{Fragment, IdentifiedFragment, SourcePage},
    query::QueryRequest,
    response::QueryResponse,
};
