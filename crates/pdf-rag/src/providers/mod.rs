//! Provider abstractions for embeddings, LLM, and vector storage
//!
//! Trait-based collaborator interfaces so the identification and diff logic
//! can be exercised against in-memory fakes, independent of any real
//! backend.

pub mod embedding;
pub mod llm;
pub mod local;
pub mod ollama;
pub mod vector_store;

pub use embedding::EmbeddingProvider;
pub use llm::LlmProvider;
pub use local::LocalVectorStore;
pub use ollama::{OllamaEmbedder, OllamaLlm, OllamaProvider};
pub use vector_store::{ScoredFragment, VectorStoreProvider};
