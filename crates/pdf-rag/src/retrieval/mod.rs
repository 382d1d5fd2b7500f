//! Similarity search and answer generation

pub mod search;

pub use search::QueryEngine;
