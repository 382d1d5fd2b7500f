//! Core types for the RAG system

pub mod document;
pub mod query;
pub mod response;

pub use document::{Fragment, IdentifiedFragment, SourcePage};
pub use query::{CompareRequest, PopulateRequest, QueryRequest};
pub use response::{CompareResponse, PopulateResponse, QueryResponse};
