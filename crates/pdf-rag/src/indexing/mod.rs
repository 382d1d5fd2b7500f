//! Stable fragment identification and incremental indexing
//!
//! This is the part of the pipeline that decides which fragments are new:
//! [`identifier`] assigns deterministic ids, [`indexer`] diffs them against
//! the persisted store and writes only the unseen ones.

pub mod identifier;
pub mod indexer;
pub mod pipeline;

pub use identifier::assign_fragment_ids;
pub use indexer::{IncrementalIndexer, IndexReport};
pub use pipeline::run_index_pipeline;
