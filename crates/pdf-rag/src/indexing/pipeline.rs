//! Full load -> split -> identify -> diff -> persist pipeline
//!
//! One sequential flow of control per run, shared by the CLI and the
//! populate endpoint. Concurrency across runs is the store's problem, not
//! ours.

use std::time::Instant;

use crate::config::RagConfig;
use crate::error::Result;
use crate::ingestion::{CharacterSplitter, PdfDirectoryLoader};
use crate::providers::{EmbeddingProvider, VectorStoreProvider};
use crate::types::PopulateResponse;

use super::{assign_fragment_ids, IncrementalIndexer};

/// Run the indexing pipeline over the configured source directory.
///
/// When `reset` is set, the entire store is cleared first; there is no
/// selective invalidation.
pub async fn run_index_pipeline(
    config: &RagConfig,
    store: &dyn VectorStoreProvider,
    embedder: &dyn EmbeddingProvider,
    reset: bool,
) -> Result<PopulateResponse> {
    let start = Instant::now();

    if reset {
        tracing::info!("Clearing vector store before reindex");
        store.clear().await?;
    }

    let loader = PdfDirectoryLoader::new(&config.sources.data_dir);
    let pages = loader.load_pages()?;

    let splitter =
        CharacterSplitter::new(config.chunking.chunk_size, config.chunking.chunk_overlap)?;
    let fragments = splitter.split_pages(&pages);
    tracing::info!("Split {} pages into {} fragments", pages.len(), fragments.len());

    let identified = assign_fragment_ids(fragments);

    let indexer = IncrementalIndexer::new(store, embedder);
    let report = indexer.index(&identified).await?;

    let response = PopulateResponse {
        pages_loaded: pages.len(),
        fragments_total: identified.len(),
        fragments_added: report.added_count(),
        fragments_skipped: report.skipped,
        reset,
        processing_time_ms: start.elapsed().as_millis() as u64,
    };

    tracing::info!(
        "Index run complete: {} added, {} skipped in {}ms",
        response.fragments_added,
        response.fragments_skipped,
        response.processing_time_ms
    );

    Ok(response)
}
