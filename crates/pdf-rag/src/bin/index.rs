//! Indexing CLI
//!
//! Loads PDFs, splits them, and writes only the fragments not yet in the
//! store. `--reset` clears the whole store first.
//!
//! Run with: cargo run -p pdf-rag --bin pdf-rag-index -- --reset

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pdf_rag::config::RagConfig;
use pdf_rag::indexing::run_index_pipeline;
use pdf_rag::providers::{LocalVectorStore, OllamaProvider};

#[derive(Parser)]
#[command(name = "pdf-rag-index", about = "Index a directory of PDFs into the vector store")]
struct Args {
    /// Clear the entire store before reindexing
    #[arg(long)]
    reset: bool,

    /// Directory of PDFs to index (overrides config)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Storage directory for the vector store (overrides config)
    #[arg(long)]
    store_dir: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pdf_rag=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let mut config = RagConfig::load_or_default(args.config.as_deref())?;
    if let Some(data_dir) = args.data_dir {
        config.sources.data_dir = data_dir;
    }
    if let Some(store_dir) = args.store_dir {
        config.store.storage_dir = store_dir;
    }

    let store = LocalVectorStore::open(&config.store.storage_dir)?;
    let (embedder, _llm) = OllamaProvider::build(&config.llm)?;

    let report = run_index_pipeline(&config, &store, &embedder, args.reset).await?;

    println!(
        "Indexed {} pages / {} fragments: {} added, {} skipped ({}ms)",
        report.pages_loaded,
        report.fragments_total,
        report.fragments_added,
        report.fragments_skipped,
        report.processing_time_ms
    );

    Ok(())
}
