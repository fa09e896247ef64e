use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::*;
use tracing_subscriber::EnvFilter;

use askpdf_cli::{ingest_file, run_session};
use askpdf_core::Config;
use askpdf_embed::FastembedEmbedder;
use askpdf_llm::TgiClient;
use askpdf_rag::{PdfProcessor, RagSystem};

#[derive(Parser)]
#[command(name = "askpdf")]
#[command(about = "Ask questions about a PDF document", long_about = None)]
struct Cli {
    /// PDF to load on startup
    #[arg(short, long)]
    pdf: Option<PathBuf>,

    /// Ask a single question and exit instead of starting a session
    #[arg(short, long, requires = "pdf")]
    question: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    println!("{} Loading embedding model...", "⚙️".blue());
    let embedder = Arc::new(FastembedEmbedder::new(&config)?);
    let generator = Arc::new(TgiClient::new(&config)?);

    let mut system = RagSystem::new(config, PdfProcessor::new(), embedder, generator);

    if let Some(path) = cli.pdf.as_deref() {
        let loaded = ingest_file(&mut system, path);

        // one-shot mode only makes sense over a loaded document
        if let Some(question) = cli.question {
            if !loaded {
                std::process::exit(1);
            }
            println!("{}", system.answer(&question).await);
            return Ok(());
        }
    }

    run_session(&mut system).await
}
