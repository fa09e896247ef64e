//! Interactive session loop

use std::fs;
use std::path::Path;

use colored::*;

use askpdf_core::{DocumentProcessor, EmbeddingProvider, GenerationProvider};
use askpdf_rag::RagSystem;

use crate::ui::{display_banner, print_help, read_input};

/// Load a PDF from disk into the system
///
/// Prints the outcome instead of propagating it; a bad path or a broken
/// PDF should not end the session.
pub fn ingest_file<P, E, G>(system: &mut RagSystem<P, E, G>, path: &Path) -> bool
where
    P: DocumentProcessor,
    E: EmbeddingProvider,
    G: GenerationProvider,
{
    println!("{} Loading {}...", "📄".blue(), path.display());

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            println!("{} Could not read {}: {}", "❌".red(), path.display(), e);
            return false;
        }
    };

    if system.ingest(&bytes) {
        println!("{} PDF loaded, ask away", "✅".green());
        true
    } else {
        println!(
            "{} Could not index {}, is it a valid PDF with extractable text?",
            "❌".red(),
            path.display()
        );
        false
    }
}

/// Run the interactive question-answering loop
pub async fn run_session<P, E, G>(system: &mut RagSystem<P, E, G>) -> anyhow::Result<()>
where
    P: DocumentProcessor,
    E: EmbeddingProvider,
    G: GenerationProvider,
{
    display_banner();

    loop {
        let Some(input) = read_input()? else {
            break;
        };

        if input.is_empty() {
            continue;
        }

        let input_lower = input.to_lowercase();

        if input_lower == "exit" || input_lower == "quit" {
            println!("{}", "👋 Goodbye!".green());
            break;
        }

        if input_lower == "help" {
            print_help();
            continue;
        }

        if let Some(path) = input.strip_prefix("load ") {
            ingest_file(system, Path::new(path.trim()));
            continue;
        }

        if !system.is_ready() {
            println!(
                "{} No PDF loaded yet, use {} first",
                "⚠️".yellow(),
                "load <path>".green()
            );
            continue;
        }

        println!("{} Thinking...", "🤖".blue());
        let answer = system.answer(&input).await;
        println!("{} {}", "→".green(), answer);
    }

    Ok(())
}
