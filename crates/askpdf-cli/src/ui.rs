//! UI utilities for the CLI

use std::io::{self, BufRead, Write};

use colored::*;

use askpdf_core::Result;

const BANNER_WIDTH: usize = 62;

/// Display the startup banner
pub fn display_banner() {
    let top_border = format!("┌{}┐", "─".repeat(BANNER_WIDTH - 2));
    let bottom_border = format!("└{}┘", "─".repeat(BANNER_WIDTH - 2));
    let empty_line = format!("│{}│", " ".repeat(BANNER_WIDTH - 2));

    println!();
    println!("{}", top_border.blue());
    println!("{}", empty_line.blue());

    let title = "askpdf - Question & Answer over your PDF";
    println!(
        "│  {}{}│",
        title.blue().bold(),
        " ".repeat(BANNER_WIDTH - title.len() - 4)
    );

    println!("{}", empty_line.blue());

    let feature_lines = [
        "Ask questions about a loaded PDF document",
        "",
        "Commands:",
        "• load <path>  load a PDF and (re)build the index",
        "• help         show available commands",
        "• exit/quit    leave the session",
    ];

    for line in feature_lines {
        if line.is_empty() {
            println!("{}", empty_line.blue());
        } else {
            let content = format!(
                "│  {}{}│",
                line,
                " ".repeat(BANNER_WIDTH - line.chars().count() - 4)
            );
            println!("{}", content.blue());
        }
    }

    println!("{}", empty_line.blue());
    println!("{}", bottom_border.blue());
    println!();
    println!(
        "{}",
        "💡 Tip: load a PDF first, then type your question".dimmed()
    );
    println!();
}

/// Read one line of input from the prompt
///
/// Returns `Ok(None)` on end of input so a piped session terminates
/// cleanly instead of spinning.
pub fn read_input() -> Result<Option<String>> {
    print!("{} ", "askpdf>".green().bold());
    io::stdout().flush()?;

    let mut input = String::new();
    let bytes = io::stdin().lock().read_line(&mut input)?;
    if bytes == 0 {
        println!();
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

/// Display help message
pub fn print_help() {
    println!("{}", "Available commands:".bold());
    println!(
        "  {} - Load a PDF document and build the index",
        "load <path>".green()
    );
    println!("  {} - Show this help message", "help".green());
    println!("  {} - Exit the application", "exit/quit".green());
    println!();
    println!("{}", "Anything else is answered from the loaded PDF:".bold());
    println!("  What is the warranty period?");
    println!("  Who are the parties to this agreement?");
}
