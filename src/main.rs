// src/main.rs
mod extractors;
mod input;
mod output;
mod utils;

use clap::{ArgGroup, Parser};
use extractors::{build_tree, scan_headings, SectionExtractor};
use output::OutputWriter;
use std::path::PathBuf;
use std::process::ExitCode;
use utils::AppError;

/// Lightweight Markdown CLI for heading tree and section extraction
#[derive(Parser, Debug)]
#[command(name = "md-index", author, version, about, long_about = None)]
#[command(group(ArgGroup::new("mode").required(true).args(["tree", "section"])))]
struct Args {
    /// Show heading tree
    #[arg(long)]
    tree: bool,

    /// Extract specific section by heading name
    #[arg(short, long, value_name = "HEADING")]
    section: Option<String>,

    /// Markdown file path (or '-' for stdin)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Emit JSON instead of plain text
    #[arg(long)]
    json: bool,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    utils::logging::setup_logging(args.verbose);
    tracing::debug!("Starting with args: {:?}", args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Exiting with error: {:?}", e);
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let content = input::read_input(args.file.as_deref())?;
    let headings = scan_headings(&content);

    let rendered = match &args.section {
        Some(name) => {
            let section = SectionExtractor::new().extract(&content, &headings, name)?;
            tracing::info!("Extracted section '{}' ({} bytes)", section.heading.text, section.content.len());
            if args.json {
                output::section_json(&section)?
            } else {
                output::render_section(&section)
            }
        }
        None => {
            let forest = build_tree(&headings);
            if args.json {
                output::tree_json(&forest)?
            } else {
                output::render_tree(&forest)
            }
        }
    };

    OutputWriter::new(args.output.as_ref()).write(&rendered)?;
    Ok(())
}
