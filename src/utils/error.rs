// src/utils/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Maximum number of candidate headings listed in an ambiguity error.
pub const MAX_LISTED_CANDIDATES: usize = 5;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum InputError {
    #[error("No input provided. Specify a file or pipe stdin.")]
    NoInput,

    #[error("Failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Section '{name}' not found")]
    SectionNotFound { name: String },

    // `candidates` holds at most MAX_LISTED_CANDIDATES texts; `truncated` marks that more matched.
    #[error(
        "Section '{name}' matched multiple headings: {}",
        list_candidates(.candidates, .truncated)
    )]
    SectionAmbiguous {
        name: String,
        candidates: Vec<String>,
        truncated: bool,
    },
}

fn list_candidates(candidates: &[String], truncated: &bool) -> String {
    let suffix = if *truncated { "..." } else { "" };
    format!("{}{}", candidates.join(", "), suffix)
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Extraction(#[from] ExtractError),

    #[error("Output failed: {0}")]
    Output(#[from] OutputError),
}
