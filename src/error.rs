//! Error types for the deckbind library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the deckbind library
#[derive(Error, Debug)]
pub enum Error {
    /// PDF processing error
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Source file or directory not found
    #[error("source not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// The office-suite host application could not be started
    #[error("host application unavailable ({}): {source}", .program.display())]
    HostUnavailable {
        program: PathBuf,
        source: std::io::Error,
    },

    /// The host application refused or failed to export the document
    #[error("conversion of {} failed: {detail}", .path.display())]
    UnsupportedContent { path: PathBuf, detail: String },

    /// Input PDF could not be parsed
    #[error("unreadable PDF {}: {source}", .path.display())]
    UnreadablePdf {
        path: PathBuf,
        source: lopdf::Error,
    },

    /// Writing the output file failed
    #[error("failed to write {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Invalid PDF (no pages)
    #[error("PDF has no pages: {}", .0.display())]
    EmptyPdf(PathBuf),

    /// The user triggered an action without selecting its inputs
    #[error("nothing to do: {0}")]
    NoSelection(String),
}
