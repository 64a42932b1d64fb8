//! Deckbind Library
//!
//! Converts presentation decks to PDF by driving a headless office suite,
//! and combines PDF files into a single document. This library provides
//! functionality to:
//! - Convert a folder of `.ppt`/`.pptx` files to PDFs, one by one
//! - Combine an ordered selection of PDFs into one output PDF
//! - Extract metadata (page counts, etc.)
//!
//! # Example
//!
//! ```no_run
//! use deckbind::pdf::{combine_pdfs, CombineOptions};
//! use std::path::PathBuf;
//!
//! let options = CombineOptions {
//!     input_paths: vec![
//!         PathBuf::from("1. intro.pdf"),
//!         PathBuf::from("2. advanced.pdf"),
//!     ],
//!     output_path: PathBuf::from("combined.pdf"),
//! };
//!
//! combine_pdfs(&options).expect("Failed to combine PDFs");
//! ```

pub mod convert;
pub mod error;
pub mod interactive;
pub mod pdf;

// Re-export commonly used items
pub use error::{Error, Result};
