//! PDF manipulation module

pub mod combine;
pub mod metadata;

// Re-export commonly used items
pub use combine::{combine_pdfs, CombineOptions};
pub use metadata::{count_pages, extract_metadata, PdfMetadata};
