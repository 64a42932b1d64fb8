//! PDF combining functionality using lopdf

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use log::{debug, info};
use lopdf::{Dictionary, Document, Object, ObjectId};

use crate::error::{Error, Result};

/// Options for one combine operation
#[derive(Debug, Clone)]
pub struct CombineOptions {
    /// Input PDF file paths, in the order the user selected them
    pub input_paths: Vec<PathBuf>,
    /// Output PDF file path, overwritten if it already exists
    pub output_path: PathBuf,
}

/// Combine multiple PDF files into a single PDF.
///
/// The output contains every page of every input, in input order and then
/// in each input's own page order. The operation is all-or-nothing: any
/// missing or unreadable input, or a failure writing the output, aborts the
/// whole call and the destination file is left untouched.
///
/// # Example
///
/// ```no_run
/// use deckbind::pdf::{combine_pdfs, CombineOptions};
/// use std::path::PathBuf;
///
/// let options = CombineOptions {
///     input_paths: vec![
///         PathBuf::from("intro.pdf"),
///         PathBuf::from("slides.pdf"),
///     ],
///     output_path: PathBuf::from("combined.pdf"),
/// };
///
/// combine_pdfs(&options).expect("Failed to combine PDFs");
/// ```
pub fn combine_pdfs(options: &CombineOptions) -> Result<()> {
    if options.input_paths.is_empty() {
        return Err(Error::NoSelection(
            "no PDF files selected to combine".to_string(),
        ));
    }

    for path in &options.input_paths {
        if !path.exists() {
            return Err(Error::SourceNotFound(path.clone()));
        }
    }

    // Load and validate every input before the output is touched, so a bad
    // document in the middle of the list aborts with nothing written.
    let mut documents: Vec<Document> = Vec::with_capacity(options.input_paths.len());
    for path in &options.input_paths {
        let doc = Document::load(path).map_err(|source| Error::UnreadablePdf {
            path: path.clone(),
            source,
        })?;

        if doc.get_pages().is_empty() {
            return Err(Error::EmptyPdf(path.clone()));
        }

        debug!("loaded {} ({} pages)", path.display(), doc.get_pages().len());
        documents.push(doc);
    }

    // Move every document's objects into one ID space. get_pages() yields
    // pages in document order, so extending per document keeps the
    // concatenation order.
    let mut next_id = 1;
    let mut page_ids: Vec<ObjectId> = Vec::new();
    let mut objects: BTreeMap<ObjectId, Object> = BTreeMap::new();

    for mut doc in documents {
        doc.renumber_objects_with(next_id);
        next_id = doc.max_id + 1;

        page_ids.extend(doc.get_pages().into_iter().map(|(_, id)| id));
        objects.extend(doc.objects);
    }

    let mut combined = Document::with_version("1.5");
    combined.objects.extend(objects);

    // max_id must cover the imported objects before new_object_id() is
    // asked for fresh IDs, or the catalog would collide with a page.
    combined.max_id = next_id - 1;

    let pages_id = combined.new_object_id();

    let kids: Vec<Object> = page_ids.iter().map(|&id| Object::Reference(id)).collect();

    let mut pages_dict = Dictionary::new();
    pages_dict.set("Type", Object::Name(b"Pages".to_vec()));
    pages_dict.set("Count", Object::Integer(page_ids.len() as i64));
    pages_dict.set("Kids", Object::Array(kids));

    let catalog_id = combined.new_object_id();
    let mut catalog = Dictionary::new();
    catalog.set("Type", Object::Name(b"Catalog".to_vec()));
    catalog.set("Pages", Object::Reference(pages_id));

    combined.objects.insert(catalog_id, Object::Dictionary(catalog));
    combined.objects.insert(pages_id, Object::Dictionary(pages_dict));
    combined.trailer.set("Root", Object::Reference(catalog_id));

    // Every page now hangs off the rebuilt page tree.
    for &page_id in &page_ids {
        if let Ok(Object::Dictionary(dict)) = combined.get_object_mut(page_id) {
            dict.set("Parent", Object::Reference(pages_id));
        }
    }

    combined.compress();

    // Serialize in memory first; the destination sees either the complete
    // document or nothing.
    let mut buffer = Vec::new();
    combined.save_to(&mut buffer)?;
    fs::write(&options.output_path, &buffer).map_err(|source| Error::OutputWrite {
        path: options.output_path.clone(),
        source,
    })?;

    info!(
        "combined {} inputs into {} ({} pages)",
        options.input_paths.len(),
        options.output_path.display(),
        page_ids.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_is_rejected() {
        let options = CombineOptions {
            input_paths: vec![],
            output_path: PathBuf::from("out.pdf"),
        };

        let result = combine_pdfs(&options);
        assert!(matches!(result, Err(Error::NoSelection(_))));
    }

    #[test]
    fn missing_input_is_rejected() {
        let options = CombineOptions {
            input_paths: vec![PathBuf::from("no-such-file.pdf")],
            output_path: PathBuf::from("out.pdf"),
        };

        let result = combine_pdfs(&options);
        assert!(matches!(result, Err(Error::SourceNotFound(_))));
    }
}
