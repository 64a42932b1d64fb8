//! Batch conversion driver
//!
//! Walks a folder of presentation files and converts each one to PDF.
//! Jobs are independent: a failed conversion is logged and recorded, and
//! the batch carries on with the remaining files.

use std::fs;
use std::path::PathBuf;

use log::{error, info, warn};

use crate::convert::office::{is_presentation, PresentationConverter};
use crate::error::{Error, Result};

/// Options for one batch conversion run
#[derive(Debug, Clone)]
pub struct BulkConvertOptions {
    /// Folder whose immediate entries are scanned for presentations
    pub input_dir: PathBuf,
    /// Folder the PDFs are written into, created if missing
    pub output_dir: PathBuf,
}

/// Outcome of a single job within a batch
#[derive(Debug)]
pub struct JobOutcome {
    /// The presentation file that was attempted
    pub source: PathBuf,
    /// The written PDF path, or why the conversion failed
    pub result: Result<PathBuf>,
}

/// Per-file outcomes of a whole batch, in the order the jobs ran
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<JobOutcome>,
}

impl BatchReport {
    /// Number of files attempted
    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of successful conversions
    pub fn converted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    /// Number of failed conversions
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }
}

/// Convert every presentation file in `input_dir` to a PDF in `output_dir`.
///
/// Only the directory's immediate entries are considered, and only plain
/// files ending in `.ppt` or `.pptx` (exact case). Each destination is
/// named after its source with the extension replaced by `.pdf`, so
/// rerunning a batch overwrites its earlier outputs.
///
/// Directory enumeration order is platform-dependent; entries are sorted
/// so batches run in a stable order.
pub fn convert_all(
    converter: &dyn PresentationConverter,
    options: &BulkConvertOptions,
) -> Result<BatchReport> {
    if !options.input_dir.is_dir() {
        return Err(Error::SourceNotFound(options.input_dir.clone()));
    }
    fs::create_dir_all(&options.output_dir)?;

    let mut sources: Vec<PathBuf> = fs::read_dir(&options.input_dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|entry| entry.path())
        .filter(|path| is_presentation(path))
        .collect();
    sources.sort();

    if sources.is_empty() {
        warn!(
            "no presentation files found in {}",
            options.input_dir.display()
        );
        return Ok(BatchReport::default());
    }

    info!(
        "converting {} presentations from {} into {}",
        sources.len(),
        options.input_dir.display(),
        options.output_dir.display()
    );

    let mut outcomes = Vec::with_capacity(sources.len());
    for source in sources {
        // file_name() cannot fail here: read_dir only yields named entries.
        let destination = options
            .output_dir
            .join(source.file_name().unwrap_or_default())
            .with_extension("pdf");

        let result = converter
            .convert(&source, &destination)
            .map(|_| destination);

        if let Err(e) = &result {
            error!("conversion failed for {}: {e}", source.display());
        }

        outcomes.push(JobOutcome { source, result });
    }

    Ok(BatchReport { outcomes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    struct NoopConverter;

    impl PresentationConverter for NoopConverter {
        fn convert(&self, _source: &Path, destination: &Path) -> Result<()> {
            fs::write(destination, b"%PDF-1.5")?;
            Ok(())
        }
    }

    #[test]
    fn missing_input_dir_is_rejected() {
        let options = BulkConvertOptions {
            input_dir: PathBuf::from("no-such-folder"),
            output_dir: PathBuf::from("irrelevant"),
        };

        let result = convert_all(&NoopConverter, &options);
        assert!(matches!(result, Err(Error::SourceNotFound(_))));
    }

    // Driver behavior against populated folders is covered in
    // tests/integration.rs with a recording fake converter.
}
