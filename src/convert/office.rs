//! Presentation-to-PDF conversion through an external office suite

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::{debug, info};

use crate::error::{Error, Result};

/// File extensions the conversion accepts (case-sensitive)
pub const PRESENTATION_EXTENSIONS: &[&str] = &["ppt", "pptx"];

/// Capability interface for converting one presentation file to a PDF.
///
/// The production implementation drives an installed office suite; tests
/// substitute a fake so the batch driver can run without one.
pub trait PresentationConverter {
    /// Convert the presentation at `source` into a PDF at `destination`.
    fn convert(&self, source: &Path, destination: &Path) -> Result<()>;
}

/// Converts presentations by running LibreOffice in headless mode.
///
/// Each call spawns one host process with no visible window, exports the
/// document as PDF and waits for the process to exit. `Command::output`
/// only returns once the host has terminated, so no host instance outlives
/// a call on any exit path.
#[derive(Debug, Clone)]
pub struct OfficeConverter {
    program: PathBuf,
}

impl OfficeConverter {
    /// Converter using the `soffice` binary found on PATH
    pub fn new() -> Self {
        Self::with_program("soffice")
    }

    /// Converter using a specific office-suite binary
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for OfficeConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl PresentationConverter for OfficeConverter {
    fn convert(&self, source: &Path, destination: &Path) -> Result<()> {
        if !source.is_file() {
            return Err(Error::SourceNotFound(source.to_path_buf()));
        }

        let stem = source
            .file_stem()
            .ok_or_else(|| Error::SourceNotFound(source.to_path_buf()))?;

        let out_dir = match destination.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(out_dir)?;

        debug!(
            "exporting {} via {}",
            source.display(),
            self.program.display()
        );

        let output = Command::new(&self.program)
            .arg("--headless")
            .arg("--norestore")
            .arg("--convert-to")
            .arg("pdf")
            .arg("--outdir")
            .arg(out_dir)
            .arg(source)
            .output()
            .map_err(|e| Error::HostUnavailable {
                program: self.program.clone(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(Error::UnsupportedContent {
                path: source.to_path_buf(),
                detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        // The host always names its output <stem>.pdf inside --outdir.
        let produced = out_dir.join(stem).with_extension("pdf");
        if !produced.is_file() {
            return Err(Error::UnsupportedContent {
                path: source.to_path_buf(),
                detail: format!("host reported success but {} is missing", produced.display()),
            });
        }

        if produced != destination {
            fs::rename(&produced, destination).map_err(|e| Error::OutputWrite {
                path: destination.to_path_buf(),
                source: e,
            })?;
        }

        info!("converted {} to {}", source.display(), destination.display());
        Ok(())
    }
}

/// Does this path name a presentation file we convert?
pub(crate) fn is_presentation(path: &Path) -> bool {
    match path.extension() {
        Some(ext) => PRESENTATION_EXTENSIONS.iter().any(|&e| ext == e),
        None => false,
    }
}
