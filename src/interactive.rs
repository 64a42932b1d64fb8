//! Interactive shell
//!
//! Prompt-driven front end for the two operations, for users who start the
//! tool without arguments. The prompts only collect paths and selections;
//! the work itself goes through the same request structs and driver
//! functions the CLI uses.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dialoguer::{Confirm, Input, Select};

use crate::convert::{convert_all, BulkConvertOptions, OfficeConverter};
use crate::pdf::{combine_pdfs, CombineOptions};

const DEFAULT_COMBINED_NAME: &str = "combined.pdf";

/// Run the interactive shell: pick an action, collect its inputs, run it.
pub fn run() -> Result<()> {
    let action = Select::new()
        .with_prompt("What would you like to do?")
        .items(&[
            "Convert presentations to PDF",
            "Combine PDFs into a single file",
        ])
        .default(0)
        .interact()?;

    match action {
        0 => run_convert(),
        1 => run_combine(),
        _ => unreachable!(),
    }
}

fn run_convert() -> Result<()> {
    let input_dir = prompt_existing_dir("Folder containing presentation files")?;
    let output_dir: String = Input::new()
        .with_prompt("Folder to save the PDFs into (created if missing)")
        .interact_text()?;

    let options = BulkConvertOptions {
        input_dir,
        output_dir: PathBuf::from(output_dir.trim()),
    };

    let report = convert_all(&OfficeConverter::new(), &options)
        .context("batch conversion could not start")?;

    if report.attempted() == 0 {
        println!("No .ppt or .pptx files found in that folder.");
        return Ok(());
    }

    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(dest) => println!("converted  {} -> {}", outcome.source.display(), dest.display()),
            Err(e) => println!("FAILED     {}: {e}", outcome.source.display()),
        }
    }
    println!(
        "{} converted, {} failed",
        report.converted(),
        report.failed()
    );

    Ok(())
}

fn run_combine() -> Result<()> {
    println!("Enter the PDF files to combine, one per line, in the order");
    println!("they should appear in the output. Finish with an empty line.");

    let mut selected: Vec<PathBuf> = Vec::new();
    loop {
        let entry: String = Input::new()
            .with_prompt(format!("PDF #{}", selected.len() + 1))
            .allow_empty(true)
            .interact_text()?;

        let entry = entry.trim();
        if entry.is_empty() {
            break;
        }

        let path = PathBuf::from(entry);
        if !path.is_file() {
            println!("No such file: {}", path.display());
            continue;
        }
        selected.push(path);
    }

    if selected.is_empty() {
        println!("No PDF files selected, nothing to combine.");
        return Ok(());
    }

    let output_dir = prompt_existing_dir("Output directory")?;
    let file_name: String = Input::new()
        .with_prompt("Output file name")
        .default(DEFAULT_COMBINED_NAME.to_string())
        .interact_text()?;
    let output_path = output_dir.join(ensure_pdf_extension(file_name.trim()));

    if output_path.exists() {
        let overwrite = Confirm::new()
            .with_prompt(format!("{} exists, overwrite?", output_path.display()))
            .default(true)
            .interact()?;
        if !overwrite {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let options = CombineOptions {
        input_paths: selected,
        output_path: output_path.clone(),
    };
    combine_pdfs(&options).context("failed to combine the selected PDFs")?;

    println!("Combined PDF saved as {}", output_path.display());
    Ok(())
}

/// Prompt for a directory path, re-asking until it names an existing one.
fn prompt_existing_dir(prompt: &str) -> Result<PathBuf> {
    let dir: String = Input::new()
        .with_prompt(prompt)
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            if Path::new(input.trim()).is_dir() {
                Ok(())
            } else {
                Err(format!("'{}' is not an existing directory", input.trim()))
            }
        })
        .interact_text()?;
    Ok(PathBuf::from(dir.trim()))
}

/// The combined output always carries a `.pdf` extension.
fn ensure_pdf_extension(name: &str) -> String {
    if name.is_empty() {
        DEFAULT_COMBINED_NAME.to_string()
    } else if name.to_lowercase().ends_with(".pdf") {
        name.to_string()
    } else {
        format!("{name}.pdf")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_extension_is_enforced() {
        assert_eq!(ensure_pdf_extension("combined.pdf"), "combined.pdf");
        assert_eq!(ensure_pdf_extension("Slides.PDF"), "Slides.PDF");
        assert_eq!(ensure_pdf_extension("notes"), "notes.pdf");
        assert_eq!(ensure_pdf_extension(""), DEFAULT_COMBINED_NAME);
    }
}
