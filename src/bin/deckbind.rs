//! Deckbind CLI tool
//!
//! A command-line tool for converting presentation decks to PDF and
//! combining PDFs. Run without a subcommand for the interactive shell.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use glob::glob;
use std::path::{Path, PathBuf};
use std::process;

use deckbind::convert::{convert_all, BulkConvertOptions, OfficeConverter};
use deckbind::pdf::{combine_pdfs, extract_metadata, CombineOptions};

/// Deckbind - Convert presentations to PDF and combine PDFs
#[derive(Parser)]
#[command(name = "deckbind")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Convert every .ppt/.pptx in a folder to PDF
    deckbind convert ./decks -o ./pdfs

    # Use a specific LibreOffice binary
    deckbind convert ./decks -o ./pdfs --soffice /usr/bin/soffice

    # Combine PDFs in the given order and open the result
    deckbind combine intro.pdf slides.pdf notes.pdf -o handout.pdf --open

    # Start the interactive shell
    deckbind")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert every presentation in a folder to PDF
    Convert {
        /// Folder containing .ppt/.pptx files
        input_dir: PathBuf,

        /// Folder the PDFs are written into (created if missing)
        #[arg(short, long)]
        output_dir: PathBuf,

        /// Office-suite binary used for the conversion
        #[arg(long, default_value = "soffice")]
        soffice: PathBuf,
    },

    /// Combine PDF files into a single document
    Combine {
        /// Input PDF files, combined in the order given. Supports glob patterns like "*.pdf"
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Output PDF file path
        #[arg(short, long, default_value = "combined.pdf")]
        output: PathBuf,

        /// Open the output file after creation
        #[arg(long)]
        open: bool,
    },

    /// Show information about a PDF file
    Info {
        /// PDF file to inspect
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input_dir,
            output_dir,
            soffice,
        }) => cmd_convert(input_dir, output_dir, soffice),
        Some(Commands::Combine {
            inputs,
            output,
            open,
        }) => cmd_combine(inputs, output, open),
        Some(Commands::Info { input }) => cmd_info(input),
        None => deckbind::interactive::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

/// Expand glob patterns in input paths.
///
/// Argument order is preserved — the user's selection order is the combine
/// order. Matches of a single pattern are sorted lexicographically.
fn expand_globs(patterns: Vec<String>) -> anyhow::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for pattern in patterns {
        if pattern.contains('*') || pattern.contains('?') || pattern.contains('[') {
            let mut matched = Vec::new();
            for entry in
                glob(&pattern).with_context(|| format!("invalid glob pattern: {pattern}"))?
            {
                match entry {
                    Ok(path) => matched.push(path),
                    Err(e) => eprintln!("Warning: glob error for {pattern}: {e}"),
                }
            }
            if matched.is_empty() {
                bail!("no files matched pattern: {pattern}");
            }
            matched.sort();
            paths.extend(matched);
        } else {
            // No glob characters, treat as literal path
            paths.push(PathBuf::from(pattern));
        }
    }

    Ok(paths)
}

/// Open a file with the system default application
fn open_file(path: &Path) -> anyhow::Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(path).spawn()?;
    }
    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(path).spawn()?;
    }
    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", "", &path.display().to_string()])
            .spawn()?;
    }
    Ok(())
}

/// Convert every presentation in a folder
fn cmd_convert(input_dir: PathBuf, output_dir: PathBuf, soffice: PathBuf) -> anyhow::Result<()> {
    let converter = OfficeConverter::with_program(soffice);
    let options = BulkConvertOptions {
        input_dir,
        output_dir,
    };

    let report = convert_all(&converter, &options)?;

    if report.attempted() == 0 {
        eprintln!(
            "No .ppt or .pptx files found in {}",
            options.input_dir.display()
        );
        return Ok(());
    }

    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(dest) => eprintln!("converted  {} -> {}", outcome.source.display(), dest.display()),
            Err(e) => eprintln!("FAILED     {}: {e}", outcome.source.display()),
        }
    }
    eprintln!(
        "{} converted, {} failed",
        report.converted(),
        report.failed()
    );

    // Partial failure is tolerated; a batch where nothing succeeded is not.
    if report.converted() == 0 {
        bail!("all {} conversions failed", report.failed());
    }

    Ok(())
}

/// Combine multiple PDFs into one
fn cmd_combine(inputs: Vec<String>, output: PathBuf, open: bool) -> anyhow::Result<()> {
    let inputs = expand_globs(inputs)?;

    eprintln!("Combining {} PDF files...", inputs.len());

    let options = CombineOptions {
        input_paths: inputs,
        output_path: output.clone(),
    };

    combine_pdfs(&options)?;

    eprintln!("Combined to: {}", output.display());

    if open {
        open_file(&output)?;
    }

    Ok(())
}

/// Show information about a PDF
fn cmd_info(input: PathBuf) -> anyhow::Result<()> {
    let metadata = extract_metadata(&input)?;

    println!("File: {}", input.display());
    println!("Pages: {}", metadata.page_count);

    if let Some(title) = metadata.title {
        println!("Title: {title}");
    }
    if let Some(author) = metadata.author {
        println!("Author: {author}");
    }

    Ok(())
}
