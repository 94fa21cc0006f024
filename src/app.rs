// Declare modules
pub mod cli;
pub mod config;
pub mod formatter;
pub mod models;
pub mod scanner;

use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use self::cli::Cli;
use self::config::resolve_config;
use self::formatter::BundleWriter;
use self::models::{BundleConfig, BundleReport};
use self::scanner::Scanner;

/// Bundles the current directory into the configured output file.
pub fn run() -> Result<()> {
    // 1. Parse Args (only --help/--version)
    let _args = Cli::parse();

    // 2. Fixed configuration
    let config = resolve_config();

    // 3. Bundle from the working directory
    let current_dir = env::current_dir().context("Failed to get current directory")?;
    let report = bundle(&current_dir, &config.output_file, &config)?;

    log::info!(
        "Bundled {} files ({} unreadable, {} directories skipped)",
        report.files_written,
        report.read_errors,
        report.walk_errors
    );

    // 4. Completion line on stdout
    println!(
        "Done! Upload '{}' to the chat.",
        config.output_file.display()
    );

    Ok(())
}

/// Walks `root` and writes every selected file into `output`, truncating it.
///
/// Unreadable files are recorded inline and do not stop the run. The output
/// handle is dropped on every return path.
pub fn bundle(root: &Path, output: &Path, config: &BundleConfig) -> Result<BundleReport> {
    let scanner = Scanner::new(root.to_path_buf(), config)?;

    let file = File::create(output)
        .with_context(|| format!("Failed to open output file {}", output.display()))?;
    let mut writer = BundleWriter::new(BufWriter::new(file));

    let outcome = scanner.scan();
    let mut report = BundleReport {
        walk_errors: outcome.walk_errors,
        ..BundleReport::default()
    };

    for entry in &outcome.entries {
        let read_ok = writer
            .write_entry(entry)
            .with_context(|| format!("Failed to write to {}", output.display()))?;
        report.files_written += 1;
        if !read_ok {
            report.read_errors += 1;
        }
    }

    writer
        .finish()
        .with_context(|| format!("Failed to flush {}", output.display()))?;

    Ok(report)
}
