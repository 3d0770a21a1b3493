//! CLI argument parsing for pdfbind.
//!
//! This module defines the command-line interface structure using `clap`.
//! It handles argument parsing, validation, and help text generation.
//!
//! # Examples
//!
//! ```no_run
//! use pdfbind::cli::Cli;
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! let job = cli.to_job().expect("Invalid configuration");
//! ```

use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::{CollisionPolicy, Job};
use crate::error::Result;

/// Assemble PDFs and images into a single PDF, driven by a JSON config.
///
/// pdfbind reads a JSON manifest listing source files, directories, and glob
/// patterns in the order their pages should appear, applies per-group
/// transforms (rotation, flips), and writes one combined PDF.
#[derive(Parser, Debug)]
#[command(name = "pdfbind")]
#[command(version)]
#[command(about = "Assemble PDFs and images into a single PDF", long_about = None)]
#[command(author)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// JSON configuration file describing the sources to assemble
    ///
    /// The manifest's "files" array lists path specs in output order.
    /// An entry is either a bare path spec or an object grouping specs
    /// with shared options:
    ///
    ///   { "files": ["scans/"], "options": ["rotate90", "recursive"] }
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Output PDF file path
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// What to do when the output file already exists
    ///
    /// - abort: exit with an error, write nothing (default)
    /// - overwrite: replace the existing file
    /// - rename: write next to it with a numeric suffix
    #[arg(long, value_name = "POLICY", default_value = "abort")]
    #[arg(value_parser = ["overwrite", "rename", "abort"])]
    pub on_collision: String,

    /// Enable debug logging
    ///
    /// Shows per-file expansion, conversion, and assembly detail.
    /// Equivalent to RUST_LOG=debug.
    #[arg(short, long)]
    pub debug: bool,
}

impl Cli {
    /// Convert CLI arguments into a validated [`Job`].
    ///
    /// # Errors
    ///
    /// Returns an error if the collision policy string is invalid or the
    /// job fails validation (empty output path, output equal to the config
    /// path).
    pub fn to_job(&self) -> Result<Job> {
        let collision = CollisionPolicy::from_str(&self.on_collision)?;

        let job = Job {
            manifest: self.config.clone(),
            output: self.output.clone(),
            collision,
        };
        job.validate()?;

        Ok(job)
    }
}
