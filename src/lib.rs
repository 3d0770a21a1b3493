//! # pdfbind
//!
//! Configuration-driven assembly of PDFs and images into a single PDF.
//!
//! A JSON manifest lists source entries in the order their pages should
//! appear. Each entry is a path spec (file, directory, or glob pattern),
//! optionally grouped with transform options such as `rotate90` or `flipH`.
//! The library expands the manifest into concrete work items, converts each
//! source to PDF pages (raster images become single full-bleed pages), and
//! appends everything to one output document.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use pdfbind::{CollisionPolicy, Job};
//!
//! let job = Job {
//!     manifest: PathBuf::from("config.json"),
//!     output: PathBuf::from("book.pdf"),
//!     collision: CollisionPolicy::Abort,
//! };
//! let report = pdfbind::run(&job)?;
//! println!("{} pages written to {}", report.pages, report.output.display());
//! # Ok::<(), pdfbind::BindError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assemble;
pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod expand;
pub mod flatten;
pub mod options;

use std::path::PathBuf;

use log::{info, warn};

pub use config::{CollisionPolicy, Job, Manifest};
pub use error::{BindError, Result};

use assemble::{Assembler, writer};

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Summary of one completed assembly run.
#[derive(Debug)]
pub struct RunReport {
    /// Source files whose pages made it into the output.
    pub processed: usize,
    /// Path specs and files skipped as recoverable failures.
    pub skipped: usize,
    /// Total pages in the output document.
    pub pages: usize,
    /// Where the output was actually written (differs from the requested
    /// path under the rename collision policy).
    pub output: PathBuf,
}

/// Execute one assembly run described by `job`.
///
/// Configuration problems and output collisions surface before any source
/// file is opened. Per-item failures (missing paths, unreadable or
/// unsupported sources) are logged and skipped; the run only fails outright
/// if every item is skipped.
///
/// # Errors
///
/// Any [`BindError`] from the configuration, collision, assembly, or write
/// stages; [`BindError::NothingToBind`] if no pages were produced.
pub fn run(job: &Job) -> Result<RunReport> {
    job.validate()?;
    let manifest = Manifest::load(&job.manifest)?;

    // Decide the output path up front so an abort-policy collision fails
    // before any conversion work starts.
    let output = writer::resolve_collision(&job.output, job.collision)?;

    let flattened = flatten::flatten(&manifest.files)?;
    let mut skipped = flattened.missing.len();
    let mut processed = 0usize;

    let mut assembler = Assembler::new();
    for item in &flattened.items {
        info!("Processing {}", item.path.display());
        match convert::convert(item) {
            Ok(doc) => {
                assembler.append(doc)?;
                processed += 1;
            }
            Err(err) if err.is_recoverable() => {
                warn!("Skipping {}: {err}", item.path.display());
                skipped += 1;
            }
            Err(err) => return Err(err),
        }
    }

    if processed == 0 {
        return Err(BindError::NothingToBind);
    }

    let pages = assembler.page_count();
    writer::write_document(assembler.into_document(), &output)?;

    Ok(RunReport {
        processed,
        skipped,
        pages,
        output,
    })
}
