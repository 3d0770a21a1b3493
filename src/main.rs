//! pdfbind - Assemble PDFs and images into a single PDF.
//!
//! A CLI tool driven by a JSON configuration that lists source files,
//! directories, and glob patterns in output order.

use clap::Parser;
use log::{error, info};
use std::process;

use pdfbind::cli::Cli;
use pdfbind::error::BindError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli) {
        error!("{err}");
        process::exit(err.exit_code());
    }
}

/// Main application logic.
fn run(cli: Cli) -> Result<(), BindError> {
    let job = cli.to_job()?;

    info!("{} v{}", pdfbind::NAME, pdfbind::VERSION);
    let report = pdfbind::run(&job)?;

    info!(
        "Assembled {} pages from {} file(s) into {}",
        report.pages,
        report.processed,
        report.output.display()
    );
    if report.skipped > 0 {
        info!("Skipped {} source(s), see warnings above", report.skipped);
    }

    Ok(())
}

/// Set up env_logger: info by default, debug with `--debug`, RUST_LOG wins
/// when set.
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
