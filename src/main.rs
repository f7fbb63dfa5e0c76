//! CLI entry point for the overlapping pattern catalog

use clap::Parser;
use wfc_overlap::io::cli::{CatalogProcessor, Cli, init_logging};

fn main() -> wfc_overlap::Result<()> {
    let cli = Cli::parse();
    let _logger = init_logging(cli.quiet)?;
    let processor = CatalogProcessor::new(cli);
    processor.process().map(|_summary| ())
}
