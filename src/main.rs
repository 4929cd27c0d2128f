//! CLI entry point for scoring images for generative-model artifacts

use clap::Parser;
use fakescope::io::cli::{Cli, FileProcessor};
use fakescope::io::logging;

fn main() -> fakescope::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let mut processor = FileProcessor::new(cli);
    processor.process()?;
    Ok(())
}
