//! Resize - write fixed-size square PNG copies of an image.

mod cli;
mod error;
mod logging;
mod naming;
mod output;
mod resize;

use std::path::Path;
use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;

use crate::cli::Cli;
use crate::error::ResizeError;
use crate::resize::resize_all;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    };
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), ResizeError> {
    let input = cli.input()?;
    let output_dir = cli.output_dir.as_deref().map(Path::new);

    debug!("Input: {input}");
    if let Some(dir) = output_dir {
        debug!("Output directory: {}", dir.display());
    }

    resize_all(input, output_dir)?;

    println!("Successfully resized {input}");
    Ok(())
}
