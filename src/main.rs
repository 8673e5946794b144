//! Main entry point for the mkzip CLI application.
//!
//! Resolves the input and output paths, builds the archive in memory and
//! writes it only once every record was built.

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error, info};

use mkzip::{Cli, LocalFileSystem, ZipBuilder};

/// Application entry point.
///
/// Parses arguments, sets up logging at the requested verbosity and exits
/// with status 1 if the archive could not be built or written.
fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .init();

    if let Err(err) = run(&cli) {
        error!("{err:#}");
        std::process::exit(1);
    }
}

/// Build one archive according to the parsed options.
fn run(cli: &Cli) -> Result<()> {
    let input = cli.input_path()?;
    let output = cli.output_path(&input);
    let host = cli.host_system();
    debug!(
        "archiving {} into {} as {:?}",
        input.display(),
        output.display(),
        host
    );

    let builder = ZipBuilder::new(LocalFileSystem).with_host(host);
    let summary = builder
        .create(&input, &output)
        .with_context(|| format!("cannot archive {}", input.display()))?;

    info!(
        "  stored: {} ({} bytes, crc32 {:08x})",
        summary.file_name, summary.size, summary.crc32
    );
    Ok(())
}
