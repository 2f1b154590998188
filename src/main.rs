mod cli;
mod converter;
mod error;
mod filename;
mod frontmatter;
mod pandoc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let output = converter::convert(&cli)?;
    println!("ePub file created successfully: {}", output.display());

    Ok(())
}
