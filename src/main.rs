//! acreage-seo - SEO head metadata for AcreageSale landing pages.

mod cli;

use acreage_seo::logger;
use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = cli::load_config(&cli)?;
    cli::run(&cli, &config)
}
