// src/main.rs
use color_eyre::eyre::Result;

use oc_scrape::cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    cli::run()
}
