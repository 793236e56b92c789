//! Smart Calendar - Main Entry Point
//!
//! This is the main entry point for the interactive calendar.
//! The actual implementation is in the `smart_calendar` library.

use anyhow::Result;
use clap::Parser;
use smart_calendar::{Config, LocalClock, Session, Storage};
use std::path::PathBuf;

/// Smart Calendar - notes and birthdays with countdowns
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the task file (line-delimited JSON)
    file: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match args.config {
        Some(ref path) => Config::load(path)?,
        None => Config::default(),
    }
    .with_overrides(args.file, args.verbose);

    let mut logger = env_logger::Builder::new();
    logger.filter_level(config.level_filter());
    if !args.verbose {
        logger.parse_default_env();
    }
    logger.init();

    let storage = Storage::new(&config.data_file);
    let store = storage.load()?;
    log::info!(
        "Loaded {} task(s) from {}",
        store.len(),
        config.data_file.display()
    );

    let mut session = Session::new(store, Some(storage), LocalClock);
    session.run(std::io::stdin().lock(), std::io::stdout())?;
    Ok(())
}
