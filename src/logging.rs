//! File logging.
//!
//! The terminal belongs to the game screen, so log records only ever go to
//! a file. Without a log file nothing is installed and `log` macros are no-ops.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

use crate::GameError;

pub fn init(path: &Path) -> Result<(), GameError> {
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    let file = File::create(path)?;
    WriteLogger::init(LevelFilter::Debug, config, file)?;
    log::info!("logging to {}", path.display());
    Ok(())
}
