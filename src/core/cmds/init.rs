use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;

use log::{info, warn};

use crate::types::AppResult;
use crate::types::config::CONFIG_FILENAME;

const EXAMPLE_CONFIG: &str = include_str!("../../../example.toml");

/// Drop the commented example config into the current directory.
pub async fn execute_init() -> AppResult<()> {
    info!("Writing example {CONFIG_FILENAME}...");
    write_example_config(Path::new("."))?;
    Ok(())
}

/// Write the example config into `dir`. Returns false when a config is already there.
pub fn write_example_config(dir: &Path) -> AppResult<bool> {
    let cfg_path = dir.join(CONFIG_FILENAME);
    // create_new so an existing config is never truncated
    let mut file = match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&cfg_path)
    {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            warn!("{} already exists; leaving it unchanged", cfg_path.display());
            return Ok(false);
        }
        Err(e) => return Err(e.into()),
    };
    file.write_all(EXAMPLE_CONFIG.as_bytes())?;
    info!("Created {}", cfg_path.display());
    Ok(true)
}
