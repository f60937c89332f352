//! Scoped file access for the agent configuration.
//!
//! The file is opened, read in full and closed before scanning. Saving
//! truncates the file, writes the whole regenerated text and flushes before
//! closing. No handle outlives a call.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use tracing::{debug, info};

use crate::{ConfigError, ReaderConfig, Scan, SelectionStore, reader, serialize};

/// Read and scan the configuration at `path`.
pub fn read_config(path: &Path, config: &ReaderConfig) -> Result<Scan, ConfigError> {
    let text = fs::read_to_string(path)
        .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
    let scan = reader::read(&text, config)?;
    debug!(
        path = %path.display(),
        records = scan.store.len(),
        malformed = scan.malformed.len(),
        "loaded agent config"
    );
    Ok(scan)
}

/// Replace the file at `path` with `contents`.
pub fn write_config(path: &Path, contents: &str) -> Result<(), ConfigError> {
    let write_error = |source| ConfigError::Write { path: path.to_path_buf(), source };

    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(contents.as_bytes()).map_err(write_error)?;
    writer.flush().map_err(write_error)?;

    info!(path = %path.display(), bytes = contents.len(), "saved agent config");
    Ok(())
}

/// Serialize `store` and write it to `path`.
pub fn save(path: &Path, store: &SelectionStore) -> Result<(), ConfigError> {
    write_config(path, &serialize(store))
}
