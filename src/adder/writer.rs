use std::fs;
use std::io;
use std::io::Write;
use std::path::Path;
use log::debug;
use crate::adder::entry::Entry;
use crate::adder::error::AdderError;

/// Appends `entry` as one line to `path`, creating the file if needed.
pub fn append_entry(path: &Path, entry: &Entry) -> Result<(), AdderError> {
    let line = entry.line()?;

    let file = fs::OpenOptions::new().create(true).append(true).open(path).map_err(|e| {
        AdderError::Open { source: e, path: path.display().to_string() }
    })?;
    let mut buf = io::BufWriter::new(file);
    buf.write_all(format!("{}\n", line).as_bytes())
        .and_then(|_| buf.flush())
        .map_err(|e| AdderError::Write { source: e, path: path.display().to_string() })?;

    debug!("appended {} bytes to {}", line.len() + 1, path.display());
    Ok(())
}
