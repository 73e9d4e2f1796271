//! File access helpers.
//!
//! Pipeline configurations and log files are treated as opaque text: no
//! parsing, no schema validation. Errors are wrapped with the offending
//! path so the CLI can report them directly.

use std::path::Path;

use crate::error::FluxionError;

/// Read a text file, wrapping failures with the path.
///
/// # Errors
///
/// Returns `FluxionError::Input` for an empty path and
/// `FluxionError::FileRead` for any filesystem failure.
pub fn load_file(path: &str) -> Result<String, FluxionError> {
    if path.is_empty() {
        return Err(FluxionError::Input("file path cannot be empty".to_string()));
    }

    std::fs::read_to_string(path).map_err(|source| FluxionError::FileRead {
        path: path.into(),
        source,
    })
}

/// Write text to a file verbatim, wrapping failures with the path.
///
/// # Errors
///
/// Returns `FluxionError::FileWrite` for any filesystem failure.
pub fn write_file(path: &Path, content: &str) -> Result<(), FluxionError> {
    std::fs::write(path, content).map_err(|source| FluxionError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}
