//! Pretty JSON output.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{OutputError, Result};

/// A file written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub bytes: u64,
}

/// Serializes a value as UTF-8 JSON with two-space indentation.
///
/// Non-ASCII text is written verbatim, not escaped.
pub fn render_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(value).map_err(|source| OutputError::Serialization { source })
}

/// Writes a value as pretty JSON to `path`.
///
/// Uses atomic write (temp file + rename) so a failed run never leaves a
/// partial file and never clobbers a previous output.
pub fn write_json_atomic<T: Serialize>(value: &T, path: &Path) -> Result<WrittenFile> {
    let bytes = render_json(value)?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| OutputError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let temp_path = temp_path_for(path);
    if let Err(error) = write_and_sync(&temp_path, &bytes) {
        let _ = fs::remove_file(&temp_path);
        return Err(error);
    }
    debug!(temp_path = %temp_path.display(), bytes = bytes.len(), "temp file written");

    if let Err(source) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(OutputError::AtomicWriteFailed {
            temp_path,
            target_path: path.to_path_buf(),
            source,
        });
    }

    info!(path = %path.display(), bytes = bytes.len(), "output written");
    Ok(WrittenFile {
        path: path.to_path_buf(),
        bytes: bytes.len() as u64,
    })
}

fn write_and_sync(path: &Path, bytes: &[u8]) -> Result<()> {
    let io_error = |operation: &'static str| {
        move |source| OutputError::Io {
            operation,
            path: path.to_path_buf(),
            source,
        }
    };
    let mut file = File::create(path).map_err(io_error("create"))?;
    file.write_all(bytes).map_err(io_error("write"))?;
    file.sync_all().map_err(io_error("sync"))?;
    Ok(())
}

/// Hidden sibling of `path`, so the final rename stays on one filesystem.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_else(|| "output".as_ref()));
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_path_is_hidden_sibling() {
        assert_eq!(
            temp_path_for(Path::new("out/cleaned_data.json")),
            PathBuf::from("out/.cleaned_data.json.tmp")
        );
    }
}
