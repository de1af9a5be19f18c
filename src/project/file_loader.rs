//! Reading source files from storage.

use std::path::Path;

use super::error::LoadError;

/// Load file contents as text.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD.
pub fn load_file(path: &Path) -> Result<String, LoadError> {
    if path.is_dir() {
        return Err(LoadError::NotAFile(path.to_path_buf()));
    }
    let bytes = std::fs::read(path).map_err(|e| LoadError::io(path, e))?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

/// Whether `path` names a readable regular file.
pub fn is_file(path: &Path) -> bool {
    path.metadata().map(|m| m.is_file()).unwrap_or(false)
}
