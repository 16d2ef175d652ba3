use crate::core::error::{LocatorError, LocatorResult};
use std::fs;
use std::io;
use std::path::Path;

/// Read a file as text, treating a missing file as `None`
///
/// A directory sitting where the file is expected is also treated as
/// missing. Every other I/O error is returned.
pub fn try_read_file(path: &Path) -> LocatorResult<Option<String>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(decode_text(bytes))),
        Err(e) if is_absent(path, &e) => {
            tracing::trace!("{} is absent", path.display());
            Ok(None)
        }
        Err(e) => Err(LocatorError::io(path, e)),
    }
}

/// Whether a read error means "no such file" rather than a real failure
///
/// Some platforms report reading a directory as `EISDIR`, others as access
/// denied, so the path itself is checked once the read failed.
pub fn is_absent(path: &Path, error: &io::Error) -> bool {
    error.kind() == io::ErrorKind::NotFound || path.is_dir()
}

/// Decode file bytes as UTF-8, replacing invalid sequences
pub fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}
