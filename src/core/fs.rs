use locator_core::core::fs::decode_text;
use locator_core::{LocatorError, LocatorResult};
use std::io;
use std::path::Path;

pub use locator_core::core::fs::{is_absent, try_read_file};

/// Async form of [`try_read_file`]
pub async fn try_read_file_async(path: &Path) -> LocatorResult<Option<String>> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(Some(decode_text(bytes))),
        Err(e) if is_absent_async(path, &e).await => {
            tracing::trace!("{} is absent", path.display());
            Ok(None)
        }
        Err(e) => Err(LocatorError::io(path, e)),
    }
}

async fn is_absent_async(path: &Path, error: &io::Error) -> bool {
    if error.kind() == io::ErrorKind::NotFound {
        return true;
    }

    tokio::fs::metadata(path)
        .await
        .map(|metadata| metadata.is_dir())
        .unwrap_or(false)
}
