use std::path::PathBuf;
use thiserror::Error;

pub type LocatorResult<T> = Result<T, LocatorError>;

#[derive(Error, Debug)]
pub enum LocatorError {
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Path error: {0}")]
    Path(String),
}

impl LocatorError {
    /// Wrap an I/O error together with the path that caused it
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LocatorError::Io {
            path: path.into(),
            source,
        }
    }

    /// The underlying I/O error kind, if this is an I/O error
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            LocatorError::Io { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}
