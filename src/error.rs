use camino::Utf8PathBuf;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during a conversion run
///
/// Only [`ConvertError::ConfigNotFound`] and [`ConvertError::ConfigParse`] are
/// raised before the target directory is touched. Everything else aborts a run
/// that has already started writing.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Could not find mkdocs.yml at {path}")]
    ConfigNotFound { path: Utf8PathBuf },

    #[error("Failed to parse {path}: {source}")]
    ConfigParse {
        path: Utf8PathBuf,
        source: serde_yaml_ng::Error,
    },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize table of contents: {0}")]
    Serialize(#[from] serde_yaml_ng::Error),

    #[error("Path is not valid UTF-8: {0:?}")]
    NonUtf8Path(PathBuf),

    #[error("Failed to walk source tree: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Convenience alias used throughout the library
pub type Result<T> = std::result::Result<T, ConvertError>;

impl ConvertError {
    /// Wrap a `std::io::Error` with the path it happened on.
    pub fn io(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
