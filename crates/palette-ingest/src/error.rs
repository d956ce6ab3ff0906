use std::path::PathBuf;
use thiserror::Error;

/// I/O-side failures: the document could not be located, read, or parsed.
/// Semantic findings inside a well-formed document are not errors here;
/// those are reported by palette-validate.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("palette file not found: {path}")]
    FileNotFound { path: PathBuf },
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not valid PaletteJSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
