//! Reading PaletteJSON documents from disk.

mod discovery;
mod error;

pub use discovery::list_palette_files;
pub use error::{IngestError, Result};

use std::path::Path;

use palette_model::PaletteDocument;

/// Parse a PaletteJSON document from a string.
pub fn parse_document(input: &str) -> std::result::Result<PaletteDocument, serde_json::Error> {
    serde_json::from_str(input)
}

/// Read and parse a PaletteJSON document from a file.
pub fn read_document(path: &Path) -> Result<PaletteDocument> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let raw = std::fs::read_to_string(path).map_err(|e| IngestError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let document = parse_document(&raw).map_err(|e| IngestError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(
        path = %path.display(),
        palettes = document.palettes.len(),
        "parsed palette document"
    );
    Ok(document)
}
