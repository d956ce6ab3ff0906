pub mod color;
pub mod document;
pub mod error;
pub mod report;

pub use color::{AltRepresentation, Color, ColorReference, ColorRepresentation, Legibility};
pub use document::{Accessibility, Author, Palette, PaletteDocument, PaletteKind};
pub use error::{PaletteError, Result};
pub use report::{Severity, ValidationIssue, ValidationReport};
