//! CLI library components for the PaletteJSON toolkit.

pub mod logging;
pub mod pipeline;
