//! Per-concern semantic checks. Each module exposes a `check` function that
//! is a pure function of the palette and returns typed issues.

pub mod components;
pub mod format;
pub mod groups;
pub mod ordering;
pub mod structure;
