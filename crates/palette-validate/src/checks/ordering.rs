//! Explicit `position` values must be pairwise distinct within a palette.

use std::collections::BTreeMap;

use palette_model::Palette;

use crate::issue::Issue;

pub fn check(palette: &Palette) -> Vec<Issue> {
    let mut by_position: BTreeMap<u32, Vec<String>> = BTreeMap::new();
    for color in &palette.colors {
        if let Some(position) = color.position {
            by_position
                .entry(position)
                .or_default()
                .push(color.label().to_string());
        }
    }

    by_position
        .into_iter()
        .filter(|(_, colors)| colors.len() > 1)
        .map(|(position, colors)| Issue::DuplicatePosition { position, colors })
        .collect()
}
