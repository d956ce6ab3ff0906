//! Structural checks: non-empty palettes and unique color ids.

use std::collections::BTreeMap;

use palette_model::Palette;

use crate::issue::Issue;

pub fn check(palette: &Palette) -> Vec<Issue> {
    let mut issues = Vec::new();

    if palette.colors.is_empty() {
        issues.push(Issue::EmptyPalette);
        return issues;
    }

    let mut id_counts: BTreeMap<&str, u64> = BTreeMap::new();
    for color in &palette.colors {
        if let Some(id) = color.id.as_deref() {
            *id_counts.entry(id).or_default() += 1;
        }
    }
    for (id, count) in id_counts {
        if count > 1 {
            issues.push(Issue::DuplicateColorId {
                id: id.to_string(),
                count,
            });
        }
    }

    issues
}
