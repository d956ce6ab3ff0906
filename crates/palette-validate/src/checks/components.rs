//! Component arity vs. the declared color representation.
//!
//! Representations with unknown arity (open-ended tags) are exempt.

use palette_model::Palette;

use crate::issue::Issue;

pub fn check(palette: &Palette) -> Vec<Issue> {
    let mut issues = Vec::new();
    let declared = palette.color_representation.as_ref();

    for color in &palette.colors {
        if let Some(components) = &color.components {
            match declared {
                Some(representation) => {
                    if let Some(expected) = representation.component_arity()
                        && components.len() != expected
                    {
                        issues.push(Issue::ComponentArityMismatch {
                            color: color.label().to_string(),
                            representation: representation.as_str().to_string(),
                            expected,
                            found: components.len(),
                        });
                    }
                }
                None => issues.push(Issue::ComponentsWithoutRepresentation {
                    color: color.label().to_string(),
                }),
            }
        }

        for alt in &color.alt_representations {
            if let Some(expected) = alt.color_representation.component_arity()
                && alt.components.len() != expected
            {
                issues.push(Issue::ComponentArityMismatch {
                    color: color.label().to_string(),
                    representation: alt.color_representation.as_str().to_string(),
                    expected,
                    found: alt.components.len(),
                });
            }
        }
    }

    issues
}
