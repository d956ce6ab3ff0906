//! Property tests for the syntax and ordering checks.

use std::collections::BTreeSet;

use palette_model::Palette;
use palette_validate::checks::format::{is_valid_hex, is_valid_slug};
use palette_validate::{Issue, palette_issues};
use proptest::prelude::*;

fn palette_with_positions(positions: &[u32]) -> Palette {
    let colors: Vec<String> = positions
        .iter()
        .map(|position| format!(r##"{{ "hex": "#000000", "position": {position} }}"##))
        .collect();
    serde_json::from_str(&format!(
        r##"{{ "name": "P", "colors": [{}] }}"##,
        colors.join(",")
    ))
    .expect("parse palette")
}

proptest! {
    #[test]
    fn canonical_hex_always_validates(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let upper = format!("#{r:02X}{g:02X}{b:02X}");
        let lower = format!("#{r:02x}{g:02x}{b:02x}");
        prop_assert!(is_valid_hex(&upper));
        prop_assert!(is_valid_hex(&lower));
    }

    #[test]
    fn non_hex_strings_never_validate(s in "[^#]{0,10}") {
        // Without the leading '#' the value can never match.
        prop_assert!(!is_valid_hex(&s));
    }

    #[test]
    fn position_duplicates_detected_iff_present(positions in proptest::collection::vec(0u32..20, 1..8)) {
        let palette = palette_with_positions(&positions);
        let has_duplicates = positions.iter().collect::<BTreeSet<_>>().len() < positions.len();
        let flagged = palette_issues(&palette)
            .iter()
            .any(|issue| matches!(issue, Issue::DuplicatePosition { .. }));
        prop_assert_eq!(flagged, has_duplicates);
    }

    #[test]
    fn generated_slugs_validate(parts in proptest::collection::vec("[a-z0-9]{1,6}", 1..4)) {
        prop_assert!(is_valid_slug(&parts.join("-")));
    }
}
