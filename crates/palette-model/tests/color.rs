//! Hex decoding and serde round-trip properties for single colors.

use palette_model::Color;
use proptest::prelude::*;

fn color_with_hex(hex: &str) -> Color {
    serde_json::from_str(&format!(r#"{{ "hex": "{hex}" }}"#)).expect("parse color")
}

#[test]
fn rgb_decodes_valid_hex() {
    let color = color_with_hex("#1F77B4");
    assert_eq!(color.rgb(), Some([0x1F, 0x77, 0xB4]));
}

#[test]
fn rgb_rejects_malformed_hex() {
    for hex in ["1F77B4", "#1F77B", "#1F77B4A", "#GGGGGG", "#"] {
        assert_eq!(color_with_hex(hex).rgb(), None, "hex: {hex}");
    }
}

#[test]
fn label_prefers_name_then_id() {
    let named: Color =
        serde_json::from_str(r##"{ "name": "Sky", "id": "sky-01", "hex": "#AEC7E8" }"##)
            .expect("parse color");
    assert_eq!(named.label(), "Sky");
    let with_id: Color =
        serde_json::from_str(r##"{ "id": "sky-01", "hex": "#AEC7E8" }"##).expect("parse color");
    assert_eq!(with_id.label(), "sky-01");
    assert_eq!(color_with_hex("#AEC7E8").label(), "#AEC7E8");
}

proptest! {
    #[test]
    fn rgb_round_trips_for_any_bytes(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let hex = format!("#{r:02X}{g:02X}{b:02X}");
        let color = color_with_hex(&hex);
        prop_assert_eq!(color.rgb(), Some([r, g, b]));
    }

    #[test]
    fn color_serde_round_trip(
        r in any::<u8>(),
        g in any::<u8>(),
        b in any::<u8>(),
        position in proptest::option::of(0u32..100),
        id in proptest::option::of("[a-z]{1,8}"),
    ) {
        let color = Color {
            id,
            name: None,
            hex: format!("#{r:02X}{g:02X}{b:02X}"),
            components: None,
            position,
            group_id: None,
            reference_in_group: false,
            alt_representations: Vec::new(),
            references: Vec::new(),
            legibility: None,
            notes: None,
        };
        let json = serde_json::to_string(&color).expect("serialize color");
        let reparsed: Color = serde_json::from_str(&json).expect("reparse color");
        prop_assert_eq!(color, reparsed);
    }
}
