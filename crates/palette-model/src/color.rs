use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Color space tag for `components` values.
///
/// The set of representations is open-ended: the three spaces used in the
/// published examples are modeled as variants, anything else is preserved
/// verbatim in `Other` so documents survive a round-trip untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColorRepresentation {
    Oklch,
    Srgb,
    Lab,
    Other(String),
}

impl ColorRepresentation {
    /// Parse a representation tag (case-insensitive for the known spaces).
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("OKLCH") {
            ColorRepresentation::Oklch
        } else if trimmed.eq_ignore_ascii_case("SRGB") {
            ColorRepresentation::Srgb
        } else if trimmed.eq_ignore_ascii_case("LAB") {
            ColorRepresentation::Lab
        } else {
            ColorRepresentation::Other(trimmed.to_string())
        }
    }

    /// The canonical tag as it appears on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            ColorRepresentation::Oklch => "OKLCH",
            ColorRepresentation::Srgb => "sRGB",
            ColorRepresentation::Lab => "Lab",
            ColorRepresentation::Other(tag) => tag,
        }
    }

    /// Number of components this space expects, when known.
    /// Unknown representations return None and are exempt from arity checks.
    pub fn component_arity(&self) -> Option<usize> {
        match self {
            ColorRepresentation::Oklch | ColorRepresentation::Srgb | ColorRepresentation::Lab => {
                Some(3)
            }
            ColorRepresentation::Other(_) => None,
        }
    }
}

impl fmt::Display for ColorRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ColorRepresentation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ColorRepresentation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ColorRepresentation::parse(&raw))
    }
}

/// The same color expressed in another color space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AltRepresentation {
    pub color_representation: ColorRepresentation,
    pub components: Vec<f64>,
}

/// Cross-reference to an external color system (e.g. a Pantone code).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorReference {
    pub system: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Precomputed legibility metrics. Carried as authored; this crate never
/// derives contrast or luminance from the hex value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Legibility {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub luminance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrast_white: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrast_black: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_text: Option<String>,
}

/// A single swatch within a palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    /// Stable identifier, unique within the containing palette.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Canonical representation: a 6-digit CSS hex string.
    pub hex: String,
    /// Components in the palette's declared color representation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<f64>>,
    /// Explicit ordering, independent of array order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    /// Logical sub-family this color belongs to (e.g. light/base/dark).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// Marks the canonical member of a group.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub reference_in_group: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alt_representations: Vec<AltRepresentation>,
    #[serde(
        default,
        deserialize_with = "deserialize_references",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub references: Vec<ColorReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legibility: Option<Legibility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Color {
    /// Decode the hex string into RGB bytes, if it is syntactically valid.
    pub fn rgb(&self) -> Option<[u8; 3]> {
        let digits = self.hex.strip_prefix('#')?;
        if digits.len() != 6 {
            return None;
        }
        hex::decode(digits).ok()?.try_into().ok()
    }

    /// Display label: name, id, or the hex string.
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .or(self.id.as_deref())
            .unwrap_or(&self.hex)
    }
}

/// References appear on the wire either as an array of entries or as an
/// object keyed by system name (the published "Sunset Gradient" example
/// uses the keyed shape). Both normalize to a flat list.
fn deserialize_references<'de, D>(deserializer: D) -> Result<Vec<ColorReference>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct KeyedEntry {
        #[serde(default)]
        code: Option<String>,
        #[serde(default)]
        library: Option<String>,
        #[serde(default)]
        note: Option<String>,
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ReferencesWire {
        List(Vec<ColorReference>),
        Keyed(BTreeMap<String, KeyedEntry>),
    }

    match ReferencesWire::deserialize(deserializer)? {
        ReferencesWire::List(entries) => Ok(entries),
        ReferencesWire::Keyed(map) => Ok(map
            .into_iter()
            .map(|(system, entry)| ColorReference {
                system,
                code: entry.code,
                library: entry.library,
                note: entry.note,
            })
            .collect()),
    }
}
