use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use crate::color::{Color, ColorRepresentation};

/// Palette classification. Open-ended: unknown values are preserved
/// verbatim rather than rejected, since the format is extensible.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PaletteKind {
    Categorical,
    Sequential,
    Diverging,
    Qualitative,
    Other(String),
}

impl PaletteKind {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "categorical" => PaletteKind::Categorical,
            "sequential" => PaletteKind::Sequential,
            "diverging" => PaletteKind::Diverging,
            "qualitative" => PaletteKind::Qualitative,
            _ => PaletteKind::Other(s.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PaletteKind::Categorical => "categorical",
            PaletteKind::Sequential => "sequential",
            PaletteKind::Diverging => "diverging",
            PaletteKind::Qualitative => "qualitative",
            PaletteKind::Other(kind) => kind,
        }
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for PaletteKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PaletteKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(PaletteKind::parse(&raw))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Color-vision-deficiency test coverage, as authored by the palette's
/// creator. Nothing here is computed by this crate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accessibility {
    /// CVD conditions the palette was tested under
    /// (e.g. "protanopia", "deuteranopia", "tritanopia").
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cvd_tested: Vec<String>,
    /// Max distinguishable classes per condition.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub max_distinguishable: BTreeMap<String, u32>,
    /// Names of the tools used for testing.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A named ordered collection of colors with shared metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub name: String,
    /// URL-safe identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<PaletteKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Semantic-version string. Published documents are immutable; changes
    /// ship under a bumped version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    /// SPDX identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Color space the `components` values are expressed in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_representation: Option<ColorRepresentation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<Accessibility>,
    /// Ordered sequence of swatches. Array order is meaningful unless
    /// colors carry explicit `position` values.
    #[serde(default)]
    pub colors: Vec<Color>,
}

impl Palette {
    pub fn color_count(&self) -> usize {
        self.colors.len()
    }

    /// Display label: the palette's name, falling back to the slug when
    /// the name is empty.
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            self.slug.as_deref().unwrap_or(&self.name)
        } else {
            &self.name
        }
    }

    /// Look up a color by its stable id.
    pub fn color_by_id(&self, id: &str) -> Option<&Color> {
        self.colors
            .iter()
            .find(|color| color.id.as_deref() == Some(id))
    }

    /// Colors in render order: explicit `position` values first (ascending),
    /// then the remainder in array order.
    pub fn ordered_colors(&self) -> Vec<&Color> {
        let mut ordered: Vec<(usize, &Color)> = self.colors.iter().enumerate().collect();
        ordered.sort_by_key(|(index, color)| match color.position {
            Some(position) => (0u8, position, *index),
            None => (1u8, 0, *index),
        });
        ordered.into_iter().map(|(_, color)| color).collect()
    }

    /// Distinct group ids used by this palette's colors, in first-use order.
    pub fn group_ids(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for color in &self.colors {
            if let Some(group) = color.group_id.as_deref()
                && !seen.contains(&group)
            {
                seen.push(group);
            }
        }
        seen
    }
}

/// Top-level PaletteJSON container.
///
/// `palettes` is required: a document without it fails to parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteDocument {
    pub palettes: Vec<Palette>,
}
