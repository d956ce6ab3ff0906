//! Validation issue types.
//!
//! Each `Issue` variant carries only the data its check produces; the flat
//! wire form used in reports is `palette_model::ValidationIssue`.

use palette_model::{Severity, ValidationIssue};

/// Check category, used for grouping in reports and tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Format,
    Ordering,
    Grouping,
    ColorSpace,
    Identity,
    Structure,
    Metadata,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Format => "Format",
            Category::Ordering => "Ordering",
            Category::Grouping => "Grouping",
            Category::ColorSpace => "Color Space",
            Category::Identity => "Identity",
            Category::Structure => "Structure",
            Category::Metadata => "Metadata",
        }
    }
}

/// A semantic finding in a parsed palette document.
#[derive(Debug, Clone, PartialEq)]
pub enum Issue {
    // Format checks
    /// `hex` does not match `^#[0-9A-Fa-f]{6}$`.
    InvalidHex { color: String, hex: String },
    /// `version` is not a semantic-version string.
    InvalidVersion { version: String },
    /// `slug` is not URL-safe.
    InvalidSlug { slug: String },

    // Ordering checks
    /// The same `position` value appears on more than one color.
    DuplicatePosition { position: u32, colors: Vec<String> },

    // Grouping checks
    /// More than one color in a group is marked `referenceInGroup`.
    MultipleGroupReferences { group: String, count: u64 },
    /// A multi-member group has no `referenceInGroup` member.
    GroupMissingReference { group: String },
    /// A `groupId` is used by exactly one color.
    DanglingGroup { group: String, color: String },
    /// `referenceInGroup: true` on a color without a `groupId`.
    ReferenceOutsideGroup { color: String },

    // Color space checks
    /// `components` length does not match the declared representation.
    ComponentArityMismatch {
        color: String,
        representation: String,
        expected: usize,
        found: usize,
    },
    /// `components` present but the palette declares no representation.
    ComponentsWithoutRepresentation { color: String },

    // Identity checks
    /// A color `id` appears more than once within a palette.
    DuplicateColorId { id: String, count: u64 },
    /// A `slug` appears on more than one palette in the document.
    DuplicateSlug { slug: String, count: u64 },

    // Structure checks
    /// Palette contains no colors.
    EmptyPalette,
    /// Document contains an empty `palettes` array.
    EmptyDocument,
}

impl Issue {
    /// Stable rule code.
    pub fn code(&self) -> &'static str {
        match self {
            Issue::InvalidHex { .. } => "PJ0001",
            Issue::DuplicatePosition { .. } => "PJ0002",
            Issue::MultipleGroupReferences { .. } => "PJ0003",
            Issue::GroupMissingReference { .. } => "PJ0004",
            Issue::DanglingGroup { .. } => "PJ0005",
            Issue::ReferenceOutsideGroup { .. } => "PJ0006",
            Issue::ComponentArityMismatch { .. } => "PJ0007",
            Issue::ComponentsWithoutRepresentation { .. } => "PJ0008",
            Issue::DuplicateColorId { .. } => "PJ0009",
            Issue::EmptyPalette => "PJ0010",
            Issue::EmptyDocument => "PJ0011",
            Issue::InvalidVersion { .. } => "PJ0012",
            Issue::InvalidSlug { .. } => "PJ0013",
            Issue::DuplicateSlug { .. } => "PJ0014",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Issue::InvalidHex { .. } => Category::Format,
            Issue::InvalidVersion { .. } | Issue::InvalidSlug { .. } => Category::Metadata,
            Issue::DuplicatePosition { .. } => Category::Ordering,
            Issue::MultipleGroupReferences { .. }
            | Issue::GroupMissingReference { .. }
            | Issue::DanglingGroup { .. }
            | Issue::ReferenceOutsideGroup { .. } => Category::Grouping,
            Issue::ComponentArityMismatch { .. }
            | Issue::ComponentsWithoutRepresentation { .. } => Category::ColorSpace,
            Issue::DuplicateColorId { .. } | Issue::DuplicateSlug { .. } => Category::Identity,
            Issue::EmptyPalette | Issue::EmptyDocument => Category::Structure,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Issue::GroupMissingReference { .. }
            | Issue::DanglingGroup { .. }
            | Issue::ReferenceOutsideGroup { .. }
            | Issue::ComponentsWithoutRepresentation { .. }
            | Issue::InvalidVersion { .. }
            | Issue::InvalidSlug { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Label of the color involved, when the finding is color-scoped.
    pub fn color(&self) -> Option<&str> {
        match self {
            Issue::InvalidHex { color, .. }
            | Issue::ReferenceOutsideGroup { color }
            | Issue::ComponentArityMismatch { color, .. }
            | Issue::ComponentsWithoutRepresentation { color }
            | Issue::DanglingGroup { color, .. } => Some(color),
            _ => None,
        }
    }

    /// Occurrence count, for aggregating rules.
    pub fn count(&self) -> Option<u64> {
        match self {
            Issue::DuplicatePosition { colors, .. } => Some(colors.len() as u64),
            Issue::MultipleGroupReferences { count, .. }
            | Issue::DuplicateColorId { count, .. }
            | Issue::DuplicateSlug { count, .. } => Some(*count),
            _ => None,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Issue::InvalidHex { color, hex } => {
                format!("Color {color} has invalid hex value {hex:?} (expected #RRGGBB)")
            }
            Issue::InvalidVersion { version } => {
                format!("Version {version:?} is not a semantic-version string")
            }
            Issue::InvalidSlug { slug } => {
                format!("Slug {slug:?} is not URL-safe (lowercase letters, digits, hyphens)")
            }
            Issue::DuplicatePosition { position, colors } => format!(
                "Position {position} assigned to {} colors: {}",
                colors.len(),
                colors.join(", ")
            ),
            Issue::MultipleGroupReferences { group, count } => format!(
                "Group {group:?} has {count} colors marked referenceInGroup (expected one)"
            ),
            Issue::GroupMissingReference { group } => {
                format!("Group {group:?} has no color marked referenceInGroup")
            }
            Issue::DanglingGroup { group, color } => {
                format!("Group {group:?} is used only by color {color}")
            }
            Issue::ReferenceOutsideGroup { color } => {
                format!("Color {color} sets referenceInGroup but has no groupId")
            }
            Issue::ComponentArityMismatch {
                color,
                representation,
                expected,
                found,
            } => format!(
                "Color {color} has {found} components, {representation} expects {expected}"
            ),
            Issue::ComponentsWithoutRepresentation { color } => format!(
                "Color {color} carries components but the palette declares no colorRepresentation"
            ),
            Issue::DuplicateColorId { id, count } => {
                format!("Color id {id:?} appears {count} times within the palette")
            }
            Issue::DuplicateSlug { slug, count } => {
                format!("Slug {slug:?} is shared by {count} palettes")
            }
            Issue::EmptyPalette => "Palette contains no colors".to_string(),
            Issue::EmptyDocument => "Document contains an empty palettes array".to_string(),
        }
    }

    /// Flatten into the report form.
    pub fn into_validation_issue(self) -> ValidationIssue {
        ValidationIssue {
            code: self.code().to_string(),
            message: self.message(),
            severity: self.severity(),
            color: self.color().map(str::to_string),
            count: self.count(),
            category: Some(self.category().as_str().to_string()),
        }
    }
}
