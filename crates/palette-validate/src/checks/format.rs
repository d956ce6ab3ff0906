//! Syntax checks for hex values, versions, and slugs.

use std::sync::LazyLock;

use palette_model::Palette;
use regex::Regex;

use crate::issue::Issue;

/// Canonical CSS hex form: exactly six hex digits.
static HEX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("invalid hex regex"));

/// URL-safe slug: lowercase alphanumeric runs separated by single hyphens.
static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("invalid slug regex"));

/// Semantic version with optional pre-release and build metadata.
static SEMVER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\.\d+\.\d+(?:-[0-9A-Za-z][0-9A-Za-z.-]*)?(?:\+[0-9A-Za-z][0-9A-Za-z.-]*)?$")
        .expect("invalid semver regex")
});

pub fn is_valid_hex(value: &str) -> bool {
    HEX_REGEX.is_match(value)
}

pub fn is_valid_slug(value: &str) -> bool {
    SLUG_REGEX.is_match(value)
}

pub fn is_valid_semver(value: &str) -> bool {
    SEMVER_REGEX.is_match(value)
}

pub fn check(palette: &Palette) -> Vec<Issue> {
    let mut issues = Vec::new();

    for color in &palette.colors {
        if !is_valid_hex(&color.hex) {
            issues.push(Issue::InvalidHex {
                color: color.label().to_string(),
                hex: color.hex.clone(),
            });
        }
    }

    if let Some(version) = palette.version.as_deref()
        && !is_valid_semver(version)
    {
        issues.push(Issue::InvalidVersion {
            version: version.to_string(),
        });
    }

    if let Some(slug) = palette.slug.as_deref()
        && !is_valid_slug(slug)
    {
        issues.push(Issue::InvalidSlug {
            slug: slug.to_string(),
        });
    }

    issues
}
