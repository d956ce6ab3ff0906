//! Semantic validation for parsed PaletteJSON documents.
//!
//! Validation is a pure pass over an already-parsed document: nothing here
//! performs I/O on the document or mutates it. Schema-level failures (e.g.
//! a missing `palettes` array) never reach this crate; they are parse
//! errors in palette-ingest.

pub mod checks;
mod issue;

pub use issue::{Category, Issue};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;

use palette_model::{Palette, PaletteDocument, PaletteError, Result, Severity, ValidationReport};

/// Report label used for findings that concern the document as a whole.
pub const DOCUMENT_LABEL: &str = "(document)";

const REPORT_SCHEMA: &str = "palettejson.validation-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

/// Run all checks against a single palette.
pub fn validate_palette(palette: &Palette) -> ValidationReport {
    ValidationReport {
        palette: palette.name.clone(),
        issues: palette_issues(palette)
            .into_iter()
            .map(Issue::into_validation_issue)
            .collect(),
    }
}

/// Typed issues for a single palette, for callers that want to match on
/// specific findings rather than read report rows.
pub fn palette_issues(palette: &Palette) -> Vec<Issue> {
    let mut issues = checks::structure::check(palette);
    issues.extend(checks::format::check(palette));
    issues.extend(checks::ordering::check(palette));
    issues.extend(checks::groups::check(palette));
    issues.extend(checks::components::check(palette));
    issues
}

/// Validate a whole document: one report per palette, preceded by a
/// document-level report when document-scoped findings exist.
pub fn validate_document(document: &PaletteDocument) -> Vec<ValidationReport> {
    let mut reports = Vec::new();

    let document_issues = document_issues(document);
    if !document_issues.is_empty() {
        reports.push(ValidationReport {
            palette: DOCUMENT_LABEL.to_string(),
            issues: document_issues
                .into_iter()
                .map(Issue::into_validation_issue)
                .collect(),
        });
    }

    for palette in &document.palettes {
        reports.push(validate_palette(palette));
    }

    tracing::debug!(
        palettes = document.palettes.len(),
        errors = reports.iter().map(ValidationReport::error_count).sum::<usize>(),
        warnings = reports.iter().map(ValidationReport::warning_count).sum::<usize>(),
        "validated document"
    );
    reports
}

/// Document-scoped findings: empty palette list, duplicate slugs.
pub fn document_issues(document: &PaletteDocument) -> Vec<Issue> {
    let mut issues = Vec::new();

    if document.palettes.is_empty() {
        issues.push(Issue::EmptyDocument);
        return issues;
    }

    let mut slug_counts: BTreeMap<&str, u64> = BTreeMap::new();
    for palette in &document.palettes {
        if let Some(slug) = palette.slug.as_deref() {
            *slug_counts.entry(slug).or_default() += 1;
        }
    }
    for (slug, count) in slug_counts {
        if count > 1 {
            issues.push(Issue::DuplicateSlug {
                slug: slug.to_string(),
                count,
            });
        }
    }

    issues
}

pub fn has_validation_errors(reports: &[ValidationReport]) -> bool {
    reports.iter().any(ValidationReport::has_errors)
}

/// With `strict`, warnings count as failures too.
pub fn fails_validation(reports: &[ValidationReport], strict: bool) -> bool {
    reports.iter().any(|report| {
        report.has_errors() || (strict && report.warning_count() > 0)
    })
}

#[derive(Debug, Serialize)]
pub struct ReportPayload {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    /// The document the findings apply to, as given by the caller
    /// (typically a file path).
    pub source: String,
    pub reports: Vec<ReportSummary>,
}

#[derive(Debug, Serialize)]
pub struct ReportSummary {
    pub palette: String,
    pub error_count: usize,
    pub warning_count: usize,
    pub issues: Vec<IssueJson>,
}

#[derive(Debug, Serialize)]
pub struct IssueJson {
    pub severity: Severity,
    pub code: String,
    pub palette: String,
    pub color: Option<String>,
    pub message: String,
    pub category: Option<String>,
    pub count: Option<u64>,
}

pub fn report_payload(source: &str, reports: &[ValidationReport]) -> ReportPayload {
    ReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        source: source.to_string(),
        reports: reports
            .iter()
            .map(|report| ReportSummary {
                palette: report.palette.clone(),
                error_count: report.error_count(),
                warning_count: report.warning_count(),
                issues: report
                    .issues
                    .iter()
                    .map(|issue| IssueJson {
                        severity: issue.severity,
                        code: issue.code.clone(),
                        palette: report.palette.clone(),
                        color: issue.color.clone(),
                        message: issue.message.clone(),
                        category: issue.category.clone(),
                        count: issue.count,
                    })
                    .collect(),
            })
            .collect(),
    }
}

/// Write the findings as a versioned JSON report under `output_dir`.
/// The file is named after the source document's stem, so reports for
/// several documents can share a directory.
pub fn write_validation_report_json(
    output_dir: &Path,
    source: &str,
    reports: &[ValidationReport],
) -> Result<PathBuf> {
    let stem = Path::new(source)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| {
            PaletteError::Message(format!("cannot name a report for source {source:?}: no file stem"))
        })?;
    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join(format!("{stem}.validation_report.json"));
    let payload = report_payload(source, reports);
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(&output_path, format!("{json}\n"))?;
    Ok(output_path)
}
