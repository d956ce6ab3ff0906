//! Validation pipeline: expand inputs, parse, validate, write reports.

use std::path::{Path, PathBuf};

use anyhow::Result;

use palette_ingest::{list_palette_files, read_document};
use palette_model::ValidationReport;
use palette_validate::{
    DOCUMENT_LABEL, fails_validation, validate_document, write_validation_report_json,
};

#[derive(Debug, Clone, Default)]
pub struct ValidateOptions {
    /// Write a JSON report per document into this directory.
    pub report_dir: Option<PathBuf>,
    /// Treat warnings as failures for exit-code purposes.
    pub strict: bool,
}

/// One row of the terminal summary: a palette (or document-level findings)
/// within a source file.
#[derive(Debug)]
pub struct PaletteRow {
    pub source: PathBuf,
    pub report: ValidationReport,
    /// Palette type tag, when this row is palette-scoped.
    pub kind: Option<String>,
    pub color_count: Option<usize>,
}

#[derive(Debug, Default)]
pub struct ValidateResult {
    pub rows: Vec<PaletteRow>,
    pub report_paths: Vec<PathBuf>,
    /// Ingest failures, rendered verbatim.
    pub errors: Vec<String>,
    /// Whether the run should exit non-zero.
    pub failed: bool,
}

/// Expand the given paths: files pass through, directories contribute their
/// `.json` files.
pub fn expand_inputs(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            files.extend(list_palette_files(path)?);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

/// Validate every document named by `paths`.
///
/// Ingest failures (missing file, malformed JSON) are collected rather than
/// aborting the run, so a batch reports everything at once.
pub fn run_validate(paths: &[PathBuf], options: &ValidateOptions) -> Result<ValidateResult> {
    let files = expand_inputs(paths)?;
    let mut result = ValidateResult::default();

    for file in &files {
        let document = match read_document(file) {
            Ok(document) => document,
            Err(error) => {
                tracing::error!(path = %file.display(), %error, "failed to read document");
                result.errors.push(error.to_string());
                result.failed = true;
                continue;
            }
        };

        let reports = validate_document(&document);
        tracing::info!(
            path = %file.display(),
            palettes = document.palettes.len(),
            "validated"
        );

        if let Some(report_dir) = &options.report_dir {
            let path = write_validation_report_json(
                report_dir,
                &file.to_string_lossy(),
                &reports,
            )?;
            result.report_paths.push(path);
        }

        if fails_validation(&reports, options.strict) {
            result.failed = true;
        }

        result.rows.extend(rows_for_file(file, &document, reports));
    }

    Ok(result)
}

fn rows_for_file(
    file: &Path,
    document: &palette_model::PaletteDocument,
    reports: Vec<ValidationReport>,
) -> Vec<PaletteRow> {
    let mut palettes = document.palettes.iter();
    reports
        .into_iter()
        .map(|report| {
            if report.palette == DOCUMENT_LABEL {
                PaletteRow {
                    source: file.to_path_buf(),
                    report,
                    kind: None,
                    color_count: None,
                }
            } else {
                let palette = palettes.next();
                PaletteRow {
                    source: file.to_path_buf(),
                    kind: palette.and_then(|p| p.kind.as_ref()).map(|k| k.to_string()),
                    color_count: palette.map(palette_model::Palette::color_count),
                    report,
                }
            }
        })
        .collect()
}
