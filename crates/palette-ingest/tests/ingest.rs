//! Tests for palette file discovery and reading.

use std::path::{Path, PathBuf};

use palette_ingest::{IngestError, list_palette_files, read_document};
use palette_model::PaletteKind;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn reads_simple_document() {
    let document = read_document(&fixture("simple.json")).expect("read simple fixture");
    assert_eq!(document.palettes.len(), 1);
    assert_eq!(document.palettes[0].name, "Cool Tones");
}

#[test]
fn reads_sunset_document_with_keyed_references() {
    let document = read_document(&fixture("sunset.json")).expect("read sunset fixture");
    let palette = &document.palettes[0];
    assert_eq!(palette.kind, Some(PaletteKind::Sequential));
    assert_eq!(palette.color_count(), 5);
    let first = &palette.colors[0];
    assert_eq!(first.position, Some(0));
    assert_eq!(first.references[0].system, "pantone");
}

#[test]
fn reads_comprehensive_document() {
    let document = read_document(&fixture("comprehensive.json")).expect("read comprehensive");
    assert_eq!(document.palettes.len(), 2);
    let harbor = &document.palettes[0];
    assert_eq!(harbor.group_ids(), vec!["navy", "coral"]);
    let navy = harbor.color_by_id("navy-base").expect("navy-base");
    assert!(navy.reference_in_group);
    assert_eq!(navy.alt_representations.len(), 2);
    assert_eq!(
        navy.legibility.as_ref().and_then(|l| l.preferred_text.as_deref()),
        Some("white")
    );
}

#[test]
fn missing_file_is_its_own_error() {
    let error = read_document(&fixture("nope.json")).expect_err("should fail");
    assert!(matches!(error, IngestError::FileNotFound { .. }));
}

#[test]
fn malformed_json_reports_path() {
    let error = read_document(&fixture("broken.json")).expect_err("should fail");
    match error {
        IngestError::Parse { path, .. } => {
            assert!(path.ends_with("broken.json"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn discovery_lists_json_files_sorted() {
    let files = list_palette_files(&fixture("")).expect("list fixtures");
    let names: Vec<String> = files
        .iter()
        .filter_map(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "broken.json",
            "comprehensive.json",
            "simple.json",
            "sunset.json"
        ]
    );
}

#[test]
fn discovery_rejects_missing_directory() {
    let error = list_palette_files(Path::new("/definitely/not/here")).expect_err("should fail");
    assert!(matches!(error, IngestError::DirectoryNotFound { .. }));
}
