//! Report payload shape.

use palette_model::PaletteDocument;
use palette_validate::{report_payload, validate_document, write_validation_report_json};

#[test]
fn payload_shape_is_stable() {
    let document: PaletteDocument = serde_json::from_str(
        r##"{
          "palettes": [
            { "name": "Cool Tones", "colors": [ { "hex": "#1F77B4" } ] }
          ]
        }"##,
    )
    .expect("parse document");
    let reports = validate_document(&document);
    let mut payload = report_payload("simple.json", &reports);

    // The timestamp is the only nondeterministic field.
    payload.generated_at = "[timestamp]".to_string();
    insta::assert_json_snapshot!(payload, @r###"
    {
      "schema": "palettejson.validation-report",
      "schema_version": 1,
      "generated_at": "[timestamp]",
      "source": "simple.json",
      "reports": [
        {
          "palette": "Cool Tones",
          "error_count": 0,
          "warning_count": 0,
          "issues": []
        }
      ]
    }
    "###);
}

#[test]
fn writer_rejects_sources_without_a_file_stem() {
    let dir = std::env::temp_dir().join(format!(
        "palettejson-report-writer-{}",
        std::process::id()
    ));
    let error = write_validation_report_json(&dir, "", &[]).expect_err("stem-less source");
    assert!(error.to_string().contains("no file stem"));
    // The writer bails before creating the output directory.
    assert!(!dir.exists());
}

#[test]
fn payload_carries_issue_rows() {
    let document: PaletteDocument = serde_json::from_str(
        r##"{
          "palettes": [
            { "name": "Broken", "colors": [ { "hex": "nope" } ] }
          ]
        }"##,
    )
    .expect("parse document");
    let reports = validate_document(&document);
    let payload = report_payload("broken.json", &reports);

    assert_eq!(payload.reports.len(), 1);
    let summary = &payload.reports[0];
    assert_eq!(summary.error_count, 1);
    assert_eq!(summary.issues[0].code, "PJ0001");
    assert_eq!(summary.issues[0].palette, "Broken");
    assert_eq!(summary.issues[0].color.as_deref(), Some("nope"));
}
