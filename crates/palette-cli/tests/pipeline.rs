//! Integration tests for the validation pipeline.

use std::path::{Path, PathBuf};

use palette_cli::pipeline::{ValidateOptions, expand_inputs, run_validate};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../palette-ingest/tests/fixtures")
}

fn temp_output_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("palettejson-{tag}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn expand_inputs_walks_directories() {
    let files = expand_inputs(&[fixtures_dir()]).expect("expand fixtures dir");
    assert_eq!(files.len(), 4);
    assert!(files.iter().all(|file| file.extension().is_some()));
}

#[test]
fn batch_run_collects_ingest_errors_without_aborting() {
    let result =
        run_validate(&[fixtures_dir()], &ValidateOptions::default()).expect("run validate");
    // broken.json fails to parse; the other three documents validate clean.
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("broken.json"));
    assert!(result.failed);
    // simple + sunset + two palettes in comprehensive.json
    assert_eq!(result.rows.len(), 4);
    assert!(result.rows.iter().all(|row| row.report.issues.is_empty()));
}

#[test]
fn clean_single_file_passes() {
    let result = run_validate(
        &[fixtures_dir().join("simple.json")],
        &ValidateOptions::default(),
    )
    .expect("run validate");
    assert!(!result.failed);
    assert_eq!(result.rows.len(), 1);
    assert_eq!(result.rows[0].report.palette, "Cool Tones");
    assert_eq!(result.rows[0].kind.as_deref(), Some("categorical"));
    assert_eq!(result.rows[0].color_count, Some(3));
}

#[test]
fn report_dir_receives_json_report() {
    let report_dir = temp_output_dir("report");
    let options = ValidateOptions {
        report_dir: Some(report_dir.clone()),
        strict: false,
    };
    let result =
        run_validate(&[fixtures_dir().join("sunset.json")], &options).expect("run validate");
    assert_eq!(result.report_paths.len(), 1);
    let path = &result.report_paths[0];
    assert!(path.ends_with("sunset.validation_report.json"));

    let raw = std::fs::read_to_string(path).expect("read report");
    let payload: serde_json::Value = serde_json::from_str(&raw).expect("parse report");
    assert_eq!(
        payload["schema"].as_str(),
        Some("palettejson.validation-report")
    );
    assert_eq!(payload["reports"][0]["palette"].as_str(), Some("Sunset Gradient"));

    let _ = std::fs::remove_dir_all(&report_dir);
}

#[test]
fn strict_mode_fails_on_warning_documents() {
    let dir = temp_output_dir("strict");
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let file = dir.join("warned.json");
    std::fs::write(
        &file,
        r##"{ "palettes": [ { "name": "W", "version": "not-semver", "colors": [ { "hex": "#112233" } ] } ] }"##,
    )
    .expect("write document");

    let lenient = run_validate(&[file.clone()], &ValidateOptions::default()).expect("lenient run");
    assert!(!lenient.failed);

    let strict = run_validate(
        &[file],
        &ValidateOptions {
            report_dir: None,
            strict: true,
        },
    )
    .expect("strict run");
    assert!(strict.failed);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_file_marks_run_failed() {
    let result = run_validate(
        &[PathBuf::from("/definitely/missing.json")],
        &ValidateOptions::default(),
    )
    .expect("run validate");
    assert!(result.failed);
    assert_eq!(result.rows.len(), 0);
    assert_eq!(result.errors.len(), 1);
}
