//! Failure modes across the full pipeline.

use serde_json::json;
use tempfile::TempDir;

use pdfbind::BindError;

use crate::common::{job, page_count, spec, write_manifest, write_test_pdf};

#[test]
fn test_missing_config_file() {
    let tmp = TempDir::new().unwrap();
    let manifest = tmp.path().join("nonexistent.json");
    let output = tmp.path().join("out.pdf");

    let err = pdfbind::run(&job(&manifest, &output)).unwrap_err();
    assert!(matches!(err, BindError::ConfigRead { .. }));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_malformed_config_json() {
    let tmp = TempDir::new().unwrap();
    let manifest = tmp.path().join("config.json");
    std::fs::write(&manifest, "{ not json").unwrap();

    let output = tmp.path().join("out.pdf");
    let err = pdfbind::run(&job(&manifest, &output)).unwrap_err();
    assert!(matches!(err, BindError::ConfigParse { .. }));
}

#[test]
fn test_output_equal_to_config_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let manifest = tmp.path().join("config.json");
    write_manifest(&manifest, &json!({ "files": ["a.pdf"] }));

    let err = pdfbind::run(&job(&manifest, &manifest)).unwrap_err();
    assert!(matches!(err, BindError::InvalidConfig { .. }));
}

#[test]
fn test_corrupt_source_is_skipped() {
    let tmp = TempDir::new().unwrap();
    let good = tmp.path().join("good.pdf");
    write_test_pdf(&good, 1, 612);
    let bad = tmp.path().join("bad.pdf");
    std::fs::write(&bad, b"this is not a pdf").unwrap();

    let manifest = tmp.path().join("config.json");
    write_manifest(&manifest, &json!({ "files": [spec(&bad), spec(&good)] }));

    let output = tmp.path().join("out.pdf");
    let report = pdfbind::run(&job(&manifest, &output)).unwrap();

    assert_eq!(report.processed, 1);
    assert_eq!(report.skipped, 1);
    assert_eq!(page_count(&output), 1);
}

#[test]
fn test_only_corrupt_sources_is_nothing_to_bind() {
    let tmp = TempDir::new().unwrap();
    let bad = tmp.path().join("bad.pdf");
    std::fs::write(&bad, b"this is not a pdf").unwrap();

    let manifest = tmp.path().join("config.json");
    write_manifest(&manifest, &json!({ "files": [spec(&bad)] }));

    let output = tmp.path().join("out.pdf");
    let err = pdfbind::run(&job(&manifest, &output)).unwrap_err();
    assert!(matches!(err, BindError::NothingToBind));
    assert!(!output.exists());
}

#[test]
fn test_unsupported_leaf_entry_counts_as_skipped() {
    let tmp = TempDir::new().unwrap();
    let good = tmp.path().join("good.pdf");
    write_test_pdf(&good, 1, 612);
    let notes = tmp.path().join("notes.txt");
    std::fs::write(&notes, b"plain text").unwrap();

    let manifest = tmp.path().join("config.json");
    write_manifest(&manifest, &json!({ "files": [spec(&notes), spec(&good)] }));

    let output = tmp.path().join("out.pdf");
    let report = pdfbind::run(&job(&manifest, &output)).unwrap();

    assert_eq!(report.processed, 1);
    assert_eq!(report.skipped, 1);
    assert_eq!(page_count(&output), 1);
}

#[test]
fn test_unsupported_extension_in_directory_is_skipped() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("sources");
    std::fs::create_dir(&dir).unwrap();
    write_test_pdf(&dir.join("a.pdf"), 1, 612);
    std::fs::write(dir.join("notes.txt"), b"ignore me").unwrap();

    let manifest = tmp.path().join("config.json");
    write_manifest(&manifest, &json!({ "files": [spec(&dir)] }));

    let output = tmp.path().join("out.pdf");
    let report = pdfbind::run(&job(&manifest, &output)).unwrap();
    assert_eq!(report.pages, 1);
}

#[test]
fn test_empty_files_array_is_nothing_to_bind() {
    let tmp = TempDir::new().unwrap();
    let manifest = tmp.path().join("config.json");
    write_manifest(&manifest, &json!({ "files": [] }));

    let output = tmp.path().join("out.pdf");
    let err = pdfbind::run(&job(&manifest, &output)).unwrap_err();
    assert!(matches!(err, BindError::NothingToBind));
}
