//! End-to-end assembly tests: manifest in, single PDF out.

use serde_json::json;
use tempfile::TempDir;

use crate::common::{job, page_count, page_widths, spec, write_manifest, write_test_pdf, write_test_png};

#[test]
fn test_assemble_two_pdfs_in_manifest_order() {
    let tmp = TempDir::new().unwrap();
    let first = tmp.path().join("first.pdf");
    let second = tmp.path().join("second.pdf");
    write_test_pdf(&first, 2, 100);
    write_test_pdf(&second, 3, 200);

    let manifest = tmp.path().join("config.json");
    write_manifest(&manifest, &json!({ "files": [spec(&second), spec(&first)] }));

    let output = tmp.path().join("out.pdf");
    let report = pdfbind::run(&job(&manifest, &output)).unwrap();

    assert_eq!(report.processed, 2);
    assert_eq!(report.pages, 5);
    assert_eq!(report.output, output);
    // Declaration order wins over lexicographic order.
    assert_eq!(page_widths(&output), vec![200, 200, 200, 100, 100]);
}

#[test]
fn test_assemble_mixed_pdf_and_image() {
    let tmp = TempDir::new().unwrap();
    let doc = tmp.path().join("doc.pdf");
    let scan = tmp.path().join("scan.png");
    write_test_pdf(&doc, 2, 612);
    write_test_png(&scan, 40, 60);

    let manifest = tmp.path().join("config.json");
    write_manifest(&manifest, &json!({ "files": [spec(&doc), spec(&scan)] }));

    let output = tmp.path().join("out.pdf");
    let report = pdfbind::run(&job(&manifest, &output)).unwrap();

    assert_eq!(report.pages, 3);
    // The image page is sized to its pixel dimensions.
    assert_eq!(page_widths(&output), vec![612, 612, 40]);
}

#[test]
fn test_directory_entry_expands_lexicographically() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("sources");
    std::fs::create_dir(&dir).unwrap();
    write_test_pdf(&dir.join("b.pdf"), 1, 200);
    write_test_pdf(&dir.join("a.pdf"), 1, 100);

    let manifest = tmp.path().join("config.json");
    write_manifest(&manifest, &json!({ "files": [spec(&dir)] }));

    let output = tmp.path().join("out.pdf");
    pdfbind::run(&job(&manifest, &output)).unwrap();

    assert_eq!(page_widths(&output), vec![100, 200]);
}

#[test]
fn test_glob_entry_matches_and_sorts() {
    let tmp = TempDir::new().unwrap();
    write_test_pdf(&tmp.path().join("ch2.pdf"), 1, 200);
    write_test_pdf(&tmp.path().join("ch1.pdf"), 1, 100);
    write_test_pdf(&tmp.path().join("notes.pdf"), 1, 300);

    let pattern = format!("{}/ch*.pdf", tmp.path().to_str().unwrap());
    let manifest = tmp.path().join("config.json");
    write_manifest(&manifest, &json!({ "files": [pattern] }));

    let output = tmp.path().join("out.pdf");
    pdfbind::run(&job(&manifest, &output)).unwrap();

    assert_eq!(page_widths(&output), vec![100, 200]);
}

#[test]
fn test_recursive_group_descends_into_subdirectories() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("sources");
    std::fs::create_dir_all(dir.join("nested")).unwrap();
    write_test_pdf(&dir.join("a.pdf"), 1, 100);
    write_test_pdf(&dir.join("nested/b.pdf"), 1, 200);

    let manifest = tmp.path().join("config.json");
    write_manifest(
        &manifest,
        &json!({ "files": [{ "files": [spec(&dir)], "options": ["recursive"] }] }),
    );

    let output = tmp.path().join("out.pdf");
    let report = pdfbind::run(&job(&manifest, &output)).unwrap();
    assert_eq!(report.pages, 2);
    assert_eq!(page_widths(&output), vec![100, 200]);
}

#[test]
fn test_non_recursive_directory_skips_subdirectories() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("sources");
    std::fs::create_dir_all(dir.join("nested")).unwrap();
    write_test_pdf(&dir.join("a.pdf"), 1, 100);
    write_test_pdf(&dir.join("nested/b.pdf"), 1, 200);

    let manifest = tmp.path().join("config.json");
    write_manifest(&manifest, &json!({ "files": [spec(&dir)] }));

    let output = tmp.path().join("out.pdf");
    let report = pdfbind::run(&job(&manifest, &output)).unwrap();
    assert_eq!(report.pages, 1);
}

#[test]
fn test_missing_spec_is_skipped_and_counted() {
    let tmp = TempDir::new().unwrap();
    let real = tmp.path().join("real.pdf");
    write_test_pdf(&real, 1, 612);

    let manifest = tmp.path().join("config.json");
    let missing = tmp.path().join("missing.pdf");
    write_manifest(&manifest, &json!({ "files": [spec(&missing), spec(&real)] }));

    let output = tmp.path().join("out.pdf");
    let report = pdfbind::run(&job(&manifest, &output)).unwrap();

    assert_eq!(report.processed, 1);
    assert_eq!(report.skipped, 1);
    assert_eq!(page_count(&output), 1);
}

#[test]
fn test_all_inputs_missing_is_nothing_to_bind() {
    let tmp = TempDir::new().unwrap();
    let manifest = tmp.path().join("config.json");
    let missing = tmp.path().join("missing.pdf");
    write_manifest(&manifest, &json!({ "files": [spec(&missing)] }));

    let output = tmp.path().join("out.pdf");
    let err = pdfbind::run(&job(&manifest, &output)).unwrap_err();

    assert!(matches!(err, pdfbind::BindError::NothingToBind));
    assert!(!output.exists());
}

#[test]
fn test_same_file_can_appear_twice() {
    let tmp = TempDir::new().unwrap();
    let doc = tmp.path().join("doc.pdf");
    write_test_pdf(&doc, 2, 612);

    let manifest = tmp.path().join("config.json");
    write_manifest(&manifest, &json!({ "files": [spec(&doc), spec(&doc)] }));

    let output = tmp.path().join("out.pdf");
    let report = pdfbind::run(&job(&manifest, &output)).unwrap();
    assert_eq!(report.pages, 4);
}
