use std::fs;

use tempfile::TempDir;

use super::super::COMPONENT_STEM_PATTERN;
use super::*;

fn validator(package: &Path, extensions: &[&str]) -> ValidateComponents {
    ValidateComponents::new(
        package,
        COMPONENT_STEM_PATTERN,
        extensions.iter().map(|e| (*e).to_string()).collect(),
    )
    .unwrap()
}

#[test]
fn complete_components_yield_no_findings() {
    let package = TempDir::new().unwrap();
    for name in ["00000001.txt", "00000001.jp2", "00000002.txt", "00000002.jp2"] {
        fs::write(package.path().join(name), "").unwrap();
    }

    let summary = validator(package.path(), &[".txt", ".jp2"])
        .validate()
        .unwrap();
    assert!(summary.is_empty());
}

#[test]
fn missing_extension_combination_is_reported() {
    let package = TempDir::new().unwrap();
    fs::write(package.path().join("00000001.txt"), "").unwrap();
    fs::write(package.path().join("00000001.jp2"), "").unwrap();
    fs::write(package.path().join("00000002.txt"), "").unwrap();

    let summary = validator(package.path(), &[".txt", ".jp2"])
        .validate()
        .unwrap();
    let messages: Vec<&str> = summary.iter().map(|f| f.message()).collect();
    assert_eq!(messages, vec!["Missing 00000002.jp2"]);
}

#[test]
fn stems_are_reported_in_sorted_order() {
    let package = TempDir::new().unwrap();
    // Created out of order; only the .jp2 side exists for each stem.
    for name in ["00000003.jp2", "00000001.jp2", "00000002.jp2"] {
        fs::write(package.path().join(name), "").unwrap();
    }

    let summary = validator(package.path(), &[".txt"]).validate().unwrap();
    let messages: Vec<&str> = summary.iter().map(|f| f.message()).collect();
    assert_eq!(
        messages,
        vec![
            "Missing 00000001.txt",
            "Missing 00000002.txt",
            "Missing 00000003.txt"
        ]
    );
}

#[test]
fn no_matching_files_is_fatal() {
    let package = TempDir::new().unwrap();
    fs::write(package.path().join("marc.xml"), "").unwrap();

    let error = validator(package.path(), &[".txt", ".jp2"])
        .validate()
        .unwrap_err();
    assert!(matches!(
        error,
        crate::error::HathicheckError::NoComponentFiles { .. }
    ));
}

#[test]
fn non_matching_stems_are_ignored() {
    let package = TempDir::new().unwrap();
    fs::write(package.path().join("00000001.txt"), "").unwrap();
    // Seven digits, and a non-numeric name: neither is a component.
    fs::write(package.path().join("0000001.txt"), "").unwrap();
    fs::write(package.path().join("notes.txt"), "").unwrap();

    let summary = validator(package.path(), &[".txt"]).validate().unwrap();
    assert!(summary.is_empty());
}

#[test]
fn ocr_extension_adds_xml_requirement() {
    let package = TempDir::new().unwrap();
    fs::write(package.path().join("00000001.txt"), "").unwrap();
    fs::write(package.path().join("00000001.jp2"), "").unwrap();

    let summary = validator(package.path(), &[".txt", ".jp2", ".xml"])
        .validate()
        .unwrap();
    let messages: Vec<&str> = summary.iter().map(|f| f.message()).collect();
    assert_eq!(messages, vec!["Missing 00000001.xml"]);
}

#[test]
fn invalid_pattern_is_rejected_at_construction() {
    let package = TempDir::new().unwrap();
    let error =
        ValidateComponents::new(package.path(), "(unclosed", vec![".txt".to_string()]).unwrap_err();
    assert!(matches!(
        error,
        crate::error::HathicheckError::InvalidPattern { .. }
    ));
}
