use std::fs;

use tempfile::TempDir;

use super::*;

const EMPTY_MD5: &str = "d41d8cd98f00b204e9800998ecf8427e";

fn validator(package: &Path) -> ValidateChecksumReport {
    ValidateChecksumReport::new(package, package.join("checksum.md5"))
}

#[test]
fn matching_checksum_yields_no_findings() {
    let package = TempDir::new().unwrap();
    fs::write(package.path().join("00000001.txt"), "").unwrap();
    fs::write(
        package.path().join("checksum.md5"),
        format!("{EMPTY_MD5} 00000001.txt\n"),
    )
    .unwrap();

    let summary = validator(package.path()).validate().unwrap();
    assert!(summary.is_empty());
}

#[test]
fn digest_comparison_is_case_insensitive() {
    let package = TempDir::new().unwrap();
    fs::write(package.path().join("00000001.txt"), "").unwrap();
    fs::write(
        package.path().join("checksum.md5"),
        format!("{} 00000001.txt\n", EMPTY_MD5.to_uppercase()),
    )
    .unwrap();

    let summary = validator(package.path()).validate().unwrap();
    assert!(summary.is_empty());
}

#[test]
fn changed_contents_trigger_exactly_one_mismatch() {
    let package = TempDir::new().unwrap();
    fs::write(package.path().join("00000001.txt"), "one changed byte").unwrap();
    fs::write(
        package.path().join("checksum.md5"),
        format!("{EMPTY_MD5} 00000001.txt\n"),
    )
    .unwrap();

    let summary = validator(package.path()).validate().unwrap();
    let messages: Vec<&str> = summary.iter().map(|f| f.message()).collect();
    assert_eq!(
        messages,
        vec!["Checksum listed in checksum.md5 doesn't match for \"00000001.txt\""]
    );
}

#[test]
fn asterisk_prefix_on_filename_is_stripped() {
    let package = TempDir::new().unwrap();
    fs::write(package.path().join("00000001.txt"), "").unwrap();
    fs::write(
        package.path().join("checksum.md5"),
        format!("{EMPTY_MD5} *00000001.txt\n"),
    )
    .unwrap();

    let summary = validator(package.path()).validate().unwrap();
    assert!(summary.is_empty());
}

#[test]
fn missing_referenced_file_is_a_recoverable_finding() {
    let package = TempDir::new().unwrap();
    fs::write(package.path().join("00000002.txt"), "").unwrap();
    fs::write(
        package.path().join("checksum.md5"),
        format!("{EMPTY_MD5} 00000001.txt\n{EMPTY_MD5} 00000002.txt\n"),
    )
    .unwrap();

    let summary = validator(package.path()).validate().unwrap();
    // The missing first file does not stop the second line being checked.
    let messages: Vec<&str> = summary.iter().map(|f| f.message()).collect();
    assert_eq!(
        messages,
        vec!["Unable to run checksum for missing file, 00000001.txt"]
    );
}

#[test]
fn absent_manifest_reports_file_missing() {
    let package = TempDir::new().unwrap();

    let summary = validator(package.path()).validate().unwrap();
    let messages: Vec<&str> = summary.iter().map(|f| f.message()).collect();
    assert_eq!(messages, vec!["File missing"]);
}

#[test]
fn malformed_digest_aborts_remaining_lines() {
    let package = TempDir::new().unwrap();
    fs::write(package.path().join("00000002.txt"), "not empty").unwrap();
    fs::write(
        package.path().join("checksum.md5"),
        format!("zzzz 00000001.txt\n{EMPTY_MD5} 00000002.txt\n"),
    )
    .unwrap();

    let summary = validator(package.path()).validate().unwrap();
    let messages: Vec<&str> = summary.iter().map(|f| f.message()).collect();
    // The mismatch on line two is never reached.
    assert_eq!(messages, vec!["Malformed checksum line 1 in checksum.md5"]);
}

#[test]
fn parse_checksum_accepts_digest_and_filename() {
    assert_eq!(
        parse_checksum(&format!("{EMPTY_MD5} marc.xml")),
        Some((EMPTY_MD5, "marc.xml"))
    );
}

#[test]
fn parse_checksum_rejects_short_digest() {
    assert_eq!(parse_checksum("abcd marc.xml"), None);
}

#[test]
fn parse_checksum_rejects_non_hex_digest() {
    assert_eq!(
        parse_checksum("zzzz8cd98f00b204e9800998ecf8427e marc.xml"),
        None
    );
}

#[test]
fn parse_checksum_rejects_blank_line() {
    assert_eq!(parse_checksum(""), None);
    assert_eq!(parse_checksum("   "), None);
}

#[test]
fn calculate_md5_of_empty_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty");
    fs::write(&path, "").unwrap();
    assert_eq!(calculate_md5(&path).unwrap(), EMPTY_MD5);
}
