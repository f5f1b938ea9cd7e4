//! End-to-end tests for the analysis and conversion passes.

use std::fs;
use std::path::{Path, PathBuf};

use roster_model::{ConvertOptions, DuplicatePolicy};
use roster_transform::{analyze_export, convert_export};
use tempfile::TempDir;

fn write_export(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap();
    reader
        .records()
        .map(|r| r.unwrap().iter().map(String::from).collect())
        .collect()
}

#[test]
fn converts_with_duplicates_removed() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_export(
        &dir,
        "members.csv",
        b"Email Address,TAGS\na@b.com,VIP;'New'\nbad-email,x\na@b.com,Other\n",
    );

    let outcome = convert_export(&input, &ConvertOptions::for_input(&input)).unwrap();

    assert_eq!(
        outcome.output_path,
        dir.path().join("members_convertkit_ready.csv")
    );
    let rows = read_rows(&outcome.output_path);
    assert_eq!(
        rows,
        vec![
            vec!["Email", "First Name", "Last Name", "Tags"],
            vec!["a@b.com", "", "", "VIP, New"],
        ]
    );
    assert_eq!(outcome.stats.total_rows, 3);
    assert_eq!(outcome.stats.processed, 1);
    assert_eq!(outcome.stats.skipped, 2);
    assert_eq!(outcome.stats.invalid_emails, 1);
    assert_eq!(outcome.stats.duplicates, 1);
    assert_eq!(outcome.stats.tags_cleaned, 1);
}

#[test]
fn output_file_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_export(
        &dir,
        "export.csv",
        "Email Address,First Name,Last Name,Address,Phone Number,TAGS\n\
         jane@example.com,\"  Jane   Q. \",Public,,555-0100,\"\u{201C}Spring Sale\u{201D}; VIP\"\n\
         JANE@example.com,Janet,Dupe,,,\n\
         zoe@example.org,Zoë,O'Neil,,,\"'Newsletter' | VIP |\"\n\
         ,No,Email,,,VIP\n"
            .as_bytes(),
    );
    let output = dir.path().join("out").join("ck.csv");
    let options = ConvertOptions::for_input(&input).with_output_path(&output);

    let outcome = convert_export(&input, &options).unwrap();
    assert_eq!(outcome.stats.processed, 2);
    assert_eq!(outcome.stats.missing_emails, 1);

    let text = fs::read_to_string(&output).unwrap();
    let normalized = text.replace("\r\n", "\n");
    insta::assert_snapshot!(normalized.trim_end(), @r#"
    Email,First Name,Last Name,Tags
    jane@example.com,Jane Q.,Public,"Spring Sale, VIP"
    zoe@example.org,Zoë,O'Neil,"Newsletter, VIP"
    "#);
}

#[test]
fn keep_duplicates_writes_every_valid_row() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_export(
        &dir,
        "members.csv",
        b"Email Address,TAGS\na@b.com,VIP;'New'\nbad-email,x\nA@B.com,Other\n",
    );
    let options =
        ConvertOptions::for_input(&input).with_duplicate_policy(DuplicatePolicy::Keep);

    let outcome = convert_export(&input, &options).unwrap();
    let rows = read_rows(&outcome.output_path);

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1], vec!["a@b.com", "", "", "VIP, New"]);
    assert_eq!(rows[2], vec!["A@B.com", "", "", "Other"]);
    assert_eq!(outcome.stats.skipped, 1);
}

#[test]
fn convertkit_named_columns_take_precedence() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_export(
        &dir,
        "mixed.csv",
        b"Tags,Email Address,Email,TAGS,Last Name,First Name\n\
          primary,old@example.com,new@example.com,fallback,Lee,Ann\n",
    );

    let outcome = convert_export(&input, &ConvertOptions::for_input(&input)).unwrap();
    let rows = read_rows(&outcome.output_path);

    assert_eq!(rows[1], vec!["new@example.com", "Ann", "Lee", "primary"]);
}

#[test]
fn analysis_and_conversion_agree_on_email_counts() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_export(
        &dir,
        "members.csv",
        b"Email,Tags\n\
          a@b.com,x\n\
          not-an-email,y\n\
          ,z\n\
          A@B.COM,x\n\
          c@d.io,\n\
          e@f,w\n",
    );

    let report = analyze_export(&input).unwrap();
    let outcome = convert_export(&input, &ConvertOptions::for_input(&input)).unwrap();

    assert_eq!(report.total_rows, outcome.stats.total_rows);
    assert_eq!(report.valid_emails, outcome.stats.valid_emails());
    assert_eq!(report.invalid_emails, outcome.stats.invalid_emails);
    assert_eq!(report.missing_emails, outcome.stats.missing_emails);
    assert_eq!(report.duplicate_emails, outcome.stats.duplicates);
    assert_eq!(report.valid_emails, 3);
    assert_eq!(report.invalid_emails, 2);
}

#[test]
fn analysis_does_not_write_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_export(&dir, "members.csv", b"Email Address\na@b.com\n");

    let report = analyze_export(&input).unwrap();

    assert_eq!(report.headers, vec!["Email Address"]);
    assert!(!dir.path().join("members_convertkit_ready.csv").exists());
}

#[test]
fn missing_input_is_distinct_failure() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.csv");

    let analyze_err = analyze_export(&input).unwrap_err();
    let convert_err = convert_export(&input, &ConvertOptions::for_input(&input)).unwrap_err();

    assert!(analyze_err.is_input_not_found());
    assert!(convert_err.is_input_not_found());
    assert!(!dir.path().join("absent_convertkit_ready.csv").exists());
}

#[test]
fn malformed_bytes_are_dropped() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_export(
        &dir,
        "latin1.csv",
        b"Email Address,First Name,TAGS\nrene@example.com,Ren\xE9e,Fran\xE7ais\n",
    );

    let outcome = convert_export(&input, &ConvertOptions::for_input(&input)).unwrap();
    let rows = read_rows(&outcome.output_path);

    assert_eq!(rows[1], vec!["rene@example.com", "Rene", "", "Franais"]);
}
