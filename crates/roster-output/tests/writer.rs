//! Integration tests for the ConvertKit writer.

use std::fs;

use roster_model::NormalizedContact;
use roster_output::{ContactWriter, OutputError};

fn contact(email: &str, first: &str, last: &str, tags: &[&str]) -> NormalizedContact {
    NormalizedContact {
        email: email.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        tags: tags.iter().map(|tag| (*tag).to_string()).collect(),
    }
}

#[test]
fn writes_import_file_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("members_convertkit_ready.csv");

    let mut writer = ContactWriter::create(&path).unwrap();
    writer
        .write_contact(&contact("jane@example.com", "Jane Q.", "Public", &["VIP"]))
        .unwrap();
    writer
        .write_contact(&contact(
            "Zoe@Example.org",
            "Zoë",
            "O'Neil-Smith",
            &["Newsletter", "Spring Sale 2024"],
        ))
        .unwrap();
    writer
        .write_contact(&contact("sam@example.net", "", "", &[]))
        .unwrap();
    assert_eq!(writer.finish().unwrap(), 3);

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("Email,First Name,Last Name,Tags\r\n"));
    let normalized = text.replace("\r\n", "\n");
    insta::assert_snapshot!(normalized.trim_end(), @r#"
    Email,First Name,Last Name,Tags
    jane@example.com,Jane Q.,Public,VIP
    Zoe@Example.org,Zoë,O'Neil-Smith,"Newsletter, Spring Sale 2024"
    sam@example.net,,,
    "#);
}

#[test]
fn create_truncates_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    fs::write(&path, "stale contents\nmore stale contents\n").unwrap();

    let writer = ContactWriter::create(&path).unwrap();
    assert_eq!(writer.finish().unwrap(), 0);

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, "Email,First Name,Last Name,Tags\r\n");
}

#[test]
fn create_fails_when_parent_is_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "x").unwrap();

    let err = ContactWriter::create(&blocker.join("out.csv")).err().unwrap();
    assert!(matches!(err, OutputError::CreateDir { .. }));
}
