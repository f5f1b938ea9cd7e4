//! Tests for roster-model types.

use roster_model::{AnalysisReport, NormalizedContact, OUTPUT_HEADERS, TagCount};

#[test]
fn contact_email_key_is_lowercase() {
    let contact = NormalizedContact {
        email: "Jane.Doe@Example.COM".to_string(),
        ..NormalizedContact::default()
    };
    assert_eq!(contact.email_key(), "jane.doe@example.com");
    assert_eq!(contact.email, "Jane.Doe@Example.COM");
}

#[test]
fn contact_tags_cell_keeps_repeats() {
    let contact = NormalizedContact {
        email: "a@b.com".to_string(),
        tags: vec!["VIP".to_string(), "VIP".to_string(), "New".to_string()],
        ..NormalizedContact::default()
    };
    assert!(contact.has_tags());
    assert_eq!(contact.tags_cell(), "VIP, VIP, New");
}

#[test]
fn output_headers_are_fixed() {
    assert_eq!(OUTPUT_HEADERS, ["Email", "First Name", "Last Name", "Tags"]);
}

#[test]
fn analysis_report_remaining_tags() {
    let report = AnalysisReport {
        headers: vec!["Email Address".to_string(), "TAGS".to_string()],
        unique_tags: 7,
        top_tags: vec![
            TagCount {
                tag: "VIP".to_string(),
                count: 3,
            },
            TagCount {
                tag: "New".to_string(),
                count: 1,
            },
        ],
        ..AnalysisReport::default()
    };
    assert_eq!(report.column_count(), 2);
    assert_eq!(report.remaining_tags(), 5);
}
