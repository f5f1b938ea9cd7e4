use roster_model::{ColumnMapping, NormalizedContact, Record, SkipReason};

use crate::normalization::{EmailStatus, classify_email, clean_name, clean_tag_list};

/// Validate a record's email and clean its other fields.
///
/// Duplicate detection is left to the caller, since it depends on pass state.
pub fn normalize_record(
    record: &Record,
    mapping: &ColumnMapping,
) -> Result<NormalizedContact, SkipReason> {
    let email = match classify_email(record.field(&mapping.email)) {
        EmailStatus::Valid(email) => email,
        EmailStatus::Invalid => return Err(SkipReason::InvalidEmail),
        EmailStatus::Missing => return Err(SkipReason::MissingEmail),
    };
    Ok(NormalizedContact {
        email: email.to_string(),
        first_name: clean_name(record.field(&mapping.first_name)),
        last_name: clean_name(record.field(&mapping.last_name)),
        tags: clean_tag_list(record.field(&mapping.tags)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mailchimp() -> ColumnMapping {
        ColumnMapping::default()
    }

    #[test]
    fn test_normalizes_all_fields() {
        let record = Record::from_pairs([
            ("Email Address", "  Jane@Example.com "),
            ("First Name", " Jane  Q. "),
            ("Last Name", "Public\n"),
            ("TAGS", "\"VIP\"; New"),
        ]);
        let contact = normalize_record(&record, &mailchimp()).unwrap();
        assert_eq!(contact.email, "Jane@Example.com");
        assert_eq!(contact.first_name, "Jane Q.");
        assert_eq!(contact.last_name, "Public");
        assert_eq!(contact.tags, vec!["VIP", "New"]);
    }

    #[test]
    fn test_skip_reasons() {
        let invalid = Record::from_pairs([("Email Address", "not-an-email")]);
        let missing = Record::from_pairs([("First Name", "Nobody")]);
        assert_eq!(
            normalize_record(&invalid, &mailchimp()),
            Err(SkipReason::InvalidEmail)
        );
        assert_eq!(
            normalize_record(&missing, &mailchimp()),
            Err(SkipReason::MissingEmail)
        );
    }

    #[test]
    fn test_uses_resolved_columns() {
        let mapping = ColumnMapping::resolve(&["Email Address", "Email", "Tags"]);
        let record = Record::from_pairs([
            ("Email Address", "ignored@example.com"),
            ("Email", "used@example.com"),
            ("Tags", "a|b"),
        ]);
        let contact = normalize_record(&record, &mapping).unwrap();
        assert_eq!(contact.email, "used@example.com");
        assert_eq!(contact.tags_cell(), "a, b");
    }
}
