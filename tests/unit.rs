//! Helper-level tests: phone canonicalization, extension parsing, kind
//! parsing and message rendering.
use periksa::prelude::*;

#[test]
fn phone_canonicalization_to_plus62() {
    assert_eq!(format_phone_number("081234567890"), "+6281234567890");
    assert_eq!(format_phone_number("6281234567890"), "+6281234567890");
    assert_eq!(format_phone_number("81234567890"), "+6281234567890");
    // Separators are stripped before the prefix check.
    assert_eq!(format_phone_number("0812-3456-7890"), "+6281234567890");
}

#[test]
fn phone_canonicalization_leaves_foreign_numbers_alone() {
    assert_eq!(format_phone_number("12345"), "12345");
    assert_eq!(format_phone_number("+1 555 0100"), "+1 555 0100");
}

#[test]
fn email_pattern_accepts_and_rejects() {
    assert!(is_valid_email("user@example.com"));
    assert!(is_valid_email("first.last+tag@sub.domain.co.id"));
    assert!(!is_valid_email("user@example"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("user@.com"));
    assert!(!is_valid_email("user example@example.com"));
}

#[test]
fn phone_pattern_boundaries() {
    // Minimum length: prefix + 8 + non-zero digit + 6 digits.
    assert!(is_valid_phone("081234567"));
    assert!(!is_valid_phone("08123456"));
    // Maximum length: 9 trailing digits.
    assert!(is_valid_phone("081234567890"));
    assert!(!is_valid_phone("0812345678901"));
    // Second digit after 8 must be 1-9.
    assert!(!is_valid_phone("0801234567"));
}

#[test]
fn extension_extraction() {
    assert_eq!(file_extension("resume.pdf"), Some(".pdf".to_string()));
    assert_eq!(file_extension("RESUME.PDF"), Some(".pdf".to_string()));
    assert_eq!(file_extension("archive.tar.gz"), Some(".gz".to_string()));
    assert_eq!(file_extension("noext"), None);
    assert_eq!(file_extension(".hidden"), None);
    assert_eq!(file_extension("trailing."), None);
}

#[test]
fn field_kind_parsing_with_generic_fallback() {
    assert_eq!(FieldKind::parse("email"), FieldKind::Email);
    assert_eq!(FieldKind::parse("tel"), FieldKind::Phone);
    assert_eq!(FieldKind::parse("phone"), FieldKind::Phone);
    assert_eq!(FieldKind::parse("CHECKBOX"), FieldKind::Checkbox);
    assert_eq!(FieldKind::parse("textarea"), FieldKind::Generic);
    assert_eq!(FieldKind::parse(""), FieldKind::Generic);
}

#[test]
fn message_rendering_substitutes_bound_values() {
    let catalog = MessageCatalog::new();
    assert_eq!(
        catalog.render(&RuleViolation::MinLength { min: 6 }),
        "Minimal 6 karakter"
    );
    assert_eq!(
        catalog.render(&RuleViolation::MaxLength { max: 100 }),
        "Maksimal 100 karakter"
    );
    assert_eq!(
        catalog.render(&RuleViolation::FileTooLarge { max_mb: 2 }),
        "File terlalu besar. Maksimal 2MB"
    );
    assert_eq!(
        catalog.render(&RuleViolation::FileTypeInvalid {
            types: "JPG, PNG, WebP".to_string()
        }),
        "Format file tidak didukung. Gunakan: JPG, PNG, WebP"
    );
}

#[test]
fn message_overrides_replace_defaults() {
    let catalog = MessageCatalog::new().with_message("required", "This field is required");
    assert_eq!(
        catalog.render(&RuleViolation::Required),
        "This field is required"
    );
    // Other keys keep their defaults.
    assert_eq!(
        catalog.render(&RuleViolation::EmailInvalid),
        "Format email tidak valid"
    );
}

#[test]
fn overridden_catalog_flows_through_the_validator() {
    let catalog = MessageCatalog::new().with_message("email_invalid", "Invalid email address");
    let validator = Validator::new().with_catalog(catalog);

    let field = FieldSpec::email("email").required().with_value("bad");
    let err = validator.validate_field(&field).expect("must fail");
    assert_eq!(err.message, "Invalid email address");
}

#[test]
fn probe_failure_display_strings() {
    let exceeded = ProbeFailure::ResolutionExceeded {
        width: 4000,
        height: 3000,
        max_width: 1920,
        max_height: 1080,
    };
    assert_eq!(
        exceeded.to_string(),
        "Ukuran gambar terlalu besar. Maksimal 1920x1080 piksel"
    );
    assert_eq!(ProbeFailure::Unreadable.to_string(), "File gambar tidak valid");
}
