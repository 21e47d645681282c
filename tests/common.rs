//! Shared builders for field sets and file metadata used across tests.
use periksa::prelude::*;

#[allow(dead_code)]
pub fn file_of(name: &str, size_bytes: u64, content_type: &str) -> FileMeta {
    FileMeta::new(name, size_bytes, content_type)
}

/// A CV upload of `mb` megabytes.
#[allow(dead_code)]
pub fn pdf_file(mb: u64) -> FileMeta {
    FileMeta::new("resume.pdf", mb * 1024 * 1024, "application/pdf")
}

#[allow(dead_code)]
pub fn png_file(size_bytes: u64) -> FileMeta {
    FileMeta::new("photo.png", size_bytes, "image/png")
}

/// A complete, valid job application field set.
#[allow(dead_code)]
pub fn valid_application_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::text("fullName").required().with_value("Siti Rahma"),
        FieldSpec::email("email")
            .required()
            .with_value("siti@example.com"),
        FieldSpec::phone("phone").required().with_value("081234567890"),
        FieldSpec::file("cv")
            .required()
            .designated(FileDesignation::Cv)
            .with_file(pdf_file(1)),
        FieldSpec::checkbox("privacy").required().checked(true),
    ]
}

#[allow(dead_code)]
pub fn contact_fields(email: &str, category: &str, message: &str) -> Vec<FieldSpec> {
    vec![
        FieldSpec::email("email").required().with_value(email),
        FieldSpec::select("category").required().with_value(category),
        FieldSpec::new("message", FieldKind::Generic)
            .required()
            .with_value(message),
    ]
}

#[allow(dead_code)]
pub fn login_fields(username: &str, password: &str) -> Vec<FieldSpec> {
    vec![
        FieldSpec::text("username").required().with_value(username),
        FieldSpec::password("password").required().with_value(password),
    ]
}

#[allow(dead_code)]
pub fn newsletter_fields(email: &str) -> Vec<FieldSpec> {
    vec![FieldSpec::email("email").required().with_value(email)]
}
