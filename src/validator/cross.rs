//! Cross-field rules, keyed by form kind.
//!
//! These run after the per-field pass and may add further errors, but never
//! a second error for a field that is already flagged.

use super::patterns::{is_valid_email, is_valid_phone};
use super::{
    MIN_MESSAGE_LEN, MIN_PASSWORD_LEN, MIN_USERNAME_LEN, RuleViolation, ValidationError,
    Validator, file,
};
use crate::form::{FieldKind, FieldSpec, FileDesignation, FormKind};

pub(super) fn apply(
    v: &Validator,
    kind: FormKind,
    fields: &[FieldSpec],
    errors: &mut Vec<ValidationError>,
) {
    match kind {
        FormKind::Application => apply_application(v, fields, errors),
        FormKind::Contact => apply_contact(v, fields, errors),
        FormKind::Newsletter => apply_newsletter(v, fields, errors),
        FormKind::Login => apply_login(v, fields, errors),
    }
}

fn flagged(errors: &[ValidationError], name: &str) -> bool {
    errors.iter().any(|e| e.field == name)
}

/// Job application: applicant contact details re-checked, the CV upload
/// independently re-validated, and the privacy consent box must be checked
/// whether or not it was declared required.
fn apply_application(v: &Validator, fields: &[FieldSpec], errors: &mut Vec<ValidationError>) {
    for field in fields {
        if flagged(errors, &field.name) {
            continue;
        }
        match field.kind {
            FieldKind::Email => {
                let text = field.value.text().trim();
                if !text.is_empty() && !is_valid_email(text) {
                    errors.push(v.violation(&field.name, RuleViolation::EmailInvalid));
                }
            }
            FieldKind::Phone => {
                let text = field.value.text().trim();
                if !text.is_empty() && !is_valid_phone(text) {
                    errors.push(v.violation(&field.name, RuleViolation::PhoneInvalid));
                }
            }
            FieldKind::File if field.designation == FileDesignation::Cv => {
                if let Some(err) = file::check(v, field) {
                    errors.push(err);
                } else if field.required && field.value.is_empty() {
                    errors.push(v.violation(&field.name, RuleViolation::Required));
                }
            }
            FieldKind::Checkbox => {
                if !field.value.is_checked() {
                    errors.push(v.violation(&field.name, RuleViolation::TermsRequired));
                }
            }
            _ => {}
        }
    }
}

/// Contact form: email re-checked, a required category selection must be
/// non-empty, and the message body must reach the minimum trimmed length.
fn apply_contact(v: &Validator, fields: &[FieldSpec], errors: &mut Vec<ValidationError>) {
    for field in fields {
        if flagged(errors, &field.name) {
            continue;
        }
        let text = field.value.text().trim();
        match field.kind {
            FieldKind::Email => {
                if !text.is_empty() && !is_valid_email(text) {
                    errors.push(v.violation(&field.name, RuleViolation::EmailInvalid));
                }
            }
            FieldKind::Select => {
                if field.required && text.is_empty() {
                    errors.push(v.violation(&field.name, RuleViolation::Required));
                }
            }
            _ if field.name == "message" => {
                if text.chars().count() < MIN_MESSAGE_LEN {
                    errors.push(v.violation(
                        &field.name,
                        RuleViolation::MinLength {
                            min: MIN_MESSAGE_LEN,
                        },
                    ));
                }
            }
            _ => {}
        }
    }
}

/// Newsletter: the email is re-checked and any failure at all collapses the
/// report to a single aggregate entry. No accumulation on this path.
fn apply_newsletter(v: &Validator, fields: &[FieldSpec], errors: &mut Vec<ValidationError>) {
    for field in fields {
        if field.kind == FieldKind::Email
            && !flagged(errors, &field.name)
            && !is_valid_email(field.value.text().trim())
        {
            errors.push(v.violation(&field.name, RuleViolation::EmailInvalid));
        }
    }

    if !errors.is_empty() {
        let target = fields
            .iter()
            .find(|f| f.kind == FieldKind::Email)
            .map(|f| f.name.clone())
            .unwrap_or_else(|| "form".to_string());
        let aggregate = v.violation(&target, RuleViolation::FormInvalid);
        errors.clear();
        errors.push(aggregate);
    }
}

/// Admin login: username and password length floors.
fn apply_login(v: &Validator, fields: &[FieldSpec], errors: &mut Vec<ValidationError>) {
    for field in fields {
        if flagged(errors, &field.name) {
            continue;
        }
        let len = field.value.text().trim().chars().count();
        if field.name == "username" && len < MIN_USERNAME_LEN {
            errors.push(v.violation(
                &field.name,
                RuleViolation::MinLength {
                    min: MIN_USERNAME_LEN,
                },
            ));
        } else if field.kind == FieldKind::Password && len < MIN_PASSWORD_LEN {
            errors.push(v.violation(
                &field.name,
                RuleViolation::MinLength {
                    min: MIN_PASSWORD_LEN,
                },
            ));
        }
    }
}
