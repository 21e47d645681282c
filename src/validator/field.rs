//! Per-field rule dispatch.
//!
//! Rule order: required/empty first, then the kind-specific format rule,
//! then declared length bounds. The first failing rule wins; a field can
//! only carry one error at a time.

use super::patterns::{is_valid_email, is_valid_phone};
use super::{MIN_PASSWORD_LEN, RuleViolation, ValidationError, Validator, file};
use crate::form::{FieldKind, FieldSpec};

pub(super) fn check(v: &Validator, field: &FieldSpec) -> Option<ValidationError> {
    let empty = field.value.is_empty();

    // A required, unchecked checkbox gets the consent message instead of
    // the generic required one.
    if field.kind == FieldKind::Checkbox {
        if field.required && empty {
            return Some(v.violation(&field.name, RuleViolation::TermsRequired));
        }
        return None;
    }

    if field.required && empty {
        return Some(v.violation(&field.name, RuleViolation::Required));
    }
    if empty {
        return None;
    }

    let text = field.value.text().trim();
    match field.kind {
        FieldKind::Email => (!is_valid_email(text))
            .then(|| v.violation(&field.name, RuleViolation::EmailInvalid)),
        FieldKind::Phone => (!is_valid_phone(text))
            .then(|| v.violation(&field.name, RuleViolation::PhoneInvalid)),
        FieldKind::Password => (text.chars().count() < MIN_PASSWORD_LEN).then(|| {
            v.violation(
                &field.name,
                RuleViolation::MinLength {
                    min: MIN_PASSWORD_LEN,
                },
            )
        }),
        FieldKind::File => file::check(v, field),
        // Handled above.
        FieldKind::Checkbox => None,
        FieldKind::Text | FieldKind::Select | FieldKind::Generic => {
            check_length_bounds(v, field, text)
        }
    }
}

fn check_length_bounds(v: &Validator, field: &FieldSpec, text: &str) -> Option<ValidationError> {
    let len = text.chars().count();
    if let Some(min) = field.min_length {
        if len < min {
            return Some(v.violation(&field.name, RuleViolation::MinLength { min }));
        }
    }
    if let Some(max) = field.max_length {
        if len > max {
            return Some(v.violation(&field.name, RuleViolation::MaxLength { max }));
        }
    }
    None
}
