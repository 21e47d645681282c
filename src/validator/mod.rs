//! The validation engine.
//!
//! `Validator::validate` runs every declared field through the rule set for
//! its kind, then layers the cross-field rules of the form kind on top. It
//! accumulates every violation instead of stopping at the first one, so a
//! renderer can surface all errors in a single pass. The engine is pure:
//! identical field snapshots always produce identical reports.

use crate::form::{FieldKind, FieldSpec, FileDesignation, FormKind};
use crate::message::MessageCatalog;
use crate::probe::{ImageInspector, ResolutionProbe};
use std::sync::Arc;

mod cross;
mod field;
mod file;
pub mod patterns;

pub use file::{DEFAULT_MAX_CV_MB, DEFAULT_MAX_FILE_MB, DEFAULT_MAX_IMAGE_MB};
pub use patterns::{format_phone_number, is_valid_email, is_valid_phone, normalize_phone};

/// Minimum password length, shared by the password field rule and the
/// login cross-field rule.
pub const MIN_PASSWORD_LEN: usize = 6;
/// Minimum username length for the login form.
pub const MIN_USERNAME_LEN: usize = 3;
/// Minimum trimmed message length for the contact form.
pub const MIN_MESSAGE_LEN: usize = 10;

/// Which rule a field violated. Bound values feed message substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleViolation {
    Required,
    EmailInvalid,
    PhoneInvalid,
    MinLength { min: usize },
    MaxLength { max: usize },
    FileTooLarge { max_mb: u64 },
    FileTypeInvalid { types: String },
    TermsRequired,
    /// Reserved for password-confirmation forms; no shipped form uses it.
    PasswordMismatch,
    /// Aggregate form-level failure, used by the newsletter short-circuit.
    FormInvalid,
}

/// One violation, produced fresh on each validation pass and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: String,
    pub rule: RuleViolation,
    /// Rendered from the catalog at creation time.
    pub message: String,
}

/// The outcome of a validation pass.
///
/// `errors` is ordered: per-field violations in field declaration order,
/// then any cross-field violations. `probes` carries the asynchronous
/// image-resolution checks; they resolve independently of `valid` and a
/// caller that needs resolution enforcement must await them separately.
#[derive(Debug)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    pub probes: Vec<ResolutionProbe>,
}

/// Validates declared fields against their kind-specific and form-specific
/// rules.
#[derive(Default)]
pub struct Validator {
    catalog: MessageCatalog,
    inspector: Option<Arc<dyn ImageInspector>>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the message catalog used to render violations.
    pub fn with_catalog(mut self, catalog: MessageCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Installs an image inspector. Without one, no resolution probes are
    /// produced (the synchronous rules still run in full).
    pub fn with_inspector(mut self, inspector: Arc<dyn ImageInspector>) -> Self {
        self.inspector = Some(inspector);
        self
    }

    /// Validates a whole form: per-field checks in declaration order, then
    /// the cross-field rules for `kind`. A field carries at most one error.
    pub fn validate(&self, fields: &[FieldSpec], kind: FormKind) -> ValidationReport {
        let mut errors = Vec::new();
        let mut probes = Vec::new();

        for field in fields {
            if let Some(err) = self.validate_field(field) {
                errors.push(err);
            }
            if let Some(probe) = self.image_probe(field) {
                probes.push(probe);
            }
        }

        cross::apply(self, kind, fields, &mut errors);

        ValidationReport {
            valid: errors.is_empty(),
            errors,
            probes,
        }
    }

    /// Validates a single field, as triggered on blur or by the debounced
    /// real-time path. Returns the first failing rule, if any.
    pub fn validate_field(&self, field: &FieldSpec) -> Option<ValidationError> {
        field::check(self, field)
    }

    pub(crate) fn violation(&self, field_name: &str, rule: RuleViolation) -> ValidationError {
        let message = self.catalog.render(&rule);
        ValidationError {
            field: field_name.to_string(),
            rule,
            message,
        }
    }

    fn image_probe(&self, field: &FieldSpec) -> Option<ResolutionProbe> {
        let inspector = self.inspector.as_ref()?;
        if field.kind != FieldKind::File {
            return None;
        }
        let meta = field.value.file()?;
        if field.designation == FileDesignation::Image || meta.is_image() {
            Some(ResolutionProbe::new(
                &field.name,
                meta.clone(),
                Arc::clone(inspector),
            ))
        } else {
            None
        }
    }
}
