//! Renderer-facing messages for rule violations.
//!
//! Each `RuleViolation` maps to exactly one displayable message. Templates
//! support `{min}`, `{max}` and `{types}` placeholders filled from the
//! rule's bound values. The defaults are the Indonesian strings shipped by
//! the original site; callers can override any of them per key.

use crate::validator::RuleViolation;
use ahash::AHashMap;

/// Message template catalog with parameter substitution.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    templates: AHashMap<&'static str, String>,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        let mut templates = AHashMap::new();
        templates.insert("required", "Field ini wajib diisi".to_string());
        templates.insert("email_invalid", "Format email tidak valid".to_string());
        templates.insert(
            "phone_invalid",
            "Format nomor telepon Indonesia tidak valid. Contoh: 081234567890".to_string(),
        );
        templates.insert("min_length", "Minimal {min} karakter".to_string());
        templates.insert("max_length", "Maksimal {max} karakter".to_string());
        templates.insert(
            "file_too_large",
            "File terlalu besar. Maksimal {max}MB".to_string(),
        );
        templates.insert(
            "file_type_invalid",
            "Format file tidak didukung. Gunakan: {types}".to_string(),
        );
        templates.insert("password_mismatch", "Password tidak sama".to_string());
        templates.insert(
            "terms_required",
            "Anda harus menyetujui syarat dan ketentuan".to_string(),
        );
        templates.insert(
            "form_invalid",
            "Periksa kembali data yang Anda masukkan".to_string(),
        );
        Self { templates }
    }
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the template under `key` (one of the keys returned by
    /// [`MessageCatalog::key_for`]).
    pub fn with_message(mut self, key: &'static str, template: &str) -> Self {
        self.templates.insert(key, template.to_string());
        self
    }

    /// The catalog key a violation renders through.
    pub fn key_for(rule: &RuleViolation) -> &'static str {
        match rule {
            RuleViolation::Required => "required",
            RuleViolation::EmailInvalid => "email_invalid",
            RuleViolation::PhoneInvalid => "phone_invalid",
            RuleViolation::MinLength { .. } => "min_length",
            RuleViolation::MaxLength { .. } => "max_length",
            RuleViolation::FileTooLarge { .. } => "file_too_large",
            RuleViolation::FileTypeInvalid { .. } => "file_type_invalid",
            RuleViolation::TermsRequired => "terms_required",
            RuleViolation::PasswordMismatch => "password_mismatch",
            RuleViolation::FormInvalid => "form_invalid",
        }
    }

    /// Renders the message for a violation, substituting bound parameters.
    pub fn render(&self, rule: &RuleViolation) -> String {
        let template = self
            .templates
            .get(Self::key_for(rule))
            .cloned()
            .unwrap_or_default();
        match rule {
            RuleViolation::MinLength { min } => template.replace("{min}", &min.to_string()),
            RuleViolation::MaxLength { max } => template.replace("{max}", &max.to_string()),
            RuleViolation::FileTooLarge { max_mb } => {
                template.replace("{max}", &max_mb.to_string())
            }
            RuleViolation::FileTypeInvalid { types } => template.replace("{types}", types),
            _ => template,
        }
    }
}
