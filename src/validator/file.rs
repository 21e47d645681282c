//! File upload rules: size caps, extension allow-lists and the tighter
//! constraints a designation imposes. Pixel resolution is not checked here;
//! that runs asynchronously through `crate::probe`.

use super::{RuleViolation, ValidationError, Validator};
use crate::form::{FieldSpec, FileDesignation, FileMeta};
use itertools::Itertools;

const MB: u64 = 1024 * 1024;

/// Default size cap for generic uploads, in megabytes.
pub const DEFAULT_MAX_FILE_MB: u64 = 5;
/// Default size cap for CV uploads.
pub const DEFAULT_MAX_CV_MB: u64 = 5;
/// Default size cap for image uploads.
pub const DEFAULT_MAX_IMAGE_MB: u64 = 2;

const CV_EXTENSIONS: [&str; 3] = [".pdf", ".doc", ".docx"];
const IMAGE_MIME_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/webp"];

pub(super) fn check(v: &Validator, field: &FieldSpec) -> Option<ValidationError> {
    // Absence is the required rule's concern, handled before dispatch.
    let meta = field.value.file()?;

    let default_mb = match field.designation {
        FileDesignation::Cv => DEFAULT_MAX_CV_MB,
        FileDesignation::Image => DEFAULT_MAX_IMAGE_MB,
        FileDesignation::Generic => DEFAULT_MAX_FILE_MB,
    };
    let cap_bytes = field.max_size_bytes.unwrap_or(default_mb * MB);
    if meta.size_bytes > cap_bytes {
        return Some(v.violation(
            &field.name,
            RuleViolation::FileTooLarge {
                max_mb: cap_bytes / MB,
            },
        ));
    }

    if let Some(allowed) = &field.allowed_extensions {
        let ext = meta.extension().unwrap_or_default();
        let permitted = allowed.iter().any(|a| a.trim().to_lowercase() == ext);
        if !permitted {
            let types = allowed.iter().map(|a| a.trim()).join(", ");
            return Some(v.violation(&field.name, RuleViolation::FileTypeInvalid { types }));
        }
    }

    match field.designation {
        FileDesignation::Cv => check_cv(v, field, meta),
        FileDesignation::Image => check_image(v, field, meta),
        FileDesignation::Generic => {
            // Files whose MIME type reports as an image still get the
            // image constraints, designation or not.
            if meta.is_image() {
                check_image(v, field, meta)
            } else {
                None
            }
        }
    }
}

/// CV uploads are restricted to document formats regardless of any declared
/// allow-list, and capped at the CV size limit.
fn check_cv(v: &Validator, field: &FieldSpec, meta: &FileMeta) -> Option<ValidationError> {
    let ext = meta.extension().unwrap_or_default();
    if !CV_EXTENSIONS.contains(&ext.as_str()) {
        return Some(v.violation(
            &field.name,
            RuleViolation::FileTypeInvalid {
                types: CV_EXTENSIONS.iter().join(", "),
            },
        ));
    }
    if meta.size_bytes > DEFAULT_MAX_CV_MB * MB {
        return Some(v.violation(
            &field.name,
            RuleViolation::FileTooLarge {
                max_mb: DEFAULT_MAX_CV_MB,
            },
        ));
    }
    None
}

fn check_image(v: &Validator, field: &FieldSpec, meta: &FileMeta) -> Option<ValidationError> {
    let mime = meta.content_type.to_lowercase();
    if !IMAGE_MIME_TYPES.contains(&mime.as_str()) {
        return Some(v.violation(
            &field.name,
            RuleViolation::FileTypeInvalid {
                types: "JPG, PNG, WebP".to_string(),
            },
        ));
    }
    if meta.size_bytes > DEFAULT_MAX_IMAGE_MB * MB {
        return Some(v.violation(
            &field.name,
            RuleViolation::FileTooLarge {
                max_mb: DEFAULT_MAX_IMAGE_MB,
            },
        ));
    }
    None
}
