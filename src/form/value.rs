/// Metadata for a file selected in a file field.
///
/// Only metadata is carried; file contents never enter the engine and are
/// never persisted in a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub size_bytes: u64,
    /// MIME type as reported by the picker (e.g. `"image/png"`).
    pub content_type: String,
}

impl FileMeta {
    pub fn new(name: &str, size_bytes: u64, content_type: &str) -> Self {
        Self {
            name: name.to_string(),
            size_bytes,
            content_type: content_type.to_string(),
        }
    }

    /// The lowercased extension after the last `.`, including the dot.
    pub fn extension(&self) -> Option<String> {
        file_extension(&self.name)
    }

    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}

/// Extracts the lowercased `.ext` suffix of a file name, if it has one.
pub fn file_extension(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(format!(".{}", ext.to_lowercase()))
}

/// The current value of a field at validation time.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
    File(Option<FileMeta>),
}

impl FieldValue {
    /// The textual content, or `""` for non-text values.
    pub fn text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self, FieldValue::Checked(true))
    }

    pub fn file(&self) -> Option<&FileMeta> {
        match self {
            FieldValue::File(meta) => meta.as_ref(),
            _ => None,
        }
    }

    /// Emptiness as the required-rule sees it: trim-empty text, an
    /// unchecked checkbox, or a file field with nothing selected.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Checked(checked) => !checked,
            FieldValue::File(meta) => meta.is_none(),
        }
    }
}
