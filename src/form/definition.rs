use super::value::{FieldValue, FileMeta};

/// What kind of control a field is. The kind decides which rule subset
/// applies during validation; file rules never run against a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    Password,
    File,
    Checkbox,
    Select,
    Generic,
}

impl FieldKind {
    /// Parses a kind from a loosely-typed declaration (e.g. an HTML `type`
    /// attribute). Unrecognized names fall back to `Generic`, which carries
    /// only the plain text rules.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "text" => Self::Text,
            "email" => Self::Email,
            "tel" | "phone" => Self::Phone,
            "password" => Self::Password,
            "file" => Self::File,
            "checkbox" => Self::Checkbox,
            "select" => Self::Select,
            _ => Self::Generic,
        }
    }
}

/// The form a field set belongs to. Selects which cross-field rules run
/// after the per-field pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Application,
    Contact,
    Newsletter,
    Login,
}

/// The role of an uploaded file. A designation tightens the file rules
/// beyond any declared allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileDesignation {
    #[default]
    Generic,
    /// CV/resume upload: restricted to .pdf/.doc/.docx, 5 MB cap.
    Cv,
    /// Image upload: restricted to JPEG/PNG/WebP, 2 MB cap, and subject to
    /// the asynchronous resolution probe.
    Image,
}

/// Declarative description of one form input and its constraints.
///
/// Specs are read from live form state at validation time and are never
/// persisted themselves; only their values end up in a draft snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    /// Declared file size cap. `None` uses the designation's default.
    pub max_size_bytes: Option<u64>,
    /// Declared extension allow-list (entries like `".pdf"`), matched
    /// case-insensitively on the substring after the last dot.
    pub allowed_extensions: Option<Vec<String>>,
    pub designation: FileDesignation,
    pub value: FieldValue,
}

impl FieldSpec {
    pub fn new(name: &str, kind: FieldKind) -> Self {
        let value = match kind {
            FieldKind::File => FieldValue::File(None),
            FieldKind::Checkbox => FieldValue::Checked(false),
            _ => FieldValue::Text(String::new()),
        };
        Self {
            name: name.to_string(),
            kind,
            required: false,
            min_length: None,
            max_length: None,
            max_size_bytes: None,
            allowed_extensions: None,
            designation: FileDesignation::default(),
            value,
        }
    }

    pub fn text(name: &str) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn email(name: &str) -> Self {
        Self::new(name, FieldKind::Email)
    }

    pub fn phone(name: &str) -> Self {
        Self::new(name, FieldKind::Phone)
    }

    pub fn password(name: &str) -> Self {
        Self::new(name, FieldKind::Password)
    }

    pub fn file(name: &str) -> Self {
        Self::new(name, FieldKind::File)
    }

    pub fn checkbox(name: &str) -> Self {
        Self::new(name, FieldKind::Checkbox)
    }

    pub fn select(name: &str) -> Self {
        Self::new(name, FieldKind::Select)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn with_max_size_bytes(mut self, bytes: u64) -> Self {
        self.max_size_bytes = Some(bytes);
        self
    }

    pub fn with_allowed_extensions(mut self, extensions: &[&str]) -> Self {
        self.allowed_extensions = Some(extensions.iter().map(|e| e.to_string()).collect());
        self
    }

    pub fn designated(mut self, designation: FileDesignation) -> Self {
        self.designation = designation;
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = FieldValue::Text(value.to_string());
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.value = FieldValue::Checked(checked);
        self
    }

    pub fn with_file(mut self, meta: FileMeta) -> Self {
        self.value = FieldValue::File(Some(meta));
        self
    }
}
