//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the periksa crate. Import
//! this module to get the core validation and draft functionality without
//! naming each module individually.

// Validation engine
pub use crate::validator::{
    RuleViolation, ValidationError, ValidationReport, Validator, format_phone_number,
    is_valid_email, is_valid_phone,
};

// Field and form declarations
pub use crate::form::{
    FieldKind, FieldSpec, FieldValue, FileDesignation, FileMeta, FormKind, file_extension,
};

// Messages
pub use crate::message::MessageCatalog;

// Draft persistence
pub use crate::draft::{
    DraftStore, FileStore, FormSnapshot, MemoryStore, SnapshotValue, StoreBackend,
};

// Scheduling
pub use crate::schedule::{AUTOSAVE_DEBOUNCE, Debouncer, VALIDATION_DEBOUNCE};

// Async collaborators
pub use crate::probe::{ImageInspector, ProbeFailure, ResolutionProbe};
pub use crate::transport::{FakeTransport, SubmitReceipt, Transport};

// Error types
pub use crate::error::{ProbeError, StoreError, SubmitError};
