//! # Periksa - Form Validation and Draft Persistence Engine
//!
//! **Periksa** is a declarative validation engine for form input, paired with
//! a draft store that keeps in-progress values safe across sessions. Fields
//! are described as data, rules are dispatched by field kind and form kind,
//! and every violation comes back as a structured, ordered error entry - the
//! engine never renders UI and never throws for malformed declarations.
//!
//! ## Core Workflow
//!
//! 1.  **Describe your fields**: build a `FieldSpec` per input from your live
//!     form state (kind, required flag, length bounds, file constraints,
//!     current value).
//! 2.  **Validate**: run `Validator::validate` with the fields and the
//!     `FormKind`. Per-field rules run in declaration order, then the
//!     cross-field rules of the form kind. The report accumulates every
//!     violation so a renderer can show them all at once.
//! 3.  **Persist drafts**: capture a `FormSnapshot` of the non-file values
//!     and hand it to a `DraftStore` keyed by a slot name; restore it on the
//!     next visit. Malformed drafts read back as absent, never as errors.
//! 4.  **Debounce the hot paths**: the `Debouncer` coalesces rapid edits so
//!     real-time validation and autosave fire once per quiet period.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use periksa::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Describe the form as it currently stands.
//!     let fields = vec![
//!         FieldSpec::text("name").required().with_value("Siti Rahma"),
//!         FieldSpec::email("email").required().with_value("siti@example.com"),
//!         FieldSpec::phone("phone").with_value("0812-3456-7890"),
//!     ];
//!
//!     // Validate it as a contact form.
//!     let validator = Validator::new();
//!     let report = validator.validate(&fields, FormKind::Contact);
//!     for error in &report.errors {
//!         println!("{}: {}", error.field, error.message);
//!     }
//!
//!     // Stash a draft and restore it later.
//!     let drafts = DraftStore::new(MemoryStore::new());
//!     drafts.save("contact-draft", &FormSnapshot::capture(&fields))?;
//!     if let Some(draft) = drafts.load("contact-draft") {
//!         println!("draft from {} restored", draft.saved_at);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod draft;
pub mod error;
pub mod form;
pub mod message;
pub mod prelude;
pub mod probe;
pub mod schedule;
pub mod transport;
pub mod validator;
