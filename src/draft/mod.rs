//! Draft persistence: capture in-progress form values, stash them under a
//! named slot in a key-value store, and restore them on demand.
//!
//! Snapshots are immutable once written and superseded (not merged) by later
//! saves under the same key. File fields never enter a snapshot.

mod store;

pub use store::{FileStore, MemoryStore, StoreBackend};

use crate::error::StoreError;
use crate::form::{FieldSpec, FieldValue};
use ahash::AHashMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// One persisted value. Only text and checkbox state are captured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SnapshotValue {
    Text(String),
    Checked(bool),
}

/// A point-in-time copy of a form's non-file values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub values: AHashMap<String, SnapshotValue>,
    pub saved_at: DateTime<Utc>,
}

impl FormSnapshot {
    /// Captures the current values of `fields`, skipping file fields.
    pub fn capture(fields: &[FieldSpec]) -> Self {
        let mut values = AHashMap::new();
        for field in fields {
            match &field.value {
                FieldValue::Text(s) => {
                    values.insert(field.name.clone(), SnapshotValue::Text(s.clone()));
                }
                FieldValue::Checked(checked) => {
                    values.insert(field.name.clone(), SnapshotValue::Checked(*checked));
                }
                FieldValue::File(_) => {}
            }
        }
        Self {
            values,
            saved_at: Utc::now(),
        }
    }

    /// Writes captured values back onto a matching field set. Fields with
    /// no saved value, and value/kind mismatches, are left untouched.
    pub fn apply(&self, fields: &mut [FieldSpec]) {
        for field in fields.iter_mut() {
            let Some(saved) = self.values.get(&field.name) else {
                continue;
            };
            match (saved, &mut field.value) {
                (SnapshotValue::Text(s), FieldValue::Text(current)) => {
                    *current = s.clone();
                }
                (SnapshotValue::Checked(b), FieldValue::Checked(current)) => {
                    *current = *b;
                }
                _ => {}
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&SnapshotValue> {
        self.values.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Saves and restores drafts through a [`StoreBackend`].
///
/// The store does no scheduling of its own; write cadence is driven by the
/// caller (typically through [`crate::schedule::Debouncer`]).
pub struct DraftStore<B: StoreBackend> {
    backend: B,
}

impl<B: StoreBackend> DraftStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Serializes and writes `snapshot` under `key`, overwriting any prior
    /// draft. Safe to call as often as the autosave timer fires.
    pub fn save(&self, key: &str, snapshot: &FormSnapshot) -> Result<(), StoreError> {
        let raw = serde_json::to_string(snapshot)?;
        self.backend.set(key, &raw)?;
        debug!(key, fields = snapshot.values.len(), "draft saved");
        Ok(())
    }

    /// Reads the draft under `key`. Missing, unreadable or malformed
    /// content all yield `None`; corruption must never crash the caller.
    pub fn load(&self, key: &str) -> Option<FormSnapshot> {
        let raw = match self.backend.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "draft read failed, treating as absent");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                warn!(key, error = %e, "discarding malformed draft");
                None
            }
        }
    }

    /// Deletes the draft under `key`, if any.
    pub fn clear(&self, key: &str) -> Result<(), StoreError> {
        self.backend.remove(key)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
