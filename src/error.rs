use thiserror::Error;

/// Errors that can occur while reading or writing the persistent store.
///
/// Note that a *malformed* draft is not an error: `DraftStore::load` treats
/// unparseable content as an absent draft and only logs it.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store backend I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize draft snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors surfaced by a submission transport.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Generic rejection, distinct from validation errors. The message is
    /// the renderer-facing one from the original site.
    #[error("Terjadi kesalahan. Silakan coba lagi.")]
    Rejected,
}

/// Errors reported by an `ImageInspector` while decoding image data.
#[derive(Error, Debug, Clone)]
pub enum ProbeError {
    #[error("image could not be decoded: {0}")]
    Decode(String),
}
