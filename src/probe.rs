//! Asynchronous image-resolution probing.
//!
//! Decoding image data to learn its pixel dimensions is the one validation
//! step that suspends. The synchronous pass emits a [`ResolutionProbe`] for
//! each image upload and reports its own result immediately; a caller that
//! needs resolution enforcement awaits the probe separately.

use crate::error::ProbeError;
use crate::form::FileMeta;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Maximum accepted image width, in pixels.
pub const MAX_IMAGE_WIDTH: u32 = 1920;
/// Maximum accepted image height, in pixels.
pub const MAX_IMAGE_HEIGHT: u32 = 1080;

/// Decodes enough of an image to report its pixel dimensions.
///
/// Implementations own the actual decoding (and any I/O needed to reach the
/// bytes); the engine only ever sees dimensions or a decode failure.
#[async_trait]
pub trait ImageInspector: Send + Sync {
    async fn dimensions(&self, file: &FileMeta) -> Result<(u32, u32), ProbeError>;
}

/// Why a probe did not pass.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeFailure {
    #[error("Ukuran gambar terlalu besar. Maksimal {max_width}x{max_height} piksel")]
    ResolutionExceeded {
        width: u32,
        height: u32,
        max_width: u32,
        max_height: u32,
    },

    #[error("File gambar tidak valid")]
    Unreadable,
}

/// A pending resolution check for one image field.
pub struct ResolutionProbe {
    field: String,
    file: FileMeta,
    inspector: Arc<dyn ImageInspector>,
}

impl ResolutionProbe {
    pub(crate) fn new(field: &str, file: FileMeta, inspector: Arc<dyn ImageInspector>) -> Self {
        Self {
            field: field.to_string(),
            file,
            inspector,
        }
    }

    /// The field this probe belongs to.
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn file(&self) -> &FileMeta {
        &self.file
    }

    /// Decodes the image and checks its dimensions against the cap.
    pub async fn resolve(self) -> Result<(), ProbeFailure> {
        match self.inspector.dimensions(&self.file).await {
            Ok((width, height)) if width <= MAX_IMAGE_WIDTH && height <= MAX_IMAGE_HEIGHT => Ok(()),
            Ok((width, height)) => Err(ProbeFailure::ResolutionExceeded {
                width,
                height,
                max_width: MAX_IMAGE_WIDTH,
                max_height: MAX_IMAGE_HEIGHT,
            }),
            Err(_) => Err(ProbeFailure::Unreadable),
        }
    }
}

impl fmt::Debug for ResolutionProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolutionProbe")
            .field("field", &self.field)
            .field("file", &self.file)
            .finish_non_exhaustive()
    }
}
