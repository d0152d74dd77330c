// src/shared/documents/source.rs
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, trace};

use super::error::DocumentReadError;

/// Raw access to bundled documents by logical location
/// (e.g. `en/education.json`).
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn fetch(&self, location: &str) -> Result<Arc<[u8]>, DocumentReadError>;
}

#[async_trait]
impl<S> DocumentSource for Arc<S>
where
    S: DocumentSource + ?Sized,
{
    async fn fetch(&self, location: &str) -> Result<Arc<[u8]>, DocumentReadError> {
        (**self).fetch(location).await
    }
}

/// Reads documents from a directory on disk, relative to `root`.
#[derive(Debug, Clone)]
pub struct FsDocumentSource {
    root: PathBuf,
}

impl FsDocumentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// True when the data root exists and is a directory.
    pub async fn probe(&self) -> bool {
        match tokio::fs::metadata(&self.root).await {
            Ok(meta) => meta.is_dir(),
            Err(_) => false,
        }
    }
}

#[async_trait]
impl DocumentSource for FsDocumentSource {
    async fn fetch(&self, location: &str) -> Result<Arc<[u8]>, DocumentReadError> {
        let path = self.root.join(location);
        trace!(path = %path.display(), "Reading document from disk");

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Arc::from(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                error!(location, "Document not found");
                Err(DocumentReadError::Missing {
                    location: location.to_string(),
                })
            }
            Err(e) => {
                error!(location, error = %e, "Failed to read document");
                Err(DocumentReadError::Unreadable {
                    location: location.to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }
}
