// src/shared/documents/loader.rs
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use super::error::DocumentReadError;
use super::source::DocumentSource;

/// Typed view over a [`DocumentSource`]: fetches a location and
/// deserializes it whole into `T`. No partial results.
#[derive(Debug, Clone)]
pub struct DocumentLoader<S> {
    source: S,
}

impl<S> DocumentLoader<S>
where
    S: DocumentSource,
{
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn load<T>(&self, location: &str) -> Result<T, DocumentReadError>
    where
        T: DeserializeOwned,
    {
        let bytes = self.source.fetch(location).await?;

        let value = serde_json::from_slice::<T>(&bytes).map_err(|e| {
            error!(location, error = %e, "Document does not match the expected shape");
            DocumentReadError::Malformed {
                location: location.to_string(),
                reason: e.to_string(),
            }
        })?;

        debug!(location, bytes = bytes.len(), "Document loaded");
        Ok(value)
    }
}
