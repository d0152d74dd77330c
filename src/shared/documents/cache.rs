// src/shared/documents/cache.rs
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::debug;

use super::error::DocumentReadError;
use super::source::DocumentSource;

/// Keeps every successfully fetched document for the lifetime of the
/// process. Each location is fetched at most once: concurrent first readers
/// wait on the same cell. Failed fetches leave the cell empty.
pub struct CachedDocumentSource<S> {
    inner: S,
    cells: DashMap<String, Arc<OnceCell<Arc<[u8]>>>>,
}

impl<S> CachedDocumentSource<S>
where
    S: DocumentSource,
{
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cells: DashMap::new(),
        }
    }

    /// Number of locations currently held in memory.
    pub fn cached_documents(&self) -> usize {
        self.cells.iter().filter(|cell| cell.initialized()).count()
    }
}

#[async_trait]
impl<S> DocumentSource for CachedDocumentSource<S>
where
    S: DocumentSource,
{
    async fn fetch(&self, location: &str) -> Result<Arc<[u8]>, DocumentReadError> {
        let cell = self.cells.entry(location.to_string()).or_default().clone();

        let bytes = cell
            .get_or_try_init(|| async {
                debug!(location, "Document cache miss");
                self.inner.fetch(location).await
            })
            .await?;

        Ok(Arc::clone(bytes))
    }
}
