// src/shared/documents/memory.rs
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::error::DocumentReadError;
use super::source::DocumentSource;

/// Fixture source for tests. Clones share the same fetch counter.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentSource {
    documents: HashMap<String, Arc<[u8]>>,
    fetches: Arc<AtomicUsize>,
}

impl InMemoryDocumentSource {
    pub fn with_document(self, location: &str, value: serde_json::Value) -> Self {
        let bytes = serde_json::to_vec(&value).expect("fixture json serializes");
        self.with_raw(location, bytes)
    }

    pub fn with_raw(mut self, location: &str, bytes: Vec<u8>) -> Self {
        self.documents.insert(location.to_string(), Arc::from(bytes));
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentSource for InMemoryDocumentSource {
    async fn fetch(&self, location: &str) -> Result<Arc<[u8]>, DocumentReadError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        // give concurrent readers a chance to pile up on the cache cell
        tokio::task::yield_now().await;

        self.documents
            .get(location)
            .cloned()
            .ok_or_else(|| DocumentReadError::Missing {
                location: location.to_string(),
            })
    }
}
