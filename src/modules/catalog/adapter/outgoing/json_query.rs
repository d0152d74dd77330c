// src/modules/catalog/adapter/outgoing/json_query.rs
use async_trait::async_trait;
use std::collections::HashSet;
use std::marker::PhantomData;
use tracing::{debug, error};

use crate::{
    catalog::application::{
        domain::{CatalogItem, Document},
        ports::outgoing::{RecordQuery, ResourceQuery},
    },
    shared::{
        documents::{DataSourceError, DocumentLoader, DocumentSource},
        domain::Language,
    },
};

/// Query port over a bundled JSON array document.
pub struct JsonResourceQuery<T, S> {
    loader: DocumentLoader<S>,
    _item: PhantomData<fn() -> T>,
}

impl<T, S> JsonResourceQuery<T, S>
where
    T: CatalogItem,
    S: DocumentSource,
{
    pub fn new(source: S) -> Self {
        Self {
            loader: DocumentLoader::new(source),
            _item: PhantomData,
        }
    }
}

impl<T, S: Clone> Clone for JsonResourceQuery<T, S> {
    fn clone(&self) -> Self {
        Self {
            loader: self.loader.clone(),
            _item: PhantomData,
        }
    }
}

fn ensure_unique_keys<T: CatalogItem>(location: &str, items: &[T]) -> Result<(), DataSourceError> {
    let mut seen = HashSet::with_capacity(items.len());

    for item in items {
        if !seen.insert(item.key()) {
            error!(location, resource = T::RESOURCE, key = %item.key(), "Duplicate key in document");
            return Err(DataSourceError::DuplicateKey {
                location: location.to_string(),
                resource_type: T::RESOURCE,
                key: item.key().to_string(),
            });
        }
    }

    Ok(())
}

#[async_trait]
impl<T, S> ResourceQuery<T> for JsonResourceQuery<T, S>
where
    T: CatalogItem,
    S: DocumentSource,
{
    async fn list(&self, language: Language) -> Result<Vec<T>, DataSourceError> {
        let location = T::location(language);
        let mut items: Vec<T> = self.loader.load(&location).await?;

        ensure_unique_keys(&location, &items)?;
        T::order(&mut items);

        debug!(resource = T::RESOURCE, %location, count = items.len(), "Listed resources");
        Ok(items)
    }
}

/// Query port over a bundled JSON object document.
pub struct JsonRecordQuery<T, S> {
    loader: DocumentLoader<S>,
    _record: PhantomData<fn() -> T>,
}

impl<T, S> JsonRecordQuery<T, S>
where
    T: Document,
    S: DocumentSource,
{
    pub fn new(source: S) -> Self {
        Self {
            loader: DocumentLoader::new(source),
            _record: PhantomData,
        }
    }
}

#[async_trait]
impl<T, S> RecordQuery<T> for JsonRecordQuery<T, S>
where
    T: Document,
    S: DocumentSource,
{
    async fn get(&self, language: Language) -> Result<T, DataSourceError> {
        let location = T::location(language);
        let record = self.loader.load(&location).await?;

        debug!(resource = T::RESOURCE, %location, "Loaded record");
        Ok(record)
    }
}
