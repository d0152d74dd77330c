use async_trait::async_trait;

use crate::{
    catalog::application::domain::{CatalogItem, Document},
    shared::{documents::DataSourceError, domain::Language},
};

#[async_trait]
pub trait ResourceQuery<T>: Send + Sync
where
    T: CatalogItem,
{
    /// Every item of the kind, with the kind's sort policy applied.
    /// Non-localized kinds ignore `language`.
    async fn list(&self, language: Language) -> Result<Vec<T>, DataSourceError>;

    /// First listed item whose key matches. Absence is `Ok(None)`.
    async fn find(&self, key: &T::Key, language: Language) -> Result<Option<T>, DataSourceError> {
        let items = self.list(language).await?;
        Ok(items.into_iter().find(|item| item.key() == key))
    }
}

/// Singleton documents (one record per language).
#[async_trait]
pub trait RecordQuery<T>: Send + Sync
where
    T: Document,
{
    async fn get(&self, language: Language) -> Result<T, DataSourceError>;
}
