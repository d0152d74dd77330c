use async_trait::async_trait;

use crate::{
    catalog::application::{domain::CatalogItem, services::UseCaseExecutionError},
    shared::{
        documents::DataSourceError,
        domain::{Language, ResourceNotFound},
    },
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetResourceError {
    #[error(transparent)]
    NotFound(#[from] ResourceNotFound),

    #[error(transparent)]
    DataSource(#[from] DataSourceError),

    #[error(transparent)]
    Execution(#[from] UseCaseExecutionError),
}

/// Single-item lookup by key. Absence is an error.
#[async_trait]
pub trait GetResourceUseCase<T>: Send + Sync
where
    T: CatalogItem,
{
    async fn execute(&self, key: T::Key, language: Language) -> Result<T, GetResourceError>;
}
