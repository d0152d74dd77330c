use async_trait::async_trait;

use crate::{
    catalog::application::services::UseCaseExecutionError,
    shared::{documents::DataSourceError, domain::Language},
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListResourcesError {
    #[error(transparent)]
    DataSource(#[from] DataSourceError),

    #[error(transparent)]
    Execution(#[from] UseCaseExecutionError),
}

/// Collection lookup. An empty collection is a valid result.
#[async_trait]
pub trait ListResourcesUseCase<T>: Send + Sync {
    async fn execute(&self, language: Language) -> Result<Vec<T>, ListResourcesError>;
}
