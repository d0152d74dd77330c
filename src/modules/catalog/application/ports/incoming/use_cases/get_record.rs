use async_trait::async_trait;

use crate::{
    catalog::application::services::UseCaseExecutionError,
    shared::{documents::DataSourceError, domain::Language},
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetRecordError {
    #[error(transparent)]
    DataSource(#[from] DataSourceError),

    #[error(transparent)]
    Execution(#[from] UseCaseExecutionError),
}

#[async_trait]
pub trait GetRecordUseCase<T>: Send + Sync {
    async fn execute(&self, language: Language) -> Result<T, GetRecordError>;
}
