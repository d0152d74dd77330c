use async_trait::async_trait;
use std::marker::PhantomData;
use tracing::info;

use crate::{
    catalog::application::{
        domain::Document,
        ports::{
            incoming::use_cases::{GetRecordError, GetRecordUseCase},
            outgoing::RecordQuery,
        },
        services::run_guarded,
    },
    shared::domain::Language,
};

pub struct GetRecordService<T, Q> {
    query: Q,
    use_case: String,
    _record: PhantomData<fn() -> T>,
}

impl<T, Q> GetRecordService<T, Q>
where
    T: Document,
    Q: RecordQuery<T>,
{
    pub fn new(query: Q) -> Self {
        Self {
            query,
            use_case: format!("Get{}", T::RESOURCE),
            _record: PhantomData,
        }
    }
}

#[async_trait]
impl<T, Q> GetRecordUseCase<T> for GetRecordService<T, Q>
where
    T: Document,
    Q: RecordQuery<T>,
{
    async fn execute(&self, language: Language) -> Result<T, GetRecordError> {
        info!(use_case = %self.use_case, %language, "Executing use case");

        run_guarded(&self.use_case, async {
            self.query.get(language).await.map_err(GetRecordError::from)
        })
        .await
    }
}
