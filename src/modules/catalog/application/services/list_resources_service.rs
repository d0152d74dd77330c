use async_trait::async_trait;
use std::marker::PhantomData;
use tracing::info;

use crate::{
    catalog::application::{
        domain::CatalogItem,
        ports::{
            incoming::use_cases::{ListResourcesError, ListResourcesUseCase},
            outgoing::ResourceQuery,
        },
        services::run_guarded,
    },
    shared::domain::Language,
};

pub struct ListResourcesService<T, Q> {
    query: Q,
    use_case: String,
    _item: PhantomData<fn() -> T>,
}

impl<T, Q> ListResourcesService<T, Q>
where
    T: CatalogItem,
    Q: ResourceQuery<T>,
{
    pub fn new(query: Q) -> Self {
        Self {
            query,
            use_case: format!("List{}", T::RESOURCE),
            _item: PhantomData,
        }
    }
}

impl<T, Q: Clone> Clone for ListResourcesService<T, Q> {
    fn clone(&self) -> Self {
        Self {
            query: self.query.clone(),
            use_case: self.use_case.clone(),
            _item: PhantomData,
        }
    }
}

#[async_trait]
impl<T, Q> ListResourcesUseCase<T> for ListResourcesService<T, Q>
where
    T: CatalogItem,
    Q: ResourceQuery<T>,
{
    async fn execute(&self, language: Language) -> Result<Vec<T>, ListResourcesError> {
        info!(use_case = %self.use_case, %language, "Executing use case");

        run_guarded(&self.use_case, async {
            self.query
                .list(language)
                .await
                .map_err(ListResourcesError::from)
        })
        .await
    }
}
