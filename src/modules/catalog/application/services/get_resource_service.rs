use async_trait::async_trait;
use std::marker::PhantomData;
use tracing::{info, warn};

use crate::{
    catalog::application::{
        domain::CatalogItem,
        ports::{
            incoming::use_cases::{GetResourceError, GetResourceUseCase},
            outgoing::ResourceQuery,
        },
        services::run_guarded,
    },
    shared::domain::{Language, ResourceNotFound},
};

pub struct GetResourceService<T, Q> {
    query: Q,
    use_case: String,
    _item: PhantomData<fn() -> T>,
}

impl<T, Q> GetResourceService<T, Q>
where
    T: CatalogItem,
    Q: ResourceQuery<T>,
{
    pub fn new(query: Q) -> Self {
        Self {
            query,
            use_case: format!("Get{}ById", T::RESOURCE),
            _item: PhantomData,
        }
    }
}

impl<T, Q: Clone> Clone for GetResourceService<T, Q> {
    fn clone(&self) -> Self {
        Self {
            query: self.query.clone(),
            use_case: self.use_case.clone(),
            _item: PhantomData,
        }
    }
}

#[async_trait]
impl<T, Q> GetResourceUseCase<T> for GetResourceService<T, Q>
where
    T: CatalogItem,
    Q: ResourceQuery<T>,
{
    async fn execute(&self, key: T::Key, language: Language) -> Result<T, GetResourceError> {
        info!(use_case = %self.use_case, %key, %language, "Executing use case");

        run_guarded(&self.use_case, self.lookup(&key, language)).await
    }
}

impl<T, Q> GetResourceService<T, Q>
where
    T: CatalogItem,
    Q: ResourceQuery<T>,
{
    async fn lookup(&self, key: &T::Key, language: Language) -> Result<T, GetResourceError> {
        match self.query.find(key, language).await? {
            Some(item) => Ok(item),
            None => {
                warn!(resource = T::RESOURCE, %key, %language, "Resource not found");
                Err(ResourceNotFound::new(T::RESOURCE, key).into())
            }
        }
    }
}
