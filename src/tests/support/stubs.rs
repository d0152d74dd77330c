use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::{
    catalog::application::{
        domain::CatalogItem,
        ports::incoming::use_cases::{
            GetRecordError, GetRecordUseCase, GetResourceError, GetResourceUseCase,
            ListResourcesError, ListResourcesUseCase,
        },
    },
    shared::domain::{Language, ResourceNotFound},
    skills::application::{
        domain::{TechnicalSkill, TechnicalSkillSearchCriteria},
        ports::incoming::use_cases::SearchTechnicalSkillsUseCase,
    },
};

// ============================================================
// List
// ============================================================

/// Returns a canned result and remembers the language it was asked for.
#[derive(Clone)]
pub struct StubListUseCase<T> {
    result: Result<Vec<T>, ListResourcesError>,
    last_language: Arc<Mutex<Option<Language>>>,
}

impl<T> StubListUseCase<T> {
    pub fn success(items: Vec<T>) -> Self {
        Self {
            result: Ok(items),
            last_language: Arc::default(),
        }
    }

    pub fn failure(err: ListResourcesError) -> Self {
        Self {
            result: Err(err),
            last_language: Arc::default(),
        }
    }

    pub fn last_language(&self) -> Option<Language> {
        *self.last_language.lock().unwrap()
    }
}

impl<T> Default for StubListUseCase<T> {
    fn default() -> Self {
        Self::success(Vec::new())
    }
}

#[async_trait]
impl<T> ListResourcesUseCase<T> for StubListUseCase<T>
where
    T: Clone + Send + Sync,
{
    async fn execute(&self, language: Language) -> Result<Vec<T>, ListResourcesError> {
        *self.last_language.lock().unwrap() = Some(language);
        self.result.clone()
    }
}

// ============================================================
// Get by key
// ============================================================

#[derive(Clone)]
pub struct StubGetUseCase<T> {
    result: Result<T, GetResourceError>,
}

impl<T: CatalogItem> StubGetUseCase<T> {
    pub fn found(item: T) -> Self {
        Self { result: Ok(item) }
    }

    pub fn not_found(id: &str) -> Self {
        Self {
            result: Err(ResourceNotFound::new(T::RESOURCE, id).into()),
        }
    }

    pub fn failure(err: GetResourceError) -> Self {
        Self { result: Err(err) }
    }
}

impl<T: CatalogItem> Default for StubGetUseCase<T> {
    fn default() -> Self {
        Self::not_found("0")
    }
}

#[async_trait]
impl<T: CatalogItem> GetResourceUseCase<T> for StubGetUseCase<T> {
    async fn execute(&self, _key: T::Key, _language: Language) -> Result<T, GetResourceError> {
        self.result.clone()
    }
}

// ============================================================
// Single record
// ============================================================

#[derive(Clone)]
pub struct StubRecordUseCase<T> {
    result: Result<T, GetRecordError>,
}

impl<T> StubRecordUseCase<T> {
    pub fn success(record: T) -> Self {
        Self { result: Ok(record) }
    }

    pub fn failure(err: GetRecordError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl<T> GetRecordUseCase<T> for StubRecordUseCase<T>
where
    T: Clone + Send + Sync,
{
    async fn execute(&self, _language: Language) -> Result<T, GetRecordError> {
        self.result.clone()
    }
}

// ============================================================
// Technical skill search
// ============================================================

/// Applies the real criteria to a fixed set of skills.
#[derive(Clone)]
pub struct StubSearchTechnicalSkillsUseCase {
    result: Result<Vec<TechnicalSkill>, ListResourcesError>,
}

impl StubSearchTechnicalSkillsUseCase {
    pub fn filtering(skills: Vec<TechnicalSkill>) -> Self {
        Self { result: Ok(skills) }
    }

    pub fn failure(err: ListResourcesError) -> Self {
        Self { result: Err(err) }
    }
}

impl Default for StubSearchTechnicalSkillsUseCase {
    fn default() -> Self {
        Self::filtering(Vec::new())
    }
}

#[async_trait]
impl SearchTechnicalSkillsUseCase for StubSearchTechnicalSkillsUseCase {
    async fn execute(
        &self,
        criteria: TechnicalSkillSearchCriteria,
    ) -> Result<Vec<TechnicalSkill>, ListResourcesError> {
        self.result
            .clone()
            .map(|skills| criteria.apply(skills))
    }
}
