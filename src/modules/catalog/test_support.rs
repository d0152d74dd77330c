// Fixture kinds and canned ports shared by the catalog tests.
use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;
use serde::Deserialize;

use crate::{
    catalog::application::{
        domain::{CatalogItem, Document},
        ports::outgoing::{RecordQuery, ResourceQuery},
    },
    shared::{documents::DataSourceError, domain::Language},
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: u32,
    pub name: String,
    pub awarded_on: Option<NaiveDate>,
}

impl Document for Badge {
    const RESOURCE: &'static str = "Badge";
    const DOCUMENT: &'static str = "badges";
}

impl CatalogItem for Badge {
    type Key = u32;

    fn key(&self) -> &u32 {
        &self.id
    }

    fn order(items: &mut [Self]) {
        items.sort_by(|a, b| b.awarded_on.cmp(&a.awarded_on));
    }
}

pub fn badge(id: u32, name: &str) -> Badge {
    Badge {
        id,
        name: name.to_string(),
        awarded_on: None,
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Motto {
    pub text: String,
}

impl Document for Motto {
    const RESOURCE: &'static str = "Motto";
    const DOCUMENT: &'static str = "motto";
}

// ============================================================
// Canned ports
// ============================================================

#[derive(Clone)]
pub struct StubResourceQuery<T> {
    result: Result<Vec<T>, DataSourceError>,
}

impl<T> StubResourceQuery<T> {
    pub fn success(items: Vec<T>) -> Self {
        Self { result: Ok(items) }
    }

    pub fn failure(err: DataSourceError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl<T: CatalogItem> ResourceQuery<T> for StubResourceQuery<T> {
    async fn list(&self, _language: Language) -> Result<Vec<T>, DataSourceError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubRecordQuery<T> {
    result: Result<T, DataSourceError>,
}

impl<T> StubRecordQuery<T> {
    pub fn success(record: T) -> Self {
        Self { result: Ok(record) }
    }

    pub fn failure(err: DataSourceError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl<T: Document> RecordQuery<T> for StubRecordQuery<T> {
    async fn get(&self, _language: Language) -> Result<T, DataSourceError> {
        self.result.clone()
    }
}

pub struct PanickingQuery;

#[async_trait]
impl<T: CatalogItem> ResourceQuery<T> for PanickingQuery {
    async fn list(&self, _language: Language) -> Result<Vec<T>, DataSourceError> {
        panic!("query exploded");
    }
}

mock! {
    pub BadgeQuery {}

    #[async_trait]
    impl ResourceQuery<Badge> for BadgeQuery {
        async fn list(&self, language: Language) -> Result<Vec<Badge>, DataSourceError>;
    }
}
