use chrono::NaiveDate;
use serde::Deserialize;

use crate::catalog::application::domain::{newest_first, CatalogItem, Document};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceItem {
    pub id: u32,
    pub role: String,
    pub company: String,
    pub location: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub summary: String,
    pub description: String,
}

impl Document for ExperienceItem {
    const RESOURCE: &'static str = "Experience";
    const DOCUMENT: &'static str = "experience";
}

impl CatalogItem for ExperienceItem {
    type Key = u32;

    fn key(&self) -> &u32 {
        &self.id
    }

    fn order(items: &mut [Self]) {
        items.sort_by(|a, b| newest_first(a.start_date, b.start_date));
    }
}
