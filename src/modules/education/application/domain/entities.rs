use chrono::NaiveDate;
use serde::Deserialize;

use crate::catalog::application::domain::{newest_first, CatalogItem, Document};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationItem {
    pub id: u32,
    pub title: String,
    pub institution: String,
    pub location: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub details: String,
}

impl Document for EducationItem {
    const RESOURCE: &'static str = "Education";
    const DOCUMENT: &'static str = "education";
}

impl CatalogItem for EducationItem {
    type Key = u32;

    fn key(&self) -> &u32 {
        &self.id
    }

    /// Most recent first, undated entries ahead.
    fn order(items: &mut [Self]) {
        items.sort_by(|a, b| newest_first(a.start_date, b.start_date));
    }
}
