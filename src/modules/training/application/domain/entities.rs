use serde::Deserialize;

use super::YearMonth;
use crate::catalog::application::domain::{CatalogItem, Document};

/// A course or training, looked up by its credential id.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingItem {
    pub id: u32,
    pub title: String,
    pub provider: String,
    pub location: String,
    pub issued_date: YearMonth,
    pub credential_id: String,
    pub credential_url: Option<String>,
    pub details: String,
}

impl Document for TrainingItem {
    const RESOURCE: &'static str = "Training";
    const DOCUMENT: &'static str = "training";
}

impl CatalogItem for TrainingItem {
    type Key = String;

    fn key(&self) -> &String {
        &self.credential_id
    }

    fn order(items: &mut [Self]) {
        items.sort_by(|a, b| b.issued_date.cmp(&a.issued_date));
    }
}
