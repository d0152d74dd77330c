use chrono::NaiveDate;
use serde::Deserialize;

use crate::catalog::application::domain::{newest_first, CatalogItem, Document};

/// Licenses and certifications. Stored once and shared by every language.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationItem {
    pub id: u32,
    pub name: String,
    pub issuer: String,
    pub credential_id: String,
    pub credential_url: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub expiration_date: Option<NaiveDate>,
    pub details: String,
}

impl Document for CertificationItem {
    const RESOURCE: &'static str = "Certification";
    const DOCUMENT: &'static str = "certifications";
    const LOCALIZED: bool = false;
}

impl CatalogItem for CertificationItem {
    type Key = u32;

    fn key(&self) -> &u32 {
        &self.id
    }

    fn order(items: &mut [Self]) {
        items.sort_by(|a, b| newest_first(a.issue_date, b.issue_date));
    }
}
