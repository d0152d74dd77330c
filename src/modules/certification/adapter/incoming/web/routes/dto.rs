use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::certification::application::domain::CertificationItem;

#[derive(Debug, Serialize, ToSchema)]
pub struct CertificationResponse {
    #[schema(example = 1234)]
    pub id: u32,
    pub name: String,
    pub issuer: String,
    pub credential_id: String,
    pub credential_url: Option<String>,
    pub issue_date: Option<NaiveDate>,
    /// Absent for credentials that never expire
    pub expiration_date: Option<NaiveDate>,
    pub details: String,
}

impl From<CertificationItem> for CertificationResponse {
    fn from(item: CertificationItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            issuer: item.issuer,
            credential_id: item.credential_id,
            credential_url: item.credential_url,
            issue_date: item.issue_date,
            expiration_date: item.expiration_date,
            details: item.details,
        }
    }
}
