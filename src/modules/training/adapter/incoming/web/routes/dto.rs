use serde::Serialize;
use utoipa::ToSchema;

use crate::training::application::domain::TrainingItem;

#[derive(Debug, Serialize, ToSchema)]
pub struct TrainingResponse {
    pub id: u32,
    #[schema(example = "Rust Fundamentals")]
    pub title: String,
    pub provider: String,
    pub location: String,
    /// Month the credential was issued
    #[schema(example = "2023-04")]
    pub issued_date: String,
    #[schema(example = "4Aes")]
    pub credential_id: String,
    pub credential_url: Option<String>,
    pub details: String,
}

impl From<TrainingItem> for TrainingResponse {
    fn from(item: TrainingItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            provider: item.provider,
            location: item.location,
            issued_date: item.issued_date.to_string(),
            credential_id: item.credential_id,
            credential_url: item.credential_url,
            details: item.details,
        }
    }
}
