use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::education::application::domain::EducationItem;

#[derive(Debug, Serialize, ToSchema)]
pub struct EducationResponse {
    #[schema(example = 1042)]
    pub id: u32,
    #[schema(example = "Computer Engineering")]
    pub title: String,
    #[schema(example = "Universidad de Sevilla")]
    pub institution: String,
    #[schema(example = "Sevilla, Spain")]
    pub location: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub details: String,
}

impl From<EducationItem> for EducationResponse {
    fn from(item: EducationItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            institution: item.institution,
            location: item.location,
            start_date: item.start_date,
            end_date: item.end_date,
            details: item.details,
        }
    }
}
