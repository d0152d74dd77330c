use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::experience::application::domain::ExperienceItem;

#[derive(Debug, Serialize, ToSchema)]
pub struct ExperienceResponse {
    #[schema(example = 3301)]
    pub id: u32,
    #[schema(example = "Senior Backend Engineer")]
    pub role: String,
    pub company: String,
    pub location: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// True while the position is held
    pub current: bool,
    pub summary: String,
    pub description: String,
}

impl From<ExperienceItem> for ExperienceResponse {
    fn from(item: ExperienceItem) -> Self {
        Self {
            id: item.id,
            role: item.role,
            company: item.company,
            location: item.location,
            start_date: item.start_date,
            end_date: item.end_date,
            current: item.current,
            summary: item.summary,
            description: item.description,
        }
    }
}
