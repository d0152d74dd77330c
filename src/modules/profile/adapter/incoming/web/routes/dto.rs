use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::profile::application::domain::{ContactInfo, PersonalInfo};

#[derive(Debug, Serialize, ToSchema)]
pub struct PersonalInfoResponse {
    #[schema(example = "Juan Bermudo")]
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub nationality: String,
    pub gender: String,
}

impl From<PersonalInfo> for PersonalInfoResponse {
    fn from(info: PersonalInfo) -> Self {
        Self {
            full_name: info.full_name,
            birth_date: info.birth_date,
            nationality: info.nationality,
            gender: info.gender,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactInfoResponse {
    pub address: String,
    #[schema(example = "hello@example.dev")]
    pub email: String,
    pub mobile_phone: String,
    pub landline_phone: Option<String>,
    pub website_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
}

impl From<ContactInfo> for ContactInfoResponse {
    fn from(info: ContactInfo) -> Self {
        Self {
            address: info.address,
            email: info.email,
            mobile_phone: info.mobile_phone,
            landline_phone: info.landline_phone,
            website_url: info.website_url,
            linkedin_url: info.linkedin_url,
            github_url: info.github_url,
        }
    }
}
