use chrono::NaiveDate;
use serde::Deserialize;

use crate::catalog::application::domain::Document;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub nationality: String,
    pub gender: String,
}

impl Document for PersonalInfo {
    const RESOURCE: &'static str = "PersonalInfo";
    const DOCUMENT: &'static str = "personal";
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub address: String,
    pub email: String,
    pub mobile_phone: String,
    pub landline_phone: Option<String>,
    pub website_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
}

impl Document for ContactInfo {
    const RESOURCE: &'static str = "ContactInfo";
    const DOCUMENT: &'static str = "contact";
}
