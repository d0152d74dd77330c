use serde::Deserialize;

use super::TechnicalSkillCategory;
use crate::catalog::application::domain::{CatalogItem, Document};

/// Spoken language with CEFR-style proficiency per dimension.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageSkill {
    pub id: u32,
    pub language: String,
    pub listening: String,
    pub reading: String,
    pub spoken_production: String,
    pub spoken_interaction: String,
    pub writing: String,
}

impl Document for LanguageSkill {
    const RESOURCE: &'static str = "LanguageSkill";
    const DOCUMENT: &'static str = "skills_languages";
}

impl CatalogItem for LanguageSkill {
    type Key = u32;

    fn key(&self) -> &u32 {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SoftSkill {
    pub id: u32,
    pub name: String,
}

impl Document for SoftSkill {
    const RESOURCE: &'static str = "SoftSkill";
    const DOCUMENT: &'static str = "skills_soft";
}

impl CatalogItem for SoftSkill {
    type Key = u32;

    fn key(&self) -> &u32 {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalSkill {
    pub id: u32,
    pub name: String,
    pub category: TechnicalSkillCategory,
    /// Years of hands-on experience
    pub skill_experience: u32,
}

impl Document for TechnicalSkill {
    const RESOURCE: &'static str = "TechnicalSkill";
    const DOCUMENT: &'static str = "skills_technical";
    const LOCALIZED: bool = false;
}

impl CatalogItem for TechnicalSkill {
    type Key = u32;

    fn key(&self) -> &u32 {
        &self.id
    }
}
