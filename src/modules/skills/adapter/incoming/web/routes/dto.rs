use serde::Serialize;
use utoipa::ToSchema;

use crate::skills::application::domain::{LanguageSkill, SoftSkill, TechnicalSkill};

#[derive(Debug, Serialize, ToSchema)]
pub struct LanguageSkillResponse {
    #[schema(example = 2354)]
    pub id: u32,
    #[schema(example = "Spanish")]
    pub language: String,
    #[schema(example = "Native")]
    pub listening: String,
    pub reading: String,
    pub spoken_production: String,
    pub spoken_interaction: String,
    pub writing: String,
}

impl From<LanguageSkill> for LanguageSkillResponse {
    fn from(skill: LanguageSkill) -> Self {
        Self {
            id: skill.id,
            language: skill.language,
            listening: skill.listening,
            reading: skill.reading,
            spoken_production: skill.spoken_production,
            spoken_interaction: skill.spoken_interaction,
            writing: skill.writing,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SoftSkillResponse {
    #[schema(example = 4729)]
    pub id: u32,
    #[schema(example = "Teamwork")]
    pub name: String,
}

impl From<SoftSkill> for SoftSkillResponse {
    fn from(skill: SoftSkill) -> Self {
        Self {
            id: skill.id,
            name: skill.name,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TechnicalSkillResponse {
    pub id: u32,
    #[schema(example = "Spring Boot")]
    pub name: String,
    /// Display label of the category
    #[schema(example = "Framework")]
    pub category: String,
    /// Years of experience
    #[schema(example = 5)]
    pub skill_experience: u32,
}

impl From<TechnicalSkill> for TechnicalSkillResponse {
    fn from(skill: TechnicalSkill) -> Self {
        Self {
            id: skill.id,
            name: skill.name,
            category: skill.category.label().to_string(),
            skill_experience: skill.skill_experience,
        }
    }
}
