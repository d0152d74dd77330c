mod dto;
mod get_language_skill;
mod get_language_skills;
mod get_soft_skill;
mod get_soft_skills;
mod get_technical_skill;
mod search_technical_skills;

pub use dto::{LanguageSkillResponse, SoftSkillResponse, TechnicalSkillResponse};
pub use get_language_skill::{__path_get_language_skill_handler, get_language_skill_handler};
pub use get_language_skills::{__path_get_language_skills_handler, get_language_skills_handler};
pub use get_soft_skill::{__path_get_soft_skill_handler, get_soft_skill_handler};
pub use get_soft_skills::{__path_get_soft_skills_handler, get_soft_skills_handler};
pub use get_technical_skill::{__path_get_technical_skill_handler, get_technical_skill_handler};
pub use search_technical_skills::{
    __path_search_technical_skills_handler, search_technical_skills_handler,
};
