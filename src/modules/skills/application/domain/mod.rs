pub mod category;
pub mod entities;
pub mod search;

pub use category::{TechnicalSkillCategory, UnknownCategory};
pub use entities::{LanguageSkill, SoftSkill, TechnicalSkill};
pub use search::TechnicalSkillSearchCriteria;
