mod search_technical_skills;

pub use search_technical_skills::SearchTechnicalSkillsUseCase;
