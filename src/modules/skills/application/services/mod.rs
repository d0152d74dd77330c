mod search_technical_skills_service;

pub use search_technical_skills_service::SearchTechnicalSkillsService;
