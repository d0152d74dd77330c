use async_trait::async_trait;

use crate::{
    catalog::application::ports::incoming::use_cases::ListResourcesError,
    skills::application::domain::{TechnicalSkill, TechnicalSkillSearchCriteria},
};

/// Filtered technical-skill listing. No match is an empty result.
#[async_trait]
pub trait SearchTechnicalSkillsUseCase: Send + Sync {
    async fn execute(
        &self,
        criteria: TechnicalSkillSearchCriteria,
    ) -> Result<Vec<TechnicalSkill>, ListResourcesError>;
}
