use async_trait::async_trait;
use tracing::{debug, info};

use crate::{
    catalog::application::{
        ports::{incoming::use_cases::ListResourcesError, outgoing::ResourceQuery},
        services::run_guarded,
    },
    shared::domain::Language,
    skills::application::{
        domain::{TechnicalSkill, TechnicalSkillSearchCriteria},
        ports::incoming::use_cases::SearchTechnicalSkillsUseCase,
    },
};

const USE_CASE: &str = "SearchTechnicalSkills";

#[derive(Debug, Clone)]
pub struct SearchTechnicalSkillsService<Q>
where
    Q: ResourceQuery<TechnicalSkill>,
{
    query: Q,
}

impl<Q> SearchTechnicalSkillsService<Q>
where
    Q: ResourceQuery<TechnicalSkill>,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }

    async fn search(
        &self,
        criteria: &TechnicalSkillSearchCriteria,
    ) -> Result<Vec<TechnicalSkill>, ListResourcesError> {
        // technical skills are not localized
        let skills = self.query.list(Language::default()).await?;
        let results = criteria.apply(skills);

        debug!(count = results.len(), "Technical skills matched");
        Ok(results)
    }
}

#[async_trait]
impl<Q> SearchTechnicalSkillsUseCase for SearchTechnicalSkillsService<Q>
where
    Q: ResourceQuery<TechnicalSkill>,
{
    async fn execute(
        &self,
        criteria: TechnicalSkillSearchCriteria,
    ) -> Result<Vec<TechnicalSkill>, ListResourcesError> {
        info!(
            use_case = USE_CASE,
            name = ?criteria.name,
            category = ?criteria.category,
            "Executing use case"
        );

        run_guarded(USE_CASE, self.search(&criteria)).await
    }
}
