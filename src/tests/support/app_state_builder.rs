use std::sync::Arc;

use actix_web::web;

use crate::catalog::application::ports::incoming::use_cases::{
    GetRecordUseCase, GetResourceUseCase, ListResourcesUseCase,
};
use crate::certification::application::domain::CertificationItem;
use crate::education::application::domain::EducationItem;
use crate::experience::application::domain::ExperienceItem;
use crate::profile::application::domain::{ContactInfo, PersonalInfo};
use crate::skills::application::domain::{LanguageSkill, SoftSkill, TechnicalSkill};
use crate::skills::application::ports::incoming::use_cases::SearchTechnicalSkillsUseCase;
use crate::tests::support::fixtures::{contact_info, personal_info};
use crate::tests::support::stubs::*;
use crate::training::application::domain::TrainingItem;
use crate::AppState;

type List<T> = Arc<dyn ListResourcesUseCase<T> + Send + Sync>;
type Get<T> = Arc<dyn GetResourceUseCase<T> + Send + Sync>;
type Record<T> = Arc<dyn GetRecordUseCase<T> + Send + Sync>;

/// Every use case starts as an empty or not-found stub; tests swap in the
/// ones they exercise.
pub struct TestAppStateBuilder {
    get_personal_info: Record<PersonalInfo>,
    get_contact_info: Record<ContactInfo>,
    list_educations: List<EducationItem>,
    get_education: Get<EducationItem>,
    list_experiences: List<ExperienceItem>,
    get_experience: Get<ExperienceItem>,
    list_trainings: List<TrainingItem>,
    get_training: Get<TrainingItem>,
    list_certifications: List<CertificationItem>,
    get_certification: Get<CertificationItem>,
    list_language_skills: List<LanguageSkill>,
    get_language_skill: Get<LanguageSkill>,
    list_soft_skills: List<SoftSkill>,
    get_soft_skill: Get<SoftSkill>,
    search_technical_skills: Arc<dyn SearchTechnicalSkillsUseCase + Send + Sync>,
    get_technical_skill: Get<TechnicalSkill>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            get_personal_info: Arc::new(StubRecordUseCase::success(personal_info())),
            get_contact_info: Arc::new(StubRecordUseCase::success(contact_info())),
            list_educations: Arc::new(StubListUseCase::<EducationItem>::default()),
            get_education: Arc::new(StubGetUseCase::<EducationItem>::default()),
            list_experiences: Arc::new(StubListUseCase::<ExperienceItem>::default()),
            get_experience: Arc::new(StubGetUseCase::<ExperienceItem>::default()),
            list_trainings: Arc::new(StubListUseCase::<TrainingItem>::default()),
            get_training: Arc::new(StubGetUseCase::<TrainingItem>::default()),
            list_certifications: Arc::new(StubListUseCase::<CertificationItem>::default()),
            get_certification: Arc::new(StubGetUseCase::<CertificationItem>::default()),
            list_language_skills: Arc::new(StubListUseCase::<LanguageSkill>::default()),
            get_language_skill: Arc::new(StubGetUseCase::<LanguageSkill>::default()),
            list_soft_skills: Arc::new(StubListUseCase::<SoftSkill>::default()),
            get_soft_skill: Arc::new(StubGetUseCase::<SoftSkill>::default()),
            search_technical_skills: Arc::new(StubSearchTechnicalSkillsUseCase::default()),
            get_technical_skill: Arc::new(StubGetUseCase::<TechnicalSkill>::default()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_personal_info(
        mut self,
        uc: impl GetRecordUseCase<PersonalInfo> + Send + Sync + 'static,
    ) -> Self {
        self.get_personal_info = Arc::new(uc);
        self
    }

    pub fn with_get_contact_info(
        mut self,
        uc: impl GetRecordUseCase<ContactInfo> + Send + Sync + 'static,
    ) -> Self {
        self.get_contact_info = Arc::new(uc);
        self
    }

    pub fn with_list_educations(
        mut self,
        uc: impl ListResourcesUseCase<EducationItem> + Send + Sync + 'static,
    ) -> Self {
        self.list_educations = Arc::new(uc);
        self
    }

    pub fn with_get_education(
        mut self,
        uc: impl GetResourceUseCase<EducationItem> + Send + Sync + 'static,
    ) -> Self {
        self.get_education = Arc::new(uc);
        self
    }

    pub fn with_list_experiences(
        mut self,
        uc: impl ListResourcesUseCase<ExperienceItem> + Send + Sync + 'static,
    ) -> Self {
        self.list_experiences = Arc::new(uc);
        self
    }

    pub fn with_get_experience(
        mut self,
        uc: impl GetResourceUseCase<ExperienceItem> + Send + Sync + 'static,
    ) -> Self {
        self.get_experience = Arc::new(uc);
        self
    }

    pub fn with_list_trainings(
        mut self,
        uc: impl ListResourcesUseCase<TrainingItem> + Send + Sync + 'static,
    ) -> Self {
        self.list_trainings = Arc::new(uc);
        self
    }

    pub fn with_get_training(
        mut self,
        uc: impl GetResourceUseCase<TrainingItem> + Send + Sync + 'static,
    ) -> Self {
        self.get_training = Arc::new(uc);
        self
    }

    pub fn with_list_certifications(
        mut self,
        uc: impl ListResourcesUseCase<CertificationItem> + Send + Sync + 'static,
    ) -> Self {
        self.list_certifications = Arc::new(uc);
        self
    }

    pub fn with_get_certification(
        mut self,
        uc: impl GetResourceUseCase<CertificationItem> + Send + Sync + 'static,
    ) -> Self {
        self.get_certification = Arc::new(uc);
        self
    }

    pub fn with_list_language_skills(
        mut self,
        uc: impl ListResourcesUseCase<LanguageSkill> + Send + Sync + 'static,
    ) -> Self {
        self.list_language_skills = Arc::new(uc);
        self
    }

    pub fn with_get_language_skill(
        mut self,
        uc: impl GetResourceUseCase<LanguageSkill> + Send + Sync + 'static,
    ) -> Self {
        self.get_language_skill = Arc::new(uc);
        self
    }

    pub fn with_list_soft_skills(
        mut self,
        uc: impl ListResourcesUseCase<SoftSkill> + Send + Sync + 'static,
    ) -> Self {
        self.list_soft_skills = Arc::new(uc);
        self
    }

    pub fn with_get_soft_skill(
        mut self,
        uc: impl GetResourceUseCase<SoftSkill> + Send + Sync + 'static,
    ) -> Self {
        self.get_soft_skill = Arc::new(uc);
        self
    }

    pub fn with_search_technical_skills(
        mut self,
        uc: impl SearchTechnicalSkillsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.search_technical_skills = Arc::new(uc);
        self
    }

    pub fn with_get_technical_skill(
        mut self,
        uc: impl GetResourceUseCase<TechnicalSkill> + Send + Sync + 'static,
    ) -> Self {
        self.get_technical_skill = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            get_personal_info: self.get_personal_info,
            get_contact_info: self.get_contact_info,
            list_educations: self.list_educations,
            get_education: self.get_education,
            list_experiences: self.list_experiences,
            get_experience: self.get_experience,
            list_trainings: self.list_trainings,
            get_training: self.get_training,
            list_certifications: self.list_certifications,
            get_certification: self.get_certification,
            list_language_skills: self.list_language_skills,
            get_language_skill: self.get_language_skill,
            list_soft_skills: self.list_soft_skills,
            get_soft_skill: self.get_soft_skill,
            search_technical_skills: self.search_technical_skills,
            get_technical_skill: self.get_technical_skill,
        })
    }
}
