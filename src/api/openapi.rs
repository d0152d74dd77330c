use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::OpenApi;

use crate::certification::adapter::incoming::web::routes::CertificationResponse;
use crate::education::adapter::incoming::web::routes::EducationResponse;
use crate::experience::adapter::incoming::web::routes::ExperienceResponse;
use crate::profile::adapter::incoming::web::routes::{ContactInfoResponse, PersonalInfoResponse};
use crate::skills::adapter::incoming::web::routes::{
    LanguageSkillResponse, SoftSkillResponse, TechnicalSkillResponse,
};
use crate::training::adapter::incoming::web::routes::TrainingResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CV API",
        version = "1.0.0",
        description = "Read-only, localized curriculum vitae data. Send `Accept-Language: en_EN` or `es_ES` (default).",
    ),
    paths(
        // Profile endpoints
        crate::profile::adapter::incoming::web::routes::get_personal_info_handler,
        crate::profile::adapter::incoming::web::routes::get_contact_info_handler,

        // Education endpoints
        crate::education::adapter::incoming::web::routes::get_educations_handler,
        crate::education::adapter::incoming::web::routes::get_education_handler,

        // Experience endpoints
        crate::experience::adapter::incoming::web::routes::get_experiences_handler,
        crate::experience::adapter::incoming::web::routes::get_experience_handler,

        // Training endpoints
        crate::training::adapter::incoming::web::routes::get_trainings_handler,
        crate::training::adapter::incoming::web::routes::get_training_handler,

        // Certification endpoints
        crate::certification::adapter::incoming::web::routes::get_certifications_handler,
        crate::certification::adapter::incoming::web::routes::get_certification_handler,

        // Skill endpoints
        crate::skills::adapter::incoming::web::routes::get_language_skills_handler,
        crate::skills::adapter::incoming::web::routes::get_language_skill_handler,
        crate::skills::adapter::incoming::web::routes::get_soft_skills_handler,
        crate::skills::adapter::incoming::web::routes::get_soft_skill_handler,
        crate::skills::adapter::incoming::web::routes::search_technical_skills_handler,
        crate::skills::adapter::incoming::web::routes::get_technical_skill_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // DTOs
            PersonalInfoResponse,
            ContactInfoResponse,
            EducationResponse,
            ExperienceResponse,
            TrainingResponse,
            CertificationResponse,
            LanguageSkillResponse,
            SoftSkillResponse,
            TechnicalSkillResponse
        )
    ),
    tags(
        (name = "profile", description = "Personal and contact information"),
        (name = "education", description = "Academic history"),
        (name = "experience", description = "Work history"),
        (name = "training", description = "Courses and trainings"),
        (name = "certifications", description = "Professional certifications"),
        (name = "skills", description = "Language, soft and technical skills"),
    )
)]
pub struct ApiDoc;
