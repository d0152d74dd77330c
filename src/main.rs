pub mod modules;
pub use modules::catalog;
pub use modules::certification;
pub use modules::education;
pub use modules::experience;
pub use modules::profile;
pub use modules::skills;
pub use modules::training;
pub mod api;
pub mod health;
pub mod shared;

mod config;

use crate::catalog::adapter::outgoing::{JsonRecordQuery, JsonResourceQuery};
use crate::catalog::application::domain::{CatalogItem, Document};
use crate::catalog::application::ports::incoming::use_cases::{
    GetRecordUseCase, GetResourceUseCase, ListResourcesUseCase,
};
use crate::catalog::application::services::{
    GetRecordService, GetResourceService, ListResourcesService,
};
use crate::certification::application::domain::CertificationItem;
use crate::education::application::domain::EducationItem;
use crate::experience::application::domain::ExperienceItem;
use crate::profile::application::domain::{ContactInfo, PersonalInfo};
use crate::skills::application::domain::{LanguageSkill, SoftSkill, TechnicalSkill};
use crate::skills::application::ports::incoming::use_cases::SearchTechnicalSkillsUseCase;
use crate::skills::application::services::SearchTechnicalSkillsService;
use crate::training::application::domain::TrainingItem;

use crate::api::openapi::ApiDoc;
use crate::config::{AppConfig, LogFormat};
use crate::shared::api::{custom_path_config, custom_query_config, DefaultLanguage};
use crate::shared::correlation::Correlation;
use crate::shared::documents::{CachedDocumentSource, DocumentSource, FsDocumentSource};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub get_personal_info: Arc<dyn GetRecordUseCase<PersonalInfo> + Send + Sync>,
    pub get_contact_info: Arc<dyn GetRecordUseCase<ContactInfo> + Send + Sync>,
    pub list_educations: Arc<dyn ListResourcesUseCase<EducationItem> + Send + Sync>,
    pub get_education: Arc<dyn GetResourceUseCase<EducationItem> + Send + Sync>,
    pub list_experiences: Arc<dyn ListResourcesUseCase<ExperienceItem> + Send + Sync>,
    pub get_experience: Arc<dyn GetResourceUseCase<ExperienceItem> + Send + Sync>,
    pub list_trainings: Arc<dyn ListResourcesUseCase<TrainingItem> + Send + Sync>,
    pub get_training: Arc<dyn GetResourceUseCase<TrainingItem> + Send + Sync>,
    pub list_certifications: Arc<dyn ListResourcesUseCase<CertificationItem> + Send + Sync>,
    pub get_certification: Arc<dyn GetResourceUseCase<CertificationItem> + Send + Sync>,
    pub list_language_skills: Arc<dyn ListResourcesUseCase<LanguageSkill> + Send + Sync>,
    pub get_language_skill: Arc<dyn GetResourceUseCase<LanguageSkill> + Send + Sync>,
    pub list_soft_skills: Arc<dyn ListResourcesUseCase<SoftSkill> + Send + Sync>,
    pub get_soft_skill: Arc<dyn GetResourceUseCase<SoftSkill> + Send + Sync>,
    pub search_technical_skills: Arc<dyn SearchTechnicalSkillsUseCase + Send + Sync>,
    pub get_technical_skill: Arc<dyn GetResourceUseCase<TechnicalSkill> + Send + Sync>,
}

fn list_use_case<T, S>(source: &S) -> Arc<dyn ListResourcesUseCase<T> + Send + Sync>
where
    T: CatalogItem,
    S: DocumentSource + Clone + 'static,
{
    Arc::new(ListResourcesService::new(JsonResourceQuery::<T, S>::new(
        source.clone(),
    )))
}

fn get_use_case<T, S>(source: &S) -> Arc<dyn GetResourceUseCase<T> + Send + Sync>
where
    T: CatalogItem,
    S: DocumentSource + Clone + 'static,
{
    Arc::new(GetResourceService::new(JsonResourceQuery::<T, S>::new(
        source.clone(),
    )))
}

fn record_use_case<T, S>(source: &S) -> Arc<dyn GetRecordUseCase<T> + Send + Sync>
where
    T: Document,
    S: DocumentSource + Clone + 'static,
{
    Arc::new(GetRecordService::new(JsonRecordQuery::<T, S>::new(
        source.clone(),
    )))
}

impl AppState {
    /// Wires every use case to JSON queries over one shared document source.
    pub fn from_source<S>(source: S) -> Self
    where
        S: DocumentSource + Clone + 'static,
    {
        Self {
            get_personal_info: record_use_case(&source),
            get_contact_info: record_use_case(&source),
            list_educations: list_use_case(&source),
            get_education: get_use_case(&source),
            list_experiences: list_use_case(&source),
            get_experience: get_use_case(&source),
            list_trainings: list_use_case(&source),
            get_training: get_use_case(&source),
            list_certifications: list_use_case(&source),
            get_certification: get_use_case(&source),
            list_language_skills: list_use_case(&source),
            get_language_skill: get_use_case(&source),
            list_soft_skills: list_use_case(&source),
            get_soft_skill: get_use_case(&source),
            search_technical_skills: Arc::new(SearchTechnicalSkillsService::new(
                JsonResourceQuery::<TechnicalSkill, S>::new(source.clone()),
            )),
            get_technical_skill: get_use_case(&source),
        }
    }
}

fn init_tracing(format: LogFormat) {
    let (json, pretty) = match format {
        LogFormat::Json => (Some(tracing_subscriber::fmt::layer().json()), None),
        LogFormat::Pretty => (None, Some(tracing_subscriber::fmt::layer())),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(json)
        .with(pretty)
        .init();
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("Failed to load configuration")?;
    init_tracing(config.log_format);

    info!(
        data_dir = %config.data_dir.display(),
        default_language = %config.default_language,
        "Starting CV service..."
    );

    let fs_source = FsDocumentSource::new(&config.data_dir);
    let documents = Arc::new(CachedDocumentSource::new(fs_source.clone()));
    let state = AppState::from_source(documents);
    let default_language = DefaultLanguage(config.default_language);
    let openapi = ApiDoc::openapi();

    let server_url = config.bind_address();
    info!(host = %server_url.0, port = server_url.1, "Server listening");

    HttpServer::new(move || {
        App::new()
            .wrap(Correlation)
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(default_language))
            .app_data(web::Data::new(fs_source.clone()))
            .app_data(custom_path_config())
            .app_data(custom_query_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(server_url)
    .context("Failed to bind server address")?
    .run()
    .await
    .context("Server terminated with an error")
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Profile
    cfg.service(crate::profile::adapter::incoming::web::routes::get_personal_info_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::get_contact_info_handler);
    // Education
    cfg.service(crate::education::adapter::incoming::web::routes::get_educations_handler);
    cfg.service(crate::education::adapter::incoming::web::routes::get_education_handler);
    // Experience
    cfg.service(crate::experience::adapter::incoming::web::routes::get_experiences_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::get_experience_handler);
    // Training
    cfg.service(crate::training::adapter::incoming::web::routes::get_trainings_handler);
    cfg.service(crate::training::adapter::incoming::web::routes::get_training_handler);
    // Certifications
    cfg.service(crate::certification::adapter::incoming::web::routes::get_certifications_handler);
    cfg.service(crate::certification::adapter::incoming::web::routes::get_certification_handler);
    // Skills
    cfg.service(crate::skills::adapter::incoming::web::routes::get_language_skills_handler);
    cfg.service(crate::skills::adapter::incoming::web::routes::get_language_skill_handler);
    cfg.service(crate::skills::adapter::incoming::web::routes::get_soft_skills_handler);
    cfg.service(crate::skills::adapter::incoming::web::routes::get_soft_skill_handler);
    cfg.service(crate::skills::adapter::incoming::web::routes::search_technical_skills_handler);
    cfg.service(crate::skills::adapter::incoming::web::routes::get_technical_skill_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
