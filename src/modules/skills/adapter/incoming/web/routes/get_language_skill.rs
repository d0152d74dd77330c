use actix_web::{get, web, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    catalog::adapter::incoming::web::map_get_error,
    shared::api::{ApiResponse, RequestLanguage},
    skills::adapter::incoming::web::routes::LanguageSkillResponse,
    AppState,
};

/// Get a language skill by id
#[utoipa::path(
    get,
    path = "/api/v1/skills/languages/{id}",
    tag = "skills",
    params(
        ("id" = u32, Path, description = "Numeric id"),
        ("Accept-Language" = Option<String>, Header, description = "es_ES (default) or en_EN")
    ),
    responses(
        (status = 200, description = "Get a language skill by id", body = inline(SuccessResponse<LanguageSkillResponse>)),
        (status = 400, description = "Unsupported language or malformed id", body = ErrorResponse),
        (status = 404, description = "Unknown id", body = ErrorResponse),
        (status = 500, description = "CV data could not be loaded", body = ErrorResponse)
    )
)]
#[get("/api/v1/skills/languages/{id}")]
pub async fn get_language_skill_handler(
    path: web::Path<u32>,
    language: RequestLanguage,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.get_language_skill.execute(id, language.0).await {
        Ok(item) => ApiResponse::success(LanguageSkillResponse::from(item)),
        Err(err) => map_get_error(err),
    }
}
