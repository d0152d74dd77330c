use actix_web::{get, web, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    catalog::adapter::incoming::web::map_list_error,
    shared::api::{ApiResponse, RequestLanguage},
    skills::adapter::incoming::web::routes::SoftSkillResponse,
    AppState,
};

/// List soft skills
#[utoipa::path(
    get,
    path = "/api/v1/skills/soft",
    tag = "skills",
    params(
        ("Accept-Language" = Option<String>, Header, description = "es_ES (default) or en_EN")
    ),
    responses(
        (status = 200, description = "List soft skills", body = inline(SuccessResponse<Vec<SoftSkillResponse>>)),
        (status = 400, description = "Unsupported language", body = ErrorResponse),
        (status = 500, description = "CV data could not be loaded", body = ErrorResponse)
    )
)]
#[get("/api/v1/skills/soft")]
pub async fn get_soft_skills_handler(language: RequestLanguage, data: web::Data<AppState>) -> impl Responder {
    match data.list_soft_skills.execute(language.0).await {
        Ok(items) => ApiResponse::success(items.into_iter().map(SoftSkillResponse::from).collect::<Vec<_>>()),
        Err(err) => map_list_error(err),
    }
}
