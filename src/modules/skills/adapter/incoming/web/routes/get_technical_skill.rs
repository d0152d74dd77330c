use actix_web::{get, web, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    catalog::adapter::incoming::web::map_get_error,
    shared::{api::ApiResponse, domain::Language},
    skills::adapter::incoming::web::routes::TechnicalSkillResponse,
    AppState,
};

/// Get a technical skill by id. Not localized.
#[utoipa::path(
    get,
    path = "/api/v1/skills/technical/{id}",
    tag = "skills",
    params(
        ("id" = u32, Path, description = "Numeric id")
    ),
    responses(
        (status = 200, description = "Technical skill", body = inline(SuccessResponse<TechnicalSkillResponse>)),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Unknown id", body = ErrorResponse),
        (status = 500, description = "CV data could not be loaded", body = ErrorResponse)
    )
)]
#[get("/api/v1/skills/technical/{id}")]
pub async fn get_technical_skill_handler(
    path: web::Path<u32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data
        .get_technical_skill
        .execute(id, Language::default())
        .await
    {
        Ok(item) => ApiResponse::success(TechnicalSkillResponse::from(item)),
        Err(err) => map_get_error(err),
    }
}
