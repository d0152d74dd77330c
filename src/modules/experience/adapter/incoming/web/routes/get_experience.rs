use actix_web::{get, web, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    catalog::adapter::incoming::web::map_get_error,
    experience::adapter::incoming::web::routes::ExperienceResponse,
    shared::api::{ApiResponse, RequestLanguage},
    AppState,
};

/// Get a work experience entry by id
#[utoipa::path(
    get,
    path = "/api/v1/experience/{id}",
    tag = "experience",
    params(
        ("id" = u32, Path, description = "Numeric experience id"),
        ("Accept-Language" = Option<String>, Header, description = "es_ES (default) or en_EN")
    ),
    responses(
        (status = 200, description = "Experience entry", body = inline(SuccessResponse<ExperienceResponse>)),
        (status = 400, description = "Unsupported language or malformed id", body = ErrorResponse),
        (status = 404, description = "No experience entry with that id", body = ErrorResponse),
        (status = 500, description = "CV data could not be loaded", body = ErrorResponse)
    )
)]
#[get("/api/v1/experience/{id}")]
pub async fn get_experience_handler(
    path: web::Path<u32>,
    language: RequestLanguage,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.get_experience.execute(id, language.0).await {
        Ok(item) => ApiResponse::success(ExperienceResponse::from(item)),
        Err(err) => map_get_error(err),
    }
}
