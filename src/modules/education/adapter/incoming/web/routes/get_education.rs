use actix_web::{get, web, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    catalog::adapter::incoming::web::map_get_error,
    education::adapter::incoming::web::routes::EducationResponse,
    shared::api::{ApiResponse, RequestLanguage},
    AppState,
};

/// Get an education entry by id
#[utoipa::path(
    get,
    path = "/api/v1/education/{id}",
    tag = "education",
    params(
        ("id" = u32, Path, description = "Numeric education id"),
        ("Accept-Language" = Option<String>, Header, description = "es_ES (default) or en_EN")
    ),
    responses(
        (status = 200, description = "Education entry", body = inline(SuccessResponse<EducationResponse>)),
        (status = 400, description = "Unsupported language or malformed id", body = ErrorResponse),
        (status = 404, description = "No education entry with that id", body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "EDUCATION_NOT_FOUND",
                    "message": "Education with id '9999' not found"
                }
            })
        ),
        (status = 500, description = "CV data could not be loaded", body = ErrorResponse)
    )
)]
#[get("/api/v1/education/{id}")]
pub async fn get_education_handler(
    path: web::Path<u32>,
    language: RequestLanguage,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.get_education.execute(id, language.0).await {
        Ok(item) => ApiResponse::success(EducationResponse::from(item)),
        Err(err) => map_get_error(err),
    }
}
