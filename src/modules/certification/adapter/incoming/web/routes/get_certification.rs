use actix_web::{get, web, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    catalog::adapter::incoming::web::map_get_error,
    certification::adapter::incoming::web::routes::CertificationResponse,
    shared::{api::ApiResponse, domain::Language},
    AppState,
};

/// Get a license or certification by id
#[utoipa::path(
    get,
    path = "/api/v1/certifications/{id}",
    tag = "certifications",
    params(
        ("id" = u32, Path, description = "Numeric certification id", example = 1234)
    ),
    responses(
        (status = 200, description = "Certification", body = inline(SuccessResponse<CertificationResponse>)),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "No certification with that id", body = ErrorResponse),
        (status = 500, description = "CV data could not be loaded", body = ErrorResponse)
    )
)]
#[get("/api/v1/certifications/{id}")]
pub async fn get_certification_handler(
    path: web::Path<u32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data
        .get_certification
        .execute(id, Language::default())
        .await
    {
        Ok(item) => ApiResponse::success(CertificationResponse::from(item)),
        Err(err) => map_get_error(err),
    }
}
