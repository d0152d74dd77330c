use actix_web::{get, web, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    catalog::adapter::incoming::web::map_list_error,
    certification::adapter::incoming::web::routes::CertificationResponse,
    shared::{api::ApiResponse, domain::Language},
    AppState,
};

/// List licenses and certifications
///
/// Not localized; `Accept-Language` is ignored. Most recently issued first.
#[utoipa::path(
    get,
    path = "/api/v1/certifications",
    tag = "certifications",
    responses(
        (status = 200, description = "Certifications", body = inline(SuccessResponse<Vec<CertificationResponse>>)),
        (status = 500, description = "CV data could not be loaded", body = ErrorResponse)
    )
)]
#[get("/api/v1/certifications")]
pub async fn get_certifications_handler(data: web::Data<AppState>) -> impl Responder {
    match data.list_certifications.execute(Language::default()).await {
        Ok(items) => ApiResponse::success(
            items
                .into_iter()
                .map(CertificationResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(err) => map_list_error(err),
    }
}
