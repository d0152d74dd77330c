use actix_web::{get, web, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    catalog::adapter::incoming::web::map_record_error,
    profile::adapter::incoming::web::routes::ContactInfoResponse,
    shared::api::{ApiResponse, RequestLanguage},
    AppState,
};

/// Get contact information
#[utoipa::path(
    get,
    path = "/api/v1/contact",
    tag = "profile",
    params(
        ("Accept-Language" = Option<String>, Header, description = "es_ES (default) or en_EN")
    ),
    responses(
        (status = 200, description = "Contact information", body = inline(SuccessResponse<ContactInfoResponse>)),
        (status = 400, description = "Unsupported language", body = ErrorResponse),
        (status = 500, description = "CV data could not be loaded", body = ErrorResponse)
    )
)]
#[get("/api/v1/contact")]
pub async fn get_contact_info_handler(
    language: RequestLanguage,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.get_contact_info.execute(language.0).await {
        Ok(info) => ApiResponse::success(ContactInfoResponse::from(info)),
        Err(err) => map_record_error(err),
    }
}
