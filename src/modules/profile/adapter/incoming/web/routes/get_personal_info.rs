use actix_web::{get, web, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    catalog::adapter::incoming::web::map_record_error,
    profile::adapter::incoming::web::routes::PersonalInfoResponse,
    shared::api::{ApiResponse, RequestLanguage},
    AppState,
};

/// Get personal information
#[utoipa::path(
    get,
    path = "/api/v1/personal",
    tag = "profile",
    params(
        ("Accept-Language" = Option<String>, Header, description = "es_ES (default) or en_EN")
    ),
    responses(
        (status = 200, description = "Personal information", body = inline(SuccessResponse<PersonalInfoResponse>)),
        (status = 400, description = "Unsupported language", body = ErrorResponse),
        (status = 500, description = "CV data could not be loaded", body = ErrorResponse)
    )
)]
#[get("/api/v1/personal")]
pub async fn get_personal_info_handler(
    language: RequestLanguage,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.get_personal_info.execute(language.0).await {
        Ok(info) => ApiResponse::success(PersonalInfoResponse::from(info)),
        Err(err) => map_record_error(err),
    }
}
