use actix_web::{get, web, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    catalog::adapter::incoming::web::map_list_error,
    education::adapter::incoming::web::routes::EducationResponse,
    shared::api::{ApiResponse, RequestLanguage},
    AppState,
};

/// List education entries
///
/// Returns every education entry in the requested language, most recent first.
#[utoipa::path(
    get,
    path = "/api/v1/education",
    tag = "education",
    params(
        ("Accept-Language" = Option<String>, Header, description = "es_ES (default) or en_EN")
    ),
    responses(
        (status = 200, description = "Education entries", body = inline(SuccessResponse<Vec<EducationResponse>>)),
        (status = 400, description = "Unsupported language", body = ErrorResponse),
        (status = 500, description = "CV data could not be loaded", body = ErrorResponse)
    )
)]
#[get("/api/v1/education")]
pub async fn get_educations_handler(
    language: RequestLanguage,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.list_educations.execute(language.0).await {
        Ok(items) => ApiResponse::success(
            items
                .into_iter()
                .map(EducationResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(err) => map_list_error(err),
    }
}
