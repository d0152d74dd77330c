use actix_web::{get, web, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    catalog::adapter::incoming::web::map_list_error,
    experience::adapter::incoming::web::routes::ExperienceResponse,
    shared::api::{ApiResponse, RequestLanguage},
    AppState,
};

/// List work experience
///
/// Most recent first. Entries without a start date are listed ahead of the rest.
#[utoipa::path(
    get,
    path = "/api/v1/experience",
    tag = "experience",
    params(
        ("Accept-Language" = Option<String>, Header, description = "es_ES (default) or en_EN")
    ),
    responses(
        (status = 200, description = "Experience entries", body = inline(SuccessResponse<Vec<ExperienceResponse>>)),
        (status = 400, description = "Unsupported language", body = ErrorResponse),
        (status = 500, description = "CV data could not be loaded", body = ErrorResponse)
    )
)]
#[get("/api/v1/experience")]
pub async fn get_experiences_handler(
    language: RequestLanguage,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.list_experiences.execute(language.0).await {
        Ok(items) => ApiResponse::success(
            items
                .into_iter()
                .map(ExperienceResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(err) => map_list_error(err),
    }
}
