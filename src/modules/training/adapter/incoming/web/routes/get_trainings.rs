use actix_web::{get, web, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    catalog::adapter::incoming::web::map_list_error,
    shared::api::{ApiResponse, RequestLanguage},
    training::adapter::incoming::web::routes::TrainingResponse,
    AppState,
};

/// List training and courses
///
/// Most recently issued first.
#[utoipa::path(
    get,
    path = "/api/v1/training",
    tag = "training",
    params(
        ("Accept-Language" = Option<String>, Header, description = "es_ES (default) or en_EN")
    ),
    responses(
        (status = 200, description = "Training entries", body = inline(SuccessResponse<Vec<TrainingResponse>>)),
        (status = 400, description = "Unsupported language", body = ErrorResponse),
        (status = 500, description = "CV data could not be loaded", body = ErrorResponse)
    )
)]
#[get("/api/v1/training")]
pub async fn get_trainings_handler(
    language: RequestLanguage,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.list_trainings.execute(language.0).await {
        Ok(items) => ApiResponse::success(
            items
                .into_iter()
                .map(TrainingResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(err) => map_list_error(err),
    }
}
