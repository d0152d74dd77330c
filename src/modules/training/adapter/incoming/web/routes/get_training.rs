use actix_web::{get, web, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    catalog::adapter::incoming::web::map_get_error,
    shared::api::{ApiResponse, RequestLanguage},
    training::adapter::incoming::web::routes::TrainingResponse,
    AppState,
};

/// Get a training entry by credential id
#[utoipa::path(
    get,
    path = "/api/v1/training/{credential_id}",
    tag = "training",
    params(
        ("credential_id" = String, Path, description = "Credential id", example = "4Aes"),
        ("Accept-Language" = Option<String>, Header, description = "es_ES (default) or en_EN")
    ),
    responses(
        (status = 200, description = "Training entry", body = inline(SuccessResponse<TrainingResponse>)),
        (status = 400, description = "Unsupported language", body = ErrorResponse),
        (status = 404, description = "No training with that credential id", body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "TRAINING_NOT_FOUND",
                    "message": "Training with id 'DOES-NOT-EXIST' not found"
                }
            })
        ),
        (status = 500, description = "CV data could not be loaded", body = ErrorResponse)
    )
)]
#[get("/api/v1/training/{credential_id}")]
pub async fn get_training_handler(
    path: web::Path<String>,
    language: RequestLanguage,
    data: web::Data<AppState>,
) -> impl Responder {
    let credential_id = path.into_inner();

    match data.get_training.execute(credential_id, language.0).await {
        Ok(item) => ApiResponse::success(TrainingResponse::from(item)),
        Err(err) => map_get_error(err),
    }
}
