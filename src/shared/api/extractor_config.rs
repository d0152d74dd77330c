// src/shared/api/extractor_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::{PathConfig, QueryConfig};

pub fn custom_path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("VALIDATION_ERROR", &message),
        )
        .into()
    })
}

pub fn custom_query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("VALIDATION_ERROR", &message),
        )
        .into()
    })
}
