// src/modules/catalog/adapter/incoming/web/error_mapping.rs
use actix_web::HttpResponse;
use tracing::error;

use crate::{
    catalog::application::{
        ports::incoming::use_cases::{GetRecordError, GetResourceError, ListResourcesError},
        services::UseCaseExecutionError,
    },
    shared::{api::ApiResponse, documents::DataSourceError},
};

/// `LanguageSkill` -> `LANGUAGE_SKILL_NOT_FOUND`
pub fn not_found_code(resource_type: &str) -> String {
    let mut code = String::with_capacity(resource_type.len() + 10);
    for (i, ch) in resource_type.chars().enumerate() {
        if ch.is_ascii_uppercase() && i > 0 {
            code.push('_');
        }
        code.push(ch.to_ascii_uppercase());
    }
    code.push_str("_NOT_FOUND");
    code
}

fn data_source_failure(err: &DataSourceError) -> HttpResponse {
    error!(error = %err, location = err.location(), "Data source failure");
    ApiResponse::data_source_error()
}

fn execution_failure(err: &UseCaseExecutionError) -> HttpResponse {
    error!(error = %err, "Use case execution failure");
    ApiResponse::internal_error()
}

pub fn map_list_error(err: ListResourcesError) -> HttpResponse {
    match err {
        ListResourcesError::DataSource(e) => data_source_failure(&e),
        ListResourcesError::Execution(e) => execution_failure(&e),
    }
}

pub fn map_get_error(err: GetResourceError) -> HttpResponse {
    match err {
        GetResourceError::NotFound(e) => {
            ApiResponse::not_found(&not_found_code(e.resource_type), &e.to_string())
        }
        GetResourceError::DataSource(e) => data_source_failure(&e),
        GetResourceError::Execution(e) => execution_failure(&e),
    }
}

pub fn map_record_error(err: GetRecordError) -> HttpResponse {
    match err {
        GetRecordError::DataSource(e) => data_source_failure(&e),
        GetRecordError::Execution(e) => execution_failure(&e),
    }
}
