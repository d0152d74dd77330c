// src/shared/api/language.rs
use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::future::{ready, Ready};
use tracing::warn;

use crate::shared::{
    api::ApiResponse,
    domain::{InvalidLanguage, Language},
};

pub const ACCEPT_LANGUAGE: &str = "Accept-Language";

/// Language used when a request carries no `Accept-Language` header.
/// Registered as app data; falls back to `es_ES` when absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultLanguage(pub Language);

/// The content language resolved from the `Accept-Language` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLanguage(pub Language);

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

pub fn invalid_language_response(err: &InvalidLanguage) -> HttpResponse {
    ApiResponse::bad_request("INVALID_LANGUAGE", &err.to_string())
}

impl FromRequest for RequestLanguage {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let default = req
            .app_data::<web::Data<DefaultLanguage>>()
            .map(|d| ***d)
            .unwrap_or_default();

        let code = match req.headers().get(ACCEPT_LANGUAGE) {
            Some(value) => match value.to_str() {
                Ok(code) if code.trim().is_empty() => None,
                Ok(code) => Some(code.to_string()),
                Err(_) => Some(String::from_utf8_lossy(value.as_bytes()).into_owned()),
            },
            None => None,
        };

        match Language::resolve_or(code.as_deref(), Some(default.0)) {
            Ok(language) => ready(Ok(RequestLanguage(language))),
            Err(err) => {
                warn!(code = %err.code, "Rejected request language");
                ready(Err(create_api_error(invalid_language_response(&err))))
            }
        }
    }
}
