use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::shared::documents::FsDocumentSource;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    data: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Checks the CV data root is readable
#[get("/ready")]
pub async fn readiness(source: web::Data<FsDocumentSource>) -> impl Responder {
    if source.probe().await {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            data: "ok",
        })
    } else {
        tracing::error!(root = %source.root().display(), "CV data root is not readable");
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            data: "unhealthy",
        })
    }
}
