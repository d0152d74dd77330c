//! Correlation-id middleware.
//!
//! Every request runs with a correlation id in task-local storage: the
//! caller's `X-Correlation-Id` when it sent a non-blank one, otherwise a
//! generated `req-<uuid>`. The id is echoed on the response and recorded on
//! a per-request tracing span.
//!
//! Task-locals are not inherited by spawned tasks. Wrap spawned work in
//! [`CorrelationId::scope`] to carry the id along.

use std::fmt;
use std::future::Future;
use std::task::{Context, Poll};

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::Error;
use futures::future::{ready, LocalBoxFuture, Ready};
use tokio::task_local;
use tracing::{debug, error, info_span, Instrument};
use uuid::Uuid;

pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

task_local! {
    static CORRELATION_ID: CorrelationId;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrelationId(String);

impl CorrelationId {
    pub fn generate() -> Self {
        Self(format!("req-{}", Uuid::new_v4()))
    }

    /// Keeps a caller-supplied id unless it is blank.
    pub fn from_header(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(id) if !id.is_empty() => Self(id.to_string()),
            _ => Self::generate(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The id of the request being served, if any.
    pub fn current() -> Option<Self> {
        CORRELATION_ID.try_with(|id| id.clone()).ok()
    }

    pub async fn scope<Fut>(id: CorrelationId, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        CORRELATION_ID.scope(id, fut).await
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone)]
pub struct Correlation;

impl<S, B> Transform<S, ServiceRequest> for Correlation
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = CorrelationMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CorrelationMiddleware { service }))
    }
}

pub struct CorrelationMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for CorrelationMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let incoming = req
            .headers()
            .get(CORRELATION_ID_HEADER)
            .and_then(|value| value.to_str().ok());
        let correlation_id = CorrelationId::from_header(incoming);

        let span = info_span!(
            "request",
            correlation_id = %correlation_id,
            method = %req.method(),
            path = %req.path(),
        );

        let fut = {
            let _entered = span.enter();
            debug!("Request started");
            self.service.call(req)
        };

        let scoped_id = correlation_id.clone();
        Box::pin(
            CorrelationId::scope(scoped_id, async move {
                let mut res = fut.await?;
                debug!(status = res.status().as_u16(), "Request completed");

                match HeaderValue::from_str(correlation_id.as_str()) {
                    Ok(value) => {
                        res.response_mut()
                            .headers_mut()
                            .insert(HeaderName::from_static(CORRELATION_ID_HEADER), value);
                    }
                    Err(error) => {
                        error!(%error, "Failed to encode correlation id header");
                    }
                }
                Ok(res)
            })
            .instrument(span),
        )
    }
}
