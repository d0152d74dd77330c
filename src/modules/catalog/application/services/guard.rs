// src/modules/catalog/application/services/guard.rs
use futures::FutureExt;
use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use tracing::error;

/// A use case failed for a reason outside the domain taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Use case '{use_case}' failed: {message}")]
pub struct UseCaseExecutionError {
    pub use_case: String,
    pub message: String,
}

impl UseCaseExecutionError {
    pub fn new(use_case: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            use_case: use_case.into(),
            message: message.into(),
        }
    }
}

/// Drives `fut` to completion, turning a panic inside it into an
/// [`UseCaseExecutionError`] naming `use_case`. Ordinary errors pass through.
pub async fn run_guarded<F, T, E>(use_case: &str, fut: F) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
    E: From<UseCaseExecutionError>,
{
    match AssertUnwindSafe(fut).catch_unwind().await {
        Ok(result) => result,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            error!(use_case, message = %message, "Use case aborted unexpectedly");
            Err(UseCaseExecutionError::new(use_case, message).into())
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown failure".to_string()
    }
}
