// src/shared/domain/errors.rs

/// A single-item lookup found nothing for the requested identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{resource_type} with id '{resource_id}' not found")]
pub struct ResourceNotFound {
    pub resource_type: &'static str,
    pub resource_id: String,
}

impl ResourceNotFound {
    pub fn new(resource_type: &'static str, resource_id: impl ToString) -> Self {
        Self {
            resource_type,
            resource_id: resource_id.to_string(),
        }
    }
}
