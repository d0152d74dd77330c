// src/shared/documents/error.rs

/// Failure to turn a bundled document into the requested shape. Always
/// carries the logical location that was being read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentReadError {
    #[error("Document '{location}' not found")]
    Missing { location: String },

    #[error("Failed to read document '{location}': {reason}")]
    Unreadable { location: String, reason: String },

    #[error("Failed to deserialize document '{location}': {reason}")]
    Malformed { location: String, reason: String },
}

impl DocumentReadError {
    pub fn location(&self) -> &str {
        match self {
            DocumentReadError::Missing { location }
            | DocumentReadError::Unreadable { location, .. }
            | DocumentReadError::Malformed { location, .. } => location,
        }
    }
}

/// Infrastructure failure behind a query port. Indicates a packaging defect,
/// never a client error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataSourceError {
    #[error(transparent)]
    DocumentRead(#[from] DocumentReadError),

    #[error("Document '{location}' holds duplicate {resource_type} key '{key}'")]
    DuplicateKey {
        location: String,
        resource_type: &'static str,
        key: String,
    },
}

impl DataSourceError {
    pub fn location(&self) -> &str {
        match self {
            DataSourceError::DocumentRead(err) => err.location(),
            DataSourceError::DuplicateKey { location, .. } => location,
        }
    }
}
