//! Error types for the Aegis IAM service.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AegisError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Conflict on {entity}: {message}")]
    Conflict { entity: String, message: String },

    #[error("Forbidden: {reason}")]
    Forbidden { reason: String },

    #[error("Authentication failed: {reason}")]
    AuthenticationFailed { reason: String },

    #[error("Call cancelled")]
    Cancelled,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AegisError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    pub fn forbidden(reason: impl Into<String>) -> Self {
        Self::Forbidden {
            reason: reason.into(),
        }
    }

    /// Stable code the transport maps onto its own status values.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Conflict { .. } => "CONFLICT",
            Self::Forbidden { .. } => "FORBIDDEN",
            Self::AuthenticationFailed { .. } => "UNAUTHENTICATED",
            Self::Cancelled => "CANCELLED",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

pub type AegisResult<T> = Result<T, AegisError>;

/// Errors reported by data-access and object-store collaborators.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Unique constraint violated: {constraint}")]
    UniqueViolation { entity: String, constraint: String },

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage error: {0}")]
    Other(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for AegisError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { entity, id } => AegisError::NotFound { entity, id },
            StorageError::UniqueViolation { entity, constraint } => AegisError::Conflict {
                entity,
                message: format!("{constraint} already exists"),
            },
            other => AegisError::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_violation_maps_to_conflict() {
        let err: AegisError = StorageError::UniqueViolation {
            entity: "department".into(),
            constraint: "code".into(),
        }
        .into();
        assert!(matches!(err, AegisError::Conflict { ref entity, .. } if entity == "department"));
        assert_eq!(err.code(), "CONFLICT");
    }

    #[test]
    fn not_found_is_preserved() {
        let err: AegisError = StorageError::NotFound {
            entity: "role".into(),
            id: "42".into(),
        }
        .into();
        assert_eq!(err.to_string(), "Entity not found: role with id 42");
    }

    #[test]
    fn unavailable_maps_to_internal() {
        let err: AegisError = StorageError::Unavailable("connection reset".into()).into();
        assert!(matches!(err, AegisError::Internal(_)));
    }
}
