// Facade-level error types
use thiserror::Error;
use uuid::Uuid;

use crate::dispatcher::BackendError;
use crate::filter::FilterError;

/// Error surface of every facade operation.
///
/// Failures are always returned to the caller immediately; nothing in this
/// layer retries, recovers silently, or panics. Backend failures are wrapped
/// with the operation name so the original cause stays inspectable through
/// `source()`.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: Uuid },

    #[error("agent has no permission: {0}")]
    PermissionDenied(String),

    #[error("unsupported reference type: {0}")]
    UnsupportedReferenceType(String),

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error("backend request failed: {operation}")]
    Backend {
        operation: &'static str,
        #[source]
        source: BackendError,
    },
}

impl ServiceError {
    pub fn not_found(resource: &'static str, id: Uuid) -> Self {
        ServiceError::NotFound { resource, id }
    }

    pub fn permission_denied(message: impl Into<String>) -> Self {
        ServiceError::PermissionDenied(message.into())
    }

    /// Wrap a backend failure with the facade operation that issued it.
    /// A backend not-found on a resolve path is translated by the caller
    /// into `NotFound` instead, so the soft-delete rule stays uniform.
    pub fn backend(operation: &'static str, source: BackendError) -> Self {
        ServiceError::Backend { operation, source }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::NotFound { .. })
    }

    pub fn is_permission_denied(&self) -> bool {
        matches!(self, ServiceError::PermissionDenied(_))
    }
}
