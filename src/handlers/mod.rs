// Service-handler facade.
//
// Every public operation runs the same sequence: resolve the target
// resource for its ownership record, authorize the acting agent against the
// owning customer, dispatch exactly one backend RPC, and convert the result
// into its webhook projection. The sequence is written once here; the
// per-resource files below only plumb arguments.

pub mod ai;
pub mod ai_message;
pub mod aicall;
pub mod conference;
pub mod file;
pub mod outdial;
pub mod outdialtarget;
pub mod recording;
pub mod summary;
pub mod tag;
pub mod transcribe;
pub mod transcript;

use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::dispatcher::{BackendError, RequestHandler};
use crate::error::ServiceError;
use crate::identity::{self, Agent, Permission};
use crate::models::{call::Call, Owned};
use crate::util::{Clock, SystemClock};

/// Facade over the downstream domain services. Stateless; one instance is
/// shared across all concurrent requests.
pub struct ServiceHandler {
    req: Arc<dyn RequestHandler>,
    clock: Arc<dyn Clock>,
}

impl ServiceHandler {
    pub fn new(req: Arc<dyn RequestHandler>) -> Self {
        Self::with_clock(req, Arc::new(SystemClock))
    }

    pub fn with_clock(req: Arc<dyn RequestHandler>, clock: Arc<dyn Clock>) -> Self {
        Self { req, clock }
    }

    /// Permission gate. Rejection aborts the operation before any mutating
    /// RPC is issued.
    pub(crate) fn authorize(
        &self,
        agent: &Agent,
        target_customer_id: Uuid,
        required: Permission,
    ) -> Result<(), ServiceError> {
        if !identity::authorize(agent, target_customer_id, required) {
            tracing::info!(
                agent_id = %agent.id,
                customer_id = %agent.customer_id,
                target_customer_id = %target_customer_id,
                "agent has no permission"
            );
            return Err(ServiceError::permission_denied("agent has no permission"));
        }

        Ok(())
    }

    /// Soft-deleted resources are invisible: a resolve that returns one is
    /// reported as not-found, never passed further down the sequence.
    pub(crate) fn ensure_active<T: Owned>(
        resource: T,
        name: &'static str,
        id: Uuid,
    ) -> Result<T, ServiceError> {
        if resource.is_deleted() {
            tracing::debug!(resource = name, id = %id, "resource is soft-deleted");
            return Err(ServiceError::not_found(name, id));
        }

        Ok(resource)
    }

    /// Error mapping for resolve-path RPCs: backend not-found keeps the
    /// `NotFound` classification, everything else is wrapped with the
    /// operation name.
    pub(crate) fn resolve_error(
        operation: &'static str,
        name: &'static str,
        id: Uuid,
        err: BackendError,
    ) -> ServiceError {
        match err {
            BackendError::NotFound => ServiceError::not_found(name, id),
            other => ServiceError::backend(operation, other),
        }
    }

    /// An empty page token means "start from now".
    pub(crate) fn page_token(&self, token: &str) -> String {
        if token.is_empty() {
            self.clock.now_token()
        } else {
            token.to_string()
        }
    }

    /// Baseline list filters: scope to the agent's customer and hide
    /// soft-deleted records.
    pub(crate) fn base_filters(&self, agent: &Agent) -> HashMap<String, String> {
        HashMap::from([
            ("customer_id".to_string(), agent.customer_id.to_string()),
            ("deleted".to_string(), "false".to_string()),
        ])
    }

    /// Resolve a call for composite-reference ownership checks. Calls have
    /// no facade operations of their own in this layer.
    pub(crate) async fn call_fetch(&self, id: Uuid) -> Result<Call, ServiceError> {
        let res = self
            .req
            .call_v1_call_get(id)
            .await
            .map_err(|e| Self::resolve_error("call_v1_call_get", "call", id, e))?;

        Self::ensure_active(res, "call", id)
    }
}
