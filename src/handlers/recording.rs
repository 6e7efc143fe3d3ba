use uuid::Uuid;

use crate::error::ServiceError;
use crate::filter::convert_filters;
use crate::handlers::ServiceHandler;
use crate::identity::{Agent, Permission};
use crate::models::recording::{Recording, WebhookMessage};

impl ServiceHandler {
    /// Validates the recording's ownership and returns it.
    pub(crate) async fn recording_fetch(&self, id: Uuid) -> Result<Recording, ServiceError> {
        let res = self
            .req
            .call_v1_recording_get(id)
            .await
            .map_err(|e| Self::resolve_error("call_v1_recording_get", "recording", id, e))?;

        Self::ensure_active(res, "recording", id)
    }

    pub async fn recording_get(
        &self,
        agent: &Agent,
        recording_id: Uuid,
    ) -> Result<WebhookMessage, ServiceError> {
        let recording = self.recording_fetch(recording_id).await?;

        self.authorize(
            agent,
            recording.identity.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        Ok(recording.convert_webhook_message())
    }

    pub async fn recording_gets(
        &self,
        agent: &Agent,
        size: u64,
        token: &str,
    ) -> Result<Vec<WebhookMessage>, ServiceError> {
        let token = self.page_token(token);

        self.authorize(
            agent,
            agent.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        let filters = convert_filters::<Recording>(&self.base_filters(agent))?;
        let items = self
            .req
            .call_v1_recording_list(&token, size, filters)
            .await
            .map_err(|e| ServiceError::backend("call_v1_recording_list", e))?;

        Ok(items
            .iter()
            .map(Recording::convert_webhook_message)
            .collect())
    }

    pub async fn recording_delete(
        &self,
        agent: &Agent,
        recording_id: Uuid,
    ) -> Result<WebhookMessage, ServiceError> {
        tracing::debug!(
            customer_id = %agent.customer_id,
            recording_id = %recording_id,
            "deleting recording"
        );

        let recording = self.recording_fetch(recording_id).await?;

        self.authorize(
            agent,
            recording.identity.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        let res = self
            .req
            .call_v1_recording_delete(recording_id)
            .await
            .map_err(|e| ServiceError::backend("call_v1_recording_delete", e))?;

        Ok(res.convert_webhook_message())
    }
}
