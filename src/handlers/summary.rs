use uuid::Uuid;

use crate::config;
use crate::error::ServiceError;
use crate::filter::convert_filters;
use crate::handlers::ServiceHandler;
use crate::identity::{Agent, Permission};
use crate::models::summary::{ReferenceType, Summary, WebhookMessage};
use crate::models::Owned;

impl ServiceHandler {
    /// Validates the summary's ownership and returns it.
    pub(crate) async fn summary_fetch(&self, id: Uuid) -> Result<Summary, ServiceError> {
        let res = self
            .req
            .ai_v1_summary_get(id)
            .await
            .map_err(|e| Self::resolve_error("ai_v1_summary_get", "summary", id, e))?;

        Self::ensure_active(res, "summary", id)
    }

    /// Ownership of a summary request is validated through whichever
    /// resource it summarizes. An unrecognized reference type fails before
    /// any RPC is issued.
    async fn summary_reference_customer_id(
        &self,
        reference_type: ReferenceType,
        reference_id: Uuid,
    ) -> Result<Uuid, ServiceError> {
        match reference_type {
            ReferenceType::Call => Ok(self.call_fetch(reference_id).await?.customer_id()),
            ReferenceType::Conference => {
                Ok(self.conference_fetch(reference_id).await?.customer_id())
            }
            ReferenceType::Recording => {
                Ok(self.recording_fetch(reference_id).await?.customer_id())
            }
            ReferenceType::Transcribe => {
                Ok(self.transcribe_fetch(reference_id).await?.customer_id())
            }
            ReferenceType::None => {
                Err(ServiceError::UnsupportedReferenceType("none".to_string()))
            }
        }
    }

    /// Requests an AI-generated summary of a call, conference, recording,
    /// or transcription.
    pub async fn summary_create(
        &self,
        agent: &Agent,
        activeflow_id: Uuid,
        on_end_flow_id: Uuid,
        reference_type: ReferenceType,
        reference_id: Uuid,
        language: &str,
    ) -> Result<WebhookMessage, ServiceError> {
        tracing::debug!(
            customer_id = %agent.customer_id,
            reference_id = %reference_id,
            "creating a new summary"
        );

        let target_customer_id = self
            .summary_reference_customer_id(reference_type, reference_id)
            .await?;

        self.authorize(
            agent,
            target_customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        let res = self
            .req
            .ai_v1_summary_create(
                agent.customer_id,
                activeflow_id,
                on_end_flow_id,
                reference_type,
                reference_id,
                language,
                config::config().dispatch.summary_create_timeout_ms,
            )
            .await
            .map_err(|e| ServiceError::backend("ai_v1_summary_create", e))?;

        Ok(res.convert_webhook_message())
    }

    pub async fn summary_get(
        &self,
        agent: &Agent,
        summary_id: Uuid,
    ) -> Result<WebhookMessage, ServiceError> {
        let summary = self.summary_fetch(summary_id).await?;

        self.authorize(
            agent,
            summary.identity.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        Ok(summary.convert_webhook_message())
    }

    pub async fn summary_gets(
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

        let filters = convert_filters::<Summary>(&self.base_filters(agent))?;
        let items = self
            .req
            .ai_v1_summary_list(&token, size, filters)
            .await
            .map_err(|e| ServiceError::backend("ai_v1_summary_list", e))?;

        Ok(items.iter().map(Summary::convert_webhook_message).collect())
    }

    pub async fn summary_delete(
        &self,
        agent: &Agent,
        summary_id: Uuid,
    ) -> Result<WebhookMessage, ServiceError> {
        tracing::debug!(customer_id = %agent.customer_id, summary_id = %summary_id, "deleting summary");

        let summary = self.summary_fetch(summary_id).await?;

        self.authorize(
            agent,
            summary.identity.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        let res = self
            .req
            .ai_v1_summary_delete(summary_id)
            .await
            .map_err(|e| ServiceError::backend("ai_v1_summary_delete", e))?;

        Ok(res.convert_webhook_message())
    }
}
