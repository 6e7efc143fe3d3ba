use std::collections::HashMap;
use uuid::Uuid;

use crate::error::ServiceError;
use crate::filter::convert_filters;
use crate::handlers::ServiceHandler;
use crate::identity::{Agent, Permission};
use crate::models::conference::{Conference, Type, WebhookMessage};
use crate::models::recording::Format;

impl ServiceHandler {
    /// Validates the conference's ownership and returns it.
    pub(crate) async fn conference_fetch(&self, id: Uuid) -> Result<Conference, ServiceError> {
        let res = self
            .req
            .conference_v1_conference_get(id)
            .await
            .map_err(|e| Self::resolve_error("conference_v1_conference_get", "conference", id, e))?;

        Self::ensure_active(res, "conference", id)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn conference_create(
        &self,
        agent: &Agent,
        conference_type: Type,
        name: &str,
        detail: &str,
        data: HashMap<String, serde_json::Value>,
        timeout: i32,
        pre_flow_id: Uuid,
        post_flow_id: Uuid,
    ) -> Result<WebhookMessage, ServiceError> {
        tracing::debug!(
            customer_id = %agent.customer_id,
            username = %agent.username,
            name,
            "creating a new conference"
        );

        self.authorize(
            agent,
            agent.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        let res = self
            .req
            .conference_v1_conference_create(
                agent.customer_id,
                conference_type,
                name,
                detail,
                data,
                timeout,
                pre_flow_id,
                post_flow_id,
            )
            .await
            .map_err(|e| ServiceError::backend("conference_v1_conference_create", e))?;

        Ok(res.convert_webhook_message())
    }

    pub async fn conference_get(
        &self,
        agent: &Agent,
        conference_id: Uuid,
    ) -> Result<WebhookMessage, ServiceError> {
        let conference = self.conference_fetch(conference_id).await?;

        self.authorize(
            agent,
            conference.identity.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        Ok(conference.convert_webhook_message())
    }

    pub async fn conference_gets(
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

        let filters = convert_filters::<Conference>(&self.base_filters(agent))?;
        let items = self
            .req
            .conference_v1_conference_list(&token, size, filters)
            .await
            .map_err(|e| ServiceError::backend("conference_v1_conference_list", e))?;

        Ok(items
            .iter()
            .map(Conference::convert_webhook_message)
            .collect())
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn conference_update(
        &self,
        agent: &Agent,
        conference_id: Uuid,
        name: &str,
        detail: &str,
        data: HashMap<String, serde_json::Value>,
        timeout: i32,
        pre_flow_id: Uuid,
        post_flow_id: Uuid,
    ) -> Result<WebhookMessage, ServiceError> {
        let conference = self.conference_fetch(conference_id).await?;

        self.authorize(
            agent,
            conference.identity.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        let res = self
            .req
            .conference_v1_conference_update(
                conference_id,
                name,
                detail,
                data,
                timeout,
                pre_flow_id,
                post_flow_id,
            )
            .await
            .map_err(|e| ServiceError::backend("conference_v1_conference_update", e))?;

        Ok(res.convert_webhook_message())
    }

    pub async fn conference_delete(
        &self,
        agent: &Agent,
        conference_id: Uuid,
    ) -> Result<WebhookMessage, ServiceError> {
        tracing::debug!(
            customer_id = %agent.customer_id,
            conference_id = %conference_id,
            "deleting conference"
        );

        let conference = self.conference_fetch(conference_id).await?;

        self.authorize(
            agent,
            conference.identity.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        let res = self
            .req
            .conference_v1_conference_delete(conference_id)
            .await
            .map_err(|e| ServiceError::backend("conference_v1_conference_delete", e))?;

        Ok(res.convert_webhook_message())
    }

    pub async fn conference_recording_start(
        &self,
        agent: &Agent,
        conference_id: Uuid,
        format: Format,
    ) -> Result<WebhookMessage, ServiceError> {
        let conference = self.conference_fetch(conference_id).await?;

        self.authorize(
            agent,
            conference.identity.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        let res = self
            .req
            .conference_v1_conference_recording_start(conference_id, format)
            .await
            .map_err(|e| ServiceError::backend("conference_v1_conference_recording_start", e))?;

        Ok(res.convert_webhook_message())
    }

    pub async fn conference_recording_stop(
        &self,
        agent: &Agent,
        conference_id: Uuid,
    ) -> Result<WebhookMessage, ServiceError> {
        let conference = self.conference_fetch(conference_id).await?;

        self.authorize(
            agent,
            conference.identity.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        let res = self
            .req
            .conference_v1_conference_recording_stop(conference_id)
            .await
            .map_err(|e| ServiceError::backend("conference_v1_conference_recording_stop", e))?;

        Ok(res.convert_webhook_message())
    }

    pub async fn conference_transcribe_start(
        &self,
        agent: &Agent,
        conference_id: Uuid,
        language: &str,
    ) -> Result<WebhookMessage, ServiceError> {
        let conference = self.conference_fetch(conference_id).await?;

        self.authorize(
            agent,
            conference.identity.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        let res = self
            .req
            .conference_v1_conference_transcribe_start(conference_id, language)
            .await
            .map_err(|e| ServiceError::backend("conference_v1_conference_transcribe_start", e))?;

        Ok(res.convert_webhook_message())
    }

    pub async fn conference_transcribe_stop(
        &self,
        agent: &Agent,
        conference_id: Uuid,
    ) -> Result<WebhookMessage, ServiceError> {
        let conference = self.conference_fetch(conference_id).await?;

        self.authorize(
            agent,
            conference.identity.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        let res = self
            .req
            .conference_v1_conference_transcribe_stop(conference_id)
            .await
            .map_err(|e| ServiceError::backend("conference_v1_conference_transcribe_stop", e))?;

        Ok(res.convert_webhook_message())
    }
}
