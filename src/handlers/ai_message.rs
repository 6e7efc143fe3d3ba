use uuid::Uuid;

use crate::config;
use crate::error::ServiceError;
use crate::filter::convert_filters;
use crate::handlers::ServiceHandler;
use crate::identity::{Agent, Permission};
use crate::models::ai_message::{AiMessage, Role, WebhookMessage};

impl ServiceHandler {
    /// Sends a message into a running AI session. Ownership is validated
    /// through the session; the dispatch carries the configured send cap.
    pub async fn ai_message_send(
        &self,
        agent: &Agent,
        aicall_id: Uuid,
        role: Role,
        content: &str,
        run_immediately: bool,
    ) -> Result<WebhookMessage, ServiceError> {
        tracing::debug!(
            customer_id = %agent.customer_id,
            aicall_id = %aicall_id,
            "sending a message to the aicall"
        );

        let aicall = self.aicall_fetch(aicall_id).await?;

        self.authorize(
            agent,
            aicall.identity.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        let res = self
            .req
            .ai_v1_message_send(
                aicall_id,
                role,
                content,
                run_immediately,
                config::config().dispatch.message_send_timeout_ms,
            )
            .await
            .map_err(|e| ServiceError::backend("ai_v1_message_send", e))?;

        Ok(res.convert_webhook_message())
    }

    /// Lists the messages of an AI session. Readable by customer agents.
    pub async fn ai_message_gets(
        &self,
        agent: &Agent,
        aicall_id: Uuid,
        size: u64,
        token: &str,
    ) -> Result<Vec<WebhookMessage>, ServiceError> {
        let token = self.page_token(token);

        let aicall = self.aicall_fetch(aicall_id).await?;

        self.authorize(
            agent,
            aicall.identity.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER | Permission::CUSTOMER_AGENT,
        )?;

        let filters = convert_filters::<AiMessage>(&self.base_filters(agent))?;
        let items = self
            .req
            .ai_v1_message_list_by_aicall_id(aicall_id, &token, size, filters)
            .await
            .map_err(|e| ServiceError::backend("ai_v1_message_list_by_aicall_id", e))?;

        Ok(items.iter().map(AiMessage::convert_webhook_message).collect())
    }
}
