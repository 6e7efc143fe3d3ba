use uuid::Uuid;

use crate::error::ServiceError;
use crate::filter::convert_filters;
use crate::handlers::ServiceHandler;
use crate::identity::{Agent, Permission};
use crate::models::ai::{Ai, EngineType, WebhookMessage};

impl ServiceHandler {
    /// Validates the AI profile's ownership and returns it.
    pub(crate) async fn ai_fetch(&self, id: Uuid) -> Result<Ai, ServiceError> {
        let res = self
            .req
            .ai_v1_ai_get(id)
            .await
            .map_err(|e| Self::resolve_error("ai_v1_ai_get", "ai", id, e))?;

        Self::ensure_active(res, "ai", id)
    }

    /// Creates an AI voice-agent profile for the agent's customer.
    #[allow(clippy::too_many_arguments)]
    pub async fn ai_create(
        &self,
        agent: &Agent,
        name: &str,
        detail: &str,
        engine_type: EngineType,
        engine_model: &str,
        engine_key: &str,
        init_prompt: &str,
    ) -> Result<WebhookMessage, ServiceError> {
        tracing::debug!(
            customer_id = %agent.customer_id,
            username = %agent.username,
            name,
            "creating a new ai"
        );

        self.authorize(
            agent,
            agent.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        let res = self
            .req
            .ai_v1_ai_create(
                agent.customer_id,
                name,
                detail,
                engine_type,
                engine_model,
                engine_key,
                init_prompt,
            )
            .await
            .map_err(|e| ServiceError::backend("ai_v1_ai_create", e))?;

        Ok(res.convert_webhook_message())
    }

    pub async fn ai_get(&self, agent: &Agent, ai_id: Uuid) -> Result<WebhookMessage, ServiceError> {
        let ai = self.ai_fetch(ai_id).await?;

        self.authorize(
            agent,
            ai.identity.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        Ok(ai.convert_webhook_message())
    }

    pub async fn ai_gets(
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

        let filters = convert_filters::<Ai>(&self.base_filters(agent))?;
        let items = self
            .req
            .ai_v1_ai_list(&token, size, filters)
            .await
            .map_err(|e| ServiceError::backend("ai_v1_ai_list", e))?;

        Ok(items.iter().map(Ai::convert_webhook_message).collect())
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn ai_update(
        &self,
        agent: &Agent,
        ai_id: Uuid,
        name: &str,
        detail: &str,
        engine_type: EngineType,
        engine_model: &str,
        engine_key: &str,
        init_prompt: &str,
    ) -> Result<WebhookMessage, ServiceError> {
        let ai = self.ai_fetch(ai_id).await?;

        self.authorize(
            agent,
            ai.identity.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        let res = self
            .req
            .ai_v1_ai_update(
                ai_id,
                name,
                detail,
                engine_type,
                engine_model,
                engine_key,
                init_prompt,
            )
            .await
            .map_err(|e| ServiceError::backend("ai_v1_ai_update", e))?;

        Ok(res.convert_webhook_message())
    }

    pub async fn ai_delete(
        &self,
        agent: &Agent,
        ai_id: Uuid,
    ) -> Result<WebhookMessage, ServiceError> {
        tracing::debug!(customer_id = %agent.customer_id, ai_id = %ai_id, "deleting ai");

        let ai = self.ai_fetch(ai_id).await?;

        self.authorize(
            agent,
            ai.identity.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        let res = self
            .req
            .ai_v1_ai_delete(ai_id)
            .await
            .map_err(|e| ServiceError::backend("ai_v1_ai_delete", e))?;

        Ok(res.convert_webhook_message())
    }
}
