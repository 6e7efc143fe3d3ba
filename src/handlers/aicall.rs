use uuid::Uuid;

use crate::error::ServiceError;
use crate::filter::convert_filters;
use crate::handlers::ServiceHandler;
use crate::identity::{Agent, Permission};
use crate::models::aicall::{Aicall, Gender, ReferenceType, WebhookMessage};
use crate::models::Owned;

impl ServiceHandler {
    /// Validates the AI session's ownership and returns it.
    pub(crate) async fn aicall_fetch(&self, id: Uuid) -> Result<Aicall, ServiceError> {
        let res = self
            .req
            .ai_v1_aicall_get(id)
            .await
            .map_err(|e| Self::resolve_error("ai_v1_aicall_get", "aicall", id, e))?;

        Self::ensure_active(res, "aicall", id)
    }

    /// Starts an AI voice-agent session against a call or conference.
    /// Ownership is validated through the referenced resource, and the AI
    /// profile must belong to the same customer.
    #[allow(clippy::too_many_arguments)]
    pub async fn aicall_start(
        &self,
        agent: &Agent,
        activeflow_id: Uuid,
        ai_id: Uuid,
        reference_type: ReferenceType,
        reference_id: Uuid,
        gender: Gender,
        language: &str,
    ) -> Result<WebhookMessage, ServiceError> {
        tracing::debug!(
            customer_id = %agent.customer_id,
            ai_id = %ai_id,
            reference_id = %reference_id,
            "starting an aicall"
        );

        let target_customer_id = match reference_type {
            ReferenceType::Call => self.call_fetch(reference_id).await?.customer_id(),
            ReferenceType::Conference => {
                self.conference_fetch(reference_id).await?.customer_id()
            }
            ReferenceType::None => {
                return Err(ServiceError::UnsupportedReferenceType("none".to_string()))
            }
        };

        self.authorize(
            agent,
            target_customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        let ai = self.ai_fetch(ai_id).await?;
        if ai.identity.customer_id != target_customer_id {
            tracing::info!(ai_id = %ai_id, "the ai has wrong customer id");
            return Err(ServiceError::permission_denied("the ai has wrong customer id"));
        }

        let res = self
            .req
            .ai_v1_aicall_start(
                activeflow_id,
                ai_id,
                reference_type,
                reference_id,
                gender,
                language,
            )
            .await
            .map_err(|e| ServiceError::backend("ai_v1_aicall_start", e))?;

        Ok(res.convert_webhook_message())
    }

    pub async fn aicall_get(
        &self,
        agent: &Agent,
        aicall_id: Uuid,
    ) -> Result<WebhookMessage, ServiceError> {
        let aicall = self.aicall_fetch(aicall_id).await?;

        self.authorize(
            agent,
            aicall.identity.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        Ok(aicall.convert_webhook_message())
    }

    pub async fn aicall_gets(
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

        let filters = convert_filters::<Aicall>(&self.base_filters(agent))?;
        let items = self
            .req
            .ai_v1_aicall_list(&token, size, filters)
            .await
            .map_err(|e| ServiceError::backend("ai_v1_aicall_list", e))?;

        Ok(items.iter().map(Aicall::convert_webhook_message).collect())
    }

    pub async fn aicall_delete(
        &self,
        agent: &Agent,
        aicall_id: Uuid,
    ) -> Result<WebhookMessage, ServiceError> {
        tracing::debug!(customer_id = %agent.customer_id, aicall_id = %aicall_id, "deleting aicall");

        let aicall = self.aicall_fetch(aicall_id).await?;

        self.authorize(
            agent,
            aicall.identity.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        let res = self
            .req
            .ai_v1_aicall_delete(aicall_id)
            .await
            .map_err(|e| ServiceError::backend("ai_v1_aicall_delete", e))?;

        Ok(res.convert_webhook_message())
    }
}
