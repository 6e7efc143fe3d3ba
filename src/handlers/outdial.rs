use uuid::Uuid;

use crate::error::ServiceError;
use crate::filter::convert_filters;
use crate::handlers::ServiceHandler;
use crate::identity::{Agent, Permission};
use crate::models::outdial::{Outdial, WebhookMessage};

impl ServiceHandler {
    /// Validates the outdial's ownership and returns it.
    pub(crate) async fn outdial_fetch(&self, id: Uuid) -> Result<Outdial, ServiceError> {
        let res = self
            .req
            .outdial_v1_outdial_get(id)
            .await
            .map_err(|e| Self::resolve_error("outdial_v1_outdial_get", "outdial", id, e))?;

        Self::ensure_active(res, "outdial", id)
    }

    pub async fn outdial_create(
        &self,
        agent: &Agent,
        campaign_id: Uuid,
        name: &str,
        detail: &str,
        data: &str,
    ) -> Result<WebhookMessage, ServiceError> {
        tracing::debug!(
            customer_id = %agent.customer_id,
            campaign_id = %campaign_id,
            name,
            "creating a new outdial"
        );

        self.authorize(
            agent,
            agent.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        let res = self
            .req
            .outdial_v1_outdial_create(agent.customer_id, campaign_id, name, detail, data)
            .await
            .map_err(|e| ServiceError::backend("outdial_v1_outdial_create", e))?;

        Ok(res.convert_webhook_message())
    }

    pub async fn outdial_get(
        &self,
        agent: &Agent,
        outdial_id: Uuid,
    ) -> Result<WebhookMessage, ServiceError> {
        let outdial = self.outdial_fetch(outdial_id).await?;

        self.authorize(
            agent,
            outdial.identity.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        Ok(outdial.convert_webhook_message())
    }

    pub async fn outdial_gets(
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

        let filters = convert_filters::<Outdial>(&self.base_filters(agent))?;
        let items = self
            .req
            .outdial_v1_outdial_list(&token, size, filters)
            .await
            .map_err(|e| ServiceError::backend("outdial_v1_outdial_list", e))?;

        Ok(items.iter().map(Outdial::convert_webhook_message).collect())
    }

    pub async fn outdial_delete(
        &self,
        agent: &Agent,
        outdial_id: Uuid,
    ) -> Result<WebhookMessage, ServiceError> {
        tracing::debug!(customer_id = %agent.customer_id, outdial_id = %outdial_id, "deleting outdial");

        let outdial = self.outdial_fetch(outdial_id).await?;

        self.authorize(
            agent,
            outdial.identity.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        let res = self
            .req
            .outdial_v1_outdial_delete(outdial_id)
            .await
            .map_err(|e| ServiceError::backend("outdial_v1_outdial_delete", e))?;

        Ok(res.convert_webhook_message())
    }

    pub async fn outdial_update_basic_info(
        &self,
        agent: &Agent,
        outdial_id: Uuid,
        name: &str,
        detail: &str,
    ) -> Result<WebhookMessage, ServiceError> {
        let outdial = self.outdial_fetch(outdial_id).await?;

        self.authorize(
            agent,
            outdial.identity.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        let res = self
            .req
            .outdial_v1_outdial_update_basic_info(outdial_id, name, detail)
            .await
            .map_err(|e| ServiceError::backend("outdial_v1_outdial_update_basic_info", e))?;

        Ok(res.convert_webhook_message())
    }

    pub async fn outdial_update_campaign_id(
        &self,
        agent: &Agent,
        outdial_id: Uuid,
        campaign_id: Uuid,
    ) -> Result<WebhookMessage, ServiceError> {
        let outdial = self.outdial_fetch(outdial_id).await?;

        self.authorize(
            agent,
            outdial.identity.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        let res = self
            .req
            .outdial_v1_outdial_update_campaign_id(outdial_id, campaign_id)
            .await
            .map_err(|e| ServiceError::backend("outdial_v1_outdial_update_campaign_id", e))?;

        Ok(res.convert_webhook_message())
    }

    pub async fn outdial_update_data(
        &self,
        agent: &Agent,
        outdial_id: Uuid,
        data: &str,
    ) -> Result<WebhookMessage, ServiceError> {
        let outdial = self.outdial_fetch(outdial_id).await?;

        self.authorize(
            agent,
            outdial.identity.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        let res = self
            .req
            .outdial_v1_outdial_update_data(outdial_id, data)
            .await
            .map_err(|e| ServiceError::backend("outdial_v1_outdial_update_data", e))?;

        Ok(res.convert_webhook_message())
    }
}
