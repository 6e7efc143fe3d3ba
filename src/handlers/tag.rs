use uuid::Uuid;

use crate::error::ServiceError;
use crate::filter::convert_filters;
use crate::handlers::ServiceHandler;
use crate::identity::{Agent, Permission};
use crate::models::tag::{Tag, WebhookMessage};

impl ServiceHandler {
    /// Validates the tag's ownership and returns it.
    pub(crate) async fn tag_fetch(&self, id: Uuid) -> Result<Tag, ServiceError> {
        let res = self
            .req
            .tag_v1_tag_get(id)
            .await
            .map_err(|e| Self::resolve_error("tag_v1_tag_get", "tag", id, e))?;

        Self::ensure_active(res, "tag", id)
    }

    pub async fn tag_create(
        &self,
        agent: &Agent,
        name: &str,
        detail: &str,
    ) -> Result<WebhookMessage, ServiceError> {
        tracing::debug!(customer_id = %agent.customer_id, name, "creating a new tag");

        self.authorize(
            agent,
            agent.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        let res = self
            .req
            .tag_v1_tag_create(agent.customer_id, name, detail)
            .await
            .map_err(|e| ServiceError::backend("tag_v1_tag_create", e))?;

        Ok(res.convert_webhook_message())
    }

    pub async fn tag_get(
        &self,
        agent: &Agent,
        tag_id: Uuid,
    ) -> Result<WebhookMessage, ServiceError> {
        let tag = self.tag_fetch(tag_id).await?;

        self.authorize(
            agent,
            tag.identity.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        Ok(tag.convert_webhook_message())
    }

    pub async fn tag_gets(
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

        let filters = convert_filters::<Tag>(&self.base_filters(agent))?;
        let items = self
            .req
            .tag_v1_tag_list(&token, size, filters)
            .await
            .map_err(|e| ServiceError::backend("tag_v1_tag_list", e))?;

        Ok(items.iter().map(Tag::convert_webhook_message).collect())
    }

    pub async fn tag_update(
        &self,
        agent: &Agent,
        tag_id: Uuid,
        name: &str,
        detail: &str,
    ) -> Result<WebhookMessage, ServiceError> {
        let tag = self.tag_fetch(tag_id).await?;

        self.authorize(
            agent,
            tag.identity.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        let res = self
            .req
            .tag_v1_tag_update(tag_id, name, detail)
            .await
            .map_err(|e| ServiceError::backend("tag_v1_tag_update", e))?;

        Ok(res.convert_webhook_message())
    }

    pub async fn tag_delete(
        &self,
        agent: &Agent,
        tag_id: Uuid,
    ) -> Result<WebhookMessage, ServiceError> {
        tracing::debug!(customer_id = %agent.customer_id, tag_id = %tag_id, "deleting tag");

        let tag = self.tag_fetch(tag_id).await?;

        self.authorize(
            agent,
            tag.identity.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        let res = self
            .req
            .tag_v1_tag_delete(tag_id)
            .await
            .map_err(|e| ServiceError::backend("tag_v1_tag_delete", e))?;

        Ok(res.convert_webhook_message())
    }
}
