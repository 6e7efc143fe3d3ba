use uuid::Uuid;

use crate::config;
use crate::error::ServiceError;
use crate::filter::convert_filters;
use crate::handlers::ServiceHandler;
use crate::identity::{Agent, Permission};
use crate::models::file::{File, WebhookMessage};

impl ServiceHandler {
    /// Validates the file's ownership and returns it.
    pub(crate) async fn file_fetch(&self, id: Uuid) -> Result<File, ServiceError> {
        let res = self
            .req
            .storage_v1_file_get(id)
            .await
            .map_err(|e| Self::resolve_error("storage_v1_file_get", "file", id, e))?;

        Self::ensure_active(res, "file", id)
    }

    /// Uploads a file owned by the acting agent.
    pub async fn file_create(
        &self,
        agent: &Agent,
        name: &str,
        detail: &str,
        filename: &str,
        data: &[u8],
    ) -> Result<WebhookMessage, ServiceError> {
        tracing::debug!(
            customer_id = %agent.customer_id,
            filename,
            "creating a new file"
        );

        self.authorize(
            agent,
            agent.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        let res = self
            .req
            .storage_v1_file_create(agent.customer_id, agent.id, name, detail, filename, data)
            .await
            .map_err(|e| ServiceError::backend("storage_v1_file_create", e))?;

        Ok(res.convert_webhook_message())
    }

    pub async fn file_get(
        &self,
        agent: &Agent,
        file_id: Uuid,
    ) -> Result<WebhookMessage, ServiceError> {
        let file = self.file_fetch(file_id).await?;

        self.authorize(
            agent,
            file.identity.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        Ok(file.convert_webhook_message())
    }

    pub async fn file_gets(
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

        let filters = convert_filters::<File>(&self.base_filters(agent))?;
        let items = self
            .req
            .storage_v1_file_list(&token, size, filters)
            .await
            .map_err(|e| ServiceError::backend("storage_v1_file_list", e))?;

        Ok(items.iter().map(File::convert_webhook_message).collect())
    }

    /// Deletes a file. Object-store removal can be slow, so this dispatch
    /// carries a longer per-call timeout than the default.
    pub async fn file_delete(
        &self,
        agent: &Agent,
        file_id: Uuid,
    ) -> Result<WebhookMessage, ServiceError> {
        tracing::debug!(customer_id = %agent.customer_id, file_id = %file_id, "deleting file");

        let file = self.file_fetch(file_id).await?;

        self.authorize(
            agent,
            file.identity.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        let res = self
            .req
            .storage_v1_file_delete(file_id, config::config().dispatch.file_delete_timeout_ms)
            .await
            .map_err(|e| ServiceError::backend("storage_v1_file_delete", e))?;

        Ok(res.convert_webhook_message())
    }
}
