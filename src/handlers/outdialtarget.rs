use uuid::Uuid;

use crate::error::ServiceError;
use crate::handlers::ServiceHandler;
use crate::identity::{Agent, Permission};
use crate::models::address::Address;
use crate::models::outdialtarget::{OutdialTarget, WebhookMessage};

impl ServiceHandler {
    /// Fetches an outdial target. Targets carry no customer id of their
    /// own; callers must authorize against the parent outdial.
    pub(crate) async fn outdialtarget_fetch(&self, id: Uuid) -> Result<OutdialTarget, ServiceError> {
        let res = self
            .req
            .outdial_v1_outdialtarget_get(id)
            .await
            .map_err(|e| {
                Self::resolve_error("outdial_v1_outdialtarget_get", "outdialtarget", id, e)
            })?;

        if res.is_deleted() {
            tracing::debug!(outdialtarget_id = %id, "outdialtarget is soft-deleted");
            return Err(ServiceError::not_found("outdialtarget", id));
        }

        Ok(res)
    }

    pub async fn outdialtarget_create(
        &self,
        agent: &Agent,
        outdial_id: Uuid,
        name: &str,
        detail: &str,
        data: &str,
        destinations: &[Address],
    ) -> Result<WebhookMessage, ServiceError> {
        tracing::debug!(
            customer_id = %agent.customer_id,
            outdial_id = %outdial_id,
            name,
            "creating a new outdialtarget"
        );

        let outdial = self.outdial_fetch(outdial_id).await?;

        self.authorize(
            agent,
            outdial.identity.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        let res = self
            .req
            .outdial_v1_outdialtarget_create(outdial_id, name, detail, data, destinations)
            .await
            .map_err(|e| ServiceError::backend("outdial_v1_outdialtarget_create", e))?;

        Ok(res.convert_webhook_message())
    }

    pub async fn outdialtarget_get(
        &self,
        agent: &Agent,
        outdial_id: Uuid,
        outdialtarget_id: Uuid,
    ) -> Result<WebhookMessage, ServiceError> {
        let outdial = self.outdial_fetch(outdial_id).await?;

        self.authorize(
            agent,
            outdial.identity.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        let target = self.outdialtarget_fetch(outdialtarget_id).await?;
        if target.outdial_id != outdial_id {
            return Err(ServiceError::not_found("outdialtarget", outdialtarget_id));
        }

        Ok(target.convert_webhook_message())
    }

    pub async fn outdialtarget_gets(
        &self,
        agent: &Agent,
        outdial_id: Uuid,
        size: u64,
        token: &str,
    ) -> Result<Vec<WebhookMessage>, ServiceError> {
        let token = self.page_token(token);

        let outdial = self.outdial_fetch(outdial_id).await?;

        self.authorize(
            agent,
            outdial.identity.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        let items = self
            .req
            .outdial_v1_outdialtarget_list_by_outdial_id(outdial_id, &token, size)
            .await
            .map_err(|e| ServiceError::backend("outdial_v1_outdialtarget_list_by_outdial_id", e))?;

        Ok(items
            .iter()
            .map(OutdialTarget::convert_webhook_message)
            .collect())
    }

    pub async fn outdialtarget_delete(
        &self,
        agent: &Agent,
        outdial_id: Uuid,
        outdialtarget_id: Uuid,
    ) -> Result<WebhookMessage, ServiceError> {
        tracing::debug!(
            customer_id = %agent.customer_id,
            outdialtarget_id = %outdialtarget_id,
            "deleting outdialtarget"
        );

        let outdial = self.outdial_fetch(outdial_id).await?;

        self.authorize(
            agent,
            outdial.identity.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        let target = self.outdialtarget_fetch(outdialtarget_id).await?;
        if target.outdial_id != outdial_id {
            return Err(ServiceError::not_found("outdialtarget", outdialtarget_id));
        }

        let res = self
            .req
            .outdial_v1_outdialtarget_delete(outdialtarget_id)
            .await
            .map_err(|e| ServiceError::backend("outdial_v1_outdialtarget_delete", e))?;

        Ok(res.convert_webhook_message())
    }
}
