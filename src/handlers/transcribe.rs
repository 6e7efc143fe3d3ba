use uuid::Uuid;

use crate::error::ServiceError;
use crate::filter::convert_filters;
use crate::handlers::ServiceHandler;
use crate::identity::{Agent, Permission};
use crate::models::transcribe::{Direction, ReferenceType, Transcribe, WebhookMessage};
use crate::models::Owned;

impl ServiceHandler {
    /// Validates the transcribe's ownership and returns it.
    pub(crate) async fn transcribe_fetch(&self, id: Uuid) -> Result<Transcribe, ServiceError> {
        let res = self
            .req
            .transcribe_v1_transcribe_get(id)
            .await
            .map_err(|e| Self::resolve_error("transcribe_v1_transcribe_get", "transcribe", id, e))?;

        Self::ensure_active(res, "transcribe", id)
    }

    /// Starts a transcription against a live call or conference. Other
    /// reference types cannot be transcribed and fail before any RPC is
    /// issued.
    #[allow(clippy::too_many_arguments)]
    pub async fn transcribe_start(
        &self,
        agent: &Agent,
        activeflow_id: Uuid,
        on_end_flow_id: Uuid,
        reference_type: ReferenceType,
        reference_id: Uuid,
        language: &str,
        direction: Direction,
    ) -> Result<WebhookMessage, ServiceError> {
        tracing::debug!(
            customer_id = %agent.customer_id,
            reference_id = %reference_id,
            language,
            "starting a transcribe"
        );

        let target_customer_id = match reference_type {
            ReferenceType::Call => self.call_fetch(reference_id).await?.customer_id(),
            ReferenceType::Conference => {
                self.conference_fetch(reference_id).await?.customer_id()
            }
            ReferenceType::Recording => {
                return Err(ServiceError::UnsupportedReferenceType(
                    "recording".to_string(),
                ))
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

        let res = self
            .req
            .transcribe_v1_transcribe_start(
                agent.customer_id,
                activeflow_id,
                on_end_flow_id,
                reference_type,
                reference_id,
                language,
                direction,
            )
            .await
            .map_err(|e| ServiceError::backend("transcribe_v1_transcribe_start", e))?;

        Ok(res.convert_webhook_message())
    }

    pub async fn transcribe_get(
        &self,
        agent: &Agent,
        transcribe_id: Uuid,
    ) -> Result<WebhookMessage, ServiceError> {
        let transcribe = self.transcribe_fetch(transcribe_id).await?;

        self.authorize(
            agent,
            transcribe.identity.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        Ok(transcribe.convert_webhook_message())
    }

    pub async fn transcribe_gets(
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

        let filters = convert_filters::<Transcribe>(&self.base_filters(agent))?;
        let items = self
            .req
            .transcribe_v1_transcribe_list(&token, size, filters)
            .await
            .map_err(|e| ServiceError::backend("transcribe_v1_transcribe_list", e))?;

        Ok(items
            .iter()
            .map(Transcribe::convert_webhook_message)
            .collect())
    }

    pub async fn transcribe_stop(
        &self,
        agent: &Agent,
        transcribe_id: Uuid,
    ) -> Result<WebhookMessage, ServiceError> {
        let transcribe = self.transcribe_fetch(transcribe_id).await?;

        self.authorize(
            agent,
            transcribe.identity.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        let res = self
            .req
            .transcribe_v1_transcribe_stop(transcribe_id)
            .await
            .map_err(|e| ServiceError::backend("transcribe_v1_transcribe_stop", e))?;

        Ok(res.convert_webhook_message())
    }

    pub async fn transcribe_delete(
        &self,
        agent: &Agent,
        transcribe_id: Uuid,
    ) -> Result<WebhookMessage, ServiceError> {
        tracing::debug!(
            customer_id = %agent.customer_id,
            transcribe_id = %transcribe_id,
            "deleting transcribe"
        );

        let transcribe = self.transcribe_fetch(transcribe_id).await?;

        self.authorize(
            agent,
            transcribe.identity.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER,
        )?;

        let res = self
            .req
            .transcribe_v1_transcribe_delete(transcribe_id)
            .await
            .map_err(|e| ServiceError::backend("transcribe_v1_transcribe_delete", e))?;

        Ok(res.convert_webhook_message())
    }
}
