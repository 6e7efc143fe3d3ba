use std::collections::HashMap;
use uuid::Uuid;

use crate::error::ServiceError;
use crate::filter::convert_filters;
use crate::handlers::ServiceHandler;
use crate::identity::{Agent, Permission};
use crate::models::transcript::{Transcript, WebhookMessage};

impl ServiceHandler {
    /// Lists the transcripts of one transcription session. Ownership is
    /// validated through the parent transcribe; transcripts carry no
    /// standalone facade operations.
    pub async fn transcript_gets(
        &self,
        agent: &Agent,
        transcribe_id: Uuid,
        size: u64,
        token: &str,
    ) -> Result<Vec<WebhookMessage>, ServiceError> {
        let token = self.page_token(token);

        let transcribe = self.transcribe_fetch(transcribe_id).await?;

        self.authorize(
            agent,
            transcribe.identity.customer_id,
            Permission::CUSTOMER_ADMIN | Permission::CUSTOMER_MANAGER | Permission::CUSTOMER_AGENT,
        )?;

        let raw = HashMap::from([
            ("transcribe_id".to_string(), transcribe_id.to_string()),
            ("deleted".to_string(), "false".to_string()),
        ]);
        let filters = convert_filters::<Transcript>(&raw)?;

        let items = self
            .req
            .transcribe_v1_transcript_list(&token, size, filters)
            .await
            .map_err(|e| ServiceError::backend("transcribe_v1_transcript_list", e))?;

        Ok(items
            .iter()
            .map(Transcript::convert_webhook_message)
            .collect())
    }
}
