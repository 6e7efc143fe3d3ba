use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::filter::{FieldKind, FilterSchema};
use crate::models::{impl_owned, Identity};

/// One transcribed utterance within a transcription session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    #[serde(flatten)]
    pub identity: Identity,

    pub transcribe_id: Uuid,
    pub direction: super::transcribe::Direction,
    pub message: String,
    /// Offset of the utterance within the session.
    pub tm_transcript: String,

    pub tm_create: String,
    pub tm_update: String,
    pub tm_delete: String,
}

impl_owned!(Transcript);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookMessage {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub transcribe_id: Uuid,
    pub direction: super::transcribe::Direction,
    pub message: String,
    pub tm_transcript: String,
    pub tm_create: String,
    pub tm_update: String,
    pub tm_delete: String,
}

impl Transcript {
    pub fn convert_webhook_message(&self) -> WebhookMessage {
        WebhookMessage {
            id: self.identity.id,
            customer_id: self.identity.customer_id,
            transcribe_id: self.transcribe_id,
            direction: self.direction,
            message: self.message.clone(),
            tm_transcript: self.tm_transcript.clone(),
            tm_create: self.tm_create.clone(),
            tm_update: self.tm_update.clone(),
            tm_delete: self.tm_delete.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CustomerId,
    Deleted,
    TranscribeId,
}

impl FilterSchema for Transcript {
    type Field = Field;

    fn lookup(name: &str) -> Option<(Field, FieldKind)> {
        match name {
            "customer_id" => Some((Field::CustomerId, FieldKind::Uuid)),
            "deleted" => Some((Field::Deleted, FieldKind::Bool)),
            "transcribe_id" => Some((Field::TranscribeId, FieldKind::Uuid)),
            _ => None,
        }
    }
}
