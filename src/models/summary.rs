use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::filter::{FieldKind, FilterSchema};
use crate::models::{impl_owned, Identity};

/// AI-generated summary of a call, conference, recording, or transcription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(flatten)]
    pub identity: Identity,

    pub activeflow_id: Uuid,
    pub on_end_flow_id: Uuid,

    pub reference_type: ReferenceType,
    pub reference_id: Uuid,

    pub status: Status,
    pub language: String,
    pub content: String,

    pub tm_create: String,
    pub tm_update: String,
    pub tm_delete: String,
}

/// What a summary is generated from. Ownership of the summary request is
/// validated against the referenced resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceType {
    None,
    Call,
    Conference,
    Recording,
    Transcribe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Progressing,
    Done,
}

impl_owned!(Summary);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookMessage {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub reference_type: ReferenceType,
    pub reference_id: Uuid,
    pub status: Status,
    pub language: String,
    pub content: String,
    pub tm_create: String,
    pub tm_update: String,
    pub tm_delete: String,
}

impl Summary {
    pub fn convert_webhook_message(&self) -> WebhookMessage {
        WebhookMessage {
            id: self.identity.id,
            customer_id: self.identity.customer_id,
            reference_type: self.reference_type,
            reference_id: self.reference_id,
            status: self.status,
            language: self.language.clone(),
            content: self.content.clone(),
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
    ReferenceId,
}

impl FilterSchema for Summary {
    type Field = Field;

    fn lookup(name: &str) -> Option<(Field, FieldKind)> {
        match name {
            "customer_id" => Some((Field::CustomerId, FieldKind::Uuid)),
            "deleted" => Some((Field::Deleted, FieldKind::Bool)),
            "reference_id" => Some((Field::ReferenceId, FieldKind::Uuid)),
            _ => None,
        }
    }
}
