use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::filter::{FieldKind, FilterSchema};
use crate::models::{impl_owned, Identity};

/// Live or finished transcription session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcribe {
    #[serde(flatten)]
    pub identity: Identity,

    pub activeflow_id: Uuid,
    pub on_end_flow_id: Uuid,

    pub reference_type: ReferenceType,
    pub reference_id: Uuid,

    pub status: Status,
    pub language: String,
    pub direction: Direction,

    pub tm_create: String,
    pub tm_update: String,
    pub tm_delete: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceType {
    None,
    Call,
    Conference,
    Recording,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Progressing,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    In,
    Out,
    Both,
}

impl_owned!(Transcribe);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookMessage {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub reference_type: ReferenceType,
    pub reference_id: Uuid,
    pub status: Status,
    pub language: String,
    pub direction: Direction,
    pub tm_create: String,
    pub tm_update: String,
    pub tm_delete: String,
}

impl Transcribe {
    pub fn convert_webhook_message(&self) -> WebhookMessage {
        WebhookMessage {
            id: self.identity.id,
            customer_id: self.identity.customer_id,
            reference_type: self.reference_type,
            reference_id: self.reference_id,
            status: self.status,
            language: self.language.clone(),
            direction: self.direction,
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
    Status,
}

impl FilterSchema for Transcribe {
    type Field = Field;

    fn lookup(name: &str) -> Option<(Field, FieldKind)> {
        match name {
            "customer_id" => Some((Field::CustomerId, FieldKind::Uuid)),
            "deleted" => Some((Field::Deleted, FieldKind::Bool)),
            "reference_id" => Some((Field::ReferenceId, FieldKind::Uuid)),
            "status" => Some((Field::Status, FieldKind::Text)),
            _ => None,
        }
    }
}
