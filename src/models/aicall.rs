use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::filter::{FieldKind, FilterSchema};
use crate::models::{impl_owned, Identity};

/// A running (or finished) AI voice-agent session attached to a call or
/// conference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aicall {
    #[serde(flatten)]
    pub identity: Identity,

    pub ai_id: Uuid,
    pub activeflow_id: Uuid,

    pub reference_type: ReferenceType,
    pub reference_id: Uuid,

    pub status: Status,
    pub gender: Gender,
    pub language: String,

    /// Media pipeline session handle. Internal only.
    pub pipeline_id: Uuid,

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
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Initiating,
    Progressing,
    Pausing,
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Neutral,
}

impl_owned!(Aicall);

/// External-safe projection. The pipeline handle stays internal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookMessage {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub ai_id: Uuid,
    pub activeflow_id: Uuid,
    pub reference_type: ReferenceType,
    pub reference_id: Uuid,
    pub status: Status,
    pub gender: Gender,
    pub language: String,
    pub tm_create: String,
    pub tm_update: String,
    pub tm_delete: String,
}

impl Aicall {
    pub fn convert_webhook_message(&self) -> WebhookMessage {
        WebhookMessage {
            id: self.identity.id,
            customer_id: self.identity.customer_id,
            ai_id: self.ai_id,
            activeflow_id: self.activeflow_id,
            reference_type: self.reference_type,
            reference_id: self.reference_id,
            status: self.status,
            gender: self.gender,
            language: self.language.clone(),
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
    AiId,
    ReferenceId,
}

impl FilterSchema for Aicall {
    type Field = Field;

    fn lookup(name: &str) -> Option<(Field, FieldKind)> {
        match name {
            "customer_id" => Some((Field::CustomerId, FieldKind::Uuid)),
            "deleted" => Some((Field::Deleted, FieldKind::Bool)),
            "ai_id" => Some((Field::AiId, FieldKind::Uuid)),
            "reference_id" => Some((Field::ReferenceId, FieldKind::Uuid)),
            _ => None,
        }
    }
}
