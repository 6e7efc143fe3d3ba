use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::filter::{FieldKind, FilterSchema};
use crate::models::{impl_owned, Identity};

/// Single exchange within an AI voice-agent session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiMessage {
    #[serde(flatten)]
    pub identity: Identity,

    pub aicall_id: Uuid,
    pub role: Role,
    pub content: String,

    pub tm_create: String,
    pub tm_update: String,
    pub tm_delete: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl_owned!(AiMessage);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookMessage {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub aicall_id: Uuid,
    pub role: Role,
    pub content: String,
    pub tm_create: String,
    pub tm_update: String,
    pub tm_delete: String,
}

impl AiMessage {
    pub fn convert_webhook_message(&self) -> WebhookMessage {
        WebhookMessage {
            id: self.identity.id,
            customer_id: self.identity.customer_id,
            aicall_id: self.aicall_id,
            role: self.role,
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
    AicallId,
    Role,
}

impl FilterSchema for AiMessage {
    type Field = Field;

    fn lookup(name: &str) -> Option<(Field, FieldKind)> {
        match name {
            "customer_id" => Some((Field::CustomerId, FieldKind::Uuid)),
            "deleted" => Some((Field::Deleted, FieldKind::Bool)),
            "aicall_id" => Some((Field::AicallId, FieldKind::Uuid)),
            "role" => Some((Field::Role, FieldKind::Text)),
            _ => None,
        }
    }
}
