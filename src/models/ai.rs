use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::filter::{FieldKind, FilterSchema};
use crate::models::{impl_owned, Identity};

/// AI voice-agent profile owned by the AI backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ai {
    #[serde(flatten)]
    pub identity: Identity,

    pub name: String,
    pub detail: String,

    pub engine_type: EngineType,
    pub engine_model: String,
    /// Credential for the engine vendor. Never leaves the platform.
    pub engine_key: String,
    pub init_prompt: String,

    pub tm_create: String,
    pub tm_update: String,
    pub tm_delete: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineType {
    None,
    Openai,
    Dialogflow,
}

impl_owned!(Ai);

/// External-safe projection. The engine credential is redacted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookMessage {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub name: String,
    pub detail: String,
    pub engine_type: EngineType,
    pub engine_model: String,
    pub init_prompt: String,
    pub tm_create: String,
    pub tm_update: String,
    pub tm_delete: String,
}

impl Ai {
    pub fn convert_webhook_message(&self) -> WebhookMessage {
        WebhookMessage {
            id: self.identity.id,
            customer_id: self.identity.customer_id,
            name: self.name.clone(),
            detail: self.detail.clone(),
            engine_type: self.engine_type,
            engine_model: self.engine_model.clone(),
            init_prompt: self.init_prompt.clone(),
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
    EngineType,
}

impl FilterSchema for Ai {
    type Field = Field;

    fn lookup(name: &str) -> Option<(Field, FieldKind)> {
        match name {
            "customer_id" => Some((Field::CustomerId, FieldKind::Uuid)),
            "deleted" => Some((Field::Deleted, FieldKind::Bool)),
            "engine_type" => Some((Field::EngineType, FieldKind::Text)),
            _ => None,
        }
    }
}
