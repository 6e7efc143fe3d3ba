use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::filter::{FieldKind, FilterSchema};
use crate::models::{impl_owned, Identity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conference {
    #[serde(flatten)]
    pub identity: Identity,

    #[serde(rename = "type")]
    pub conference_type: Type,
    pub status: Status,

    pub name: String,
    pub detail: String,
    pub data: HashMap<String, serde_json::Value>,
    pub timeout: i32,

    pub pre_flow_id: Uuid,
    pub post_flow_id: Uuid,

    /// Media bridge backing the conference. Internal only.
    pub confbridge_id: Uuid,

    pub recording_id: Uuid,
    pub recording_ids: Vec<Uuid>,
    pub transcribe_id: Uuid,

    pub tm_create: String,
    pub tm_update: String,
    pub tm_delete: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Type {
    Conference,
    Connect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Starting,
    Progressing,
    Terminating,
    Terminated,
}

impl_owned!(Conference);

/// External-safe projection. The confbridge handle stays internal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookMessage {
    pub id: Uuid,
    pub customer_id: Uuid,
    #[serde(rename = "type")]
    pub conference_type: Type,
    pub status: Status,
    pub name: String,
    pub detail: String,
    pub data: HashMap<String, serde_json::Value>,
    pub timeout: i32,
    pub pre_flow_id: Uuid,
    pub post_flow_id: Uuid,
    pub recording_id: Uuid,
    pub recording_ids: Vec<Uuid>,
    pub transcribe_id: Uuid,
    pub tm_create: String,
    pub tm_update: String,
    pub tm_delete: String,
}

impl Conference {
    pub fn convert_webhook_message(&self) -> WebhookMessage {
        WebhookMessage {
            id: self.identity.id,
            customer_id: self.identity.customer_id,
            conference_type: self.conference_type,
            status: self.status,
            name: self.name.clone(),
            detail: self.detail.clone(),
            data: self.data.clone(),
            timeout: self.timeout,
            pre_flow_id: self.pre_flow_id,
            post_flow_id: self.post_flow_id,
            recording_id: self.recording_id,
            recording_ids: self.recording_ids.clone(),
            transcribe_id: self.transcribe_id,
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
    Type,
    Status,
}

impl FilterSchema for Conference {
    type Field = Field;

    fn lookup(name: &str) -> Option<(Field, FieldKind)> {
        match name {
            "customer_id" => Some((Field::CustomerId, FieldKind::Uuid)),
            "deleted" => Some((Field::Deleted, FieldKind::Bool)),
            "type" => Some((Field::Type, FieldKind::Text)),
            "status" => Some((Field::Status, FieldKind::Text)),
            _ => None,
        }
    }
}
