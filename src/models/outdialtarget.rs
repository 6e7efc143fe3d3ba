use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::address::Address;
use crate::models::TIMESTAMP_ACTIVE;

/// Single destination entry inside an outdial pool. Carries no customer id
/// of its own; ownership is resolved through the parent outdial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutdialTarget {
    pub id: Uuid,
    pub outdial_id: Uuid,

    pub name: String,
    pub detail: String,
    pub data: String,

    pub status: Status,
    pub destinations: Vec<Address>,
    pub try_count: i32,

    pub tm_create: String,
    pub tm_update: String,
    pub tm_delete: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Idle,
    Progressing,
    Done,
}

impl OutdialTarget {
    pub fn is_deleted(&self) -> bool {
        self.tm_delete.as_str() < TIMESTAMP_ACTIVE
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookMessage {
    pub id: Uuid,
    pub outdial_id: Uuid,
    pub name: String,
    pub detail: String,
    pub data: String,
    pub status: Status,
    pub destinations: Vec<Address>,
    pub try_count: i32,
    pub tm_create: String,
    pub tm_update: String,
    pub tm_delete: String,
}

impl OutdialTarget {
    pub fn convert_webhook_message(&self) -> WebhookMessage {
        WebhookMessage {
            id: self.id,
            outdial_id: self.outdial_id,
            name: self.name.clone(),
            detail: self.detail.clone(),
            data: self.data.clone(),
            status: self.status,
            destinations: self.destinations.clone(),
            try_count: self.try_count,
            tm_create: self.tm_create.clone(),
            tm_update: self.tm_update.clone(),
            tm_delete: self.tm_delete.clone(),
        }
    }
}
