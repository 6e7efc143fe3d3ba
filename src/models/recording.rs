use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::filter::{FieldKind, FilterSchema};
use crate::models::{impl_owned, Identity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    #[serde(flatten)]
    pub identity: Identity,

    pub reference_type: ReferenceType,
    pub reference_id: Uuid,

    pub status: Status,
    pub format: Format,

    /// Object-store filenames backing the recording. Internal only.
    pub filenames: Vec<String>,

    pub tm_start: String,
    pub tm_end: String,
    pub tm_create: String,
    pub tm_update: String,
    pub tm_delete: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceType {
    Call,
    Conference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Initiating,
    Recording,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    Wav,
    Mp3,
}

impl_owned!(Recording);

/// External-safe projection. Object-store paths stay internal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookMessage {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub reference_type: ReferenceType,
    pub reference_id: Uuid,
    pub status: Status,
    pub format: Format,
    pub tm_start: String,
    pub tm_end: String,
    pub tm_create: String,
    pub tm_update: String,
    pub tm_delete: String,
}

impl Recording {
    pub fn convert_webhook_message(&self) -> WebhookMessage {
        WebhookMessage {
            id: self.identity.id,
            customer_id: self.identity.customer_id,
            reference_type: self.reference_type,
            reference_id: self.reference_id,
            status: self.status,
            format: self.format,
            tm_start: self.tm_start.clone(),
            tm_end: self.tm_end.clone(),
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

impl FilterSchema for Recording {
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
