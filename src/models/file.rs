use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::filter::{FieldKind, FilterSchema};
use crate::models::{impl_owned, Identity};

/// Customer-owned file stored by the storage backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct File {
    #[serde(flatten)]
    pub identity: Identity,

    pub owner_id: Uuid,

    pub name: String,
    pub detail: String,
    pub filename: String,
    pub filesize: u64,

    /// Object-store location. Internal only.
    pub bucket_name: String,
    pub filepath: String,

    pub download_uri: String,

    pub tm_create: String,
    pub tm_update: String,
    pub tm_delete: String,
}

impl_owned!(File);

/// External-safe projection. Bucket coordinates stay internal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookMessage {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub detail: String,
    pub filename: String,
    pub filesize: u64,
    pub download_uri: String,
    pub tm_create: String,
    pub tm_update: String,
    pub tm_delete: String,
}

impl File {
    pub fn convert_webhook_message(&self) -> WebhookMessage {
        WebhookMessage {
            id: self.identity.id,
            customer_id: self.identity.customer_id,
            owner_id: self.owner_id,
            name: self.name.clone(),
            detail: self.detail.clone(),
            filename: self.filename.clone(),
            filesize: self.filesize,
            download_uri: self.download_uri.clone(),
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
    OwnerId,
}

impl FilterSchema for File {
    type Field = Field;

    fn lookup(name: &str) -> Option<(Field, FieldKind)> {
        match name {
            "customer_id" => Some((Field::CustomerId, FieldKind::Uuid)),
            "deleted" => Some((Field::Deleted, FieldKind::Bool)),
            "owner_id" => Some((Field::OwnerId, FieldKind::Uuid)),
            _ => None,
        }
    }
}
