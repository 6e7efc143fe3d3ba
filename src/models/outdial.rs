use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::filter::{FieldKind, FilterSchema};
use crate::models::{impl_owned, Identity};

/// Outbound-dialing target pool attached to a campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outdial {
    #[serde(flatten)]
    pub identity: Identity,

    pub campaign_id: Uuid,

    pub name: String,
    pub detail: String,
    pub data: String,

    pub tm_create: String,
    pub tm_update: String,
    pub tm_delete: String,
}

impl_owned!(Outdial);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookMessage {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub campaign_id: Uuid,
    pub name: String,
    pub detail: String,
    pub data: String,
    pub tm_create: String,
    pub tm_update: String,
    pub tm_delete: String,
}

impl Outdial {
    pub fn convert_webhook_message(&self) -> WebhookMessage {
        WebhookMessage {
            id: self.identity.id,
            customer_id: self.identity.customer_id,
            campaign_id: self.campaign_id,
            name: self.name.clone(),
            detail: self.detail.clone(),
            data: self.data.clone(),
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
    CampaignId,
}

impl FilterSchema for Outdial {
    type Field = Field;

    fn lookup(name: &str) -> Option<(Field, FieldKind)> {
        match name {
            "customer_id" => Some((Field::CustomerId, FieldKind::Uuid)),
            "deleted" => Some((Field::Deleted, FieldKind::Bool)),
            "campaign_id" => Some((Field::CampaignId, FieldKind::Uuid)),
            _ => None,
        }
    }
}
