use serde::{Deserialize, Serialize};

/// Endpoint address shared across call, messaging, and dialing resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "type")]
    pub address_type: Type,
    pub target: String,
    pub target_name: String,
    pub name: String,
    pub detail: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Type {
    Tel,
    Sip,
    Extension,
}
