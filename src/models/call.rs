use serde::{Deserialize, Serialize};

use crate::models::{impl_owned, Identity};

/// Ownership record for a call. The facade only resolves calls to validate
/// composite references (AI sessions, summaries, transcriptions); call
/// lifecycle operations live in the call backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    #[serde(flatten)]
    pub identity: Identity,

    pub status: Status,

    pub tm_create: String,
    pub tm_update: String,
    pub tm_delete: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Dialing,
    Ringing,
    Progressing,
    Terminating,
    Hangup,
}

impl_owned!(Call);
