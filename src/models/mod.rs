// Domain model views referenced by the facade.
//
// These types mirror the objects owned by the downstream managers; this
// layer only reads `id`, `customer_id`, and the soft-delete marker for
// ownership checks, and projects the rest into webhook shapes.

pub mod address;
pub mod ai;
pub mod ai_message;
pub mod aicall;
pub mod call;
pub mod conference;
pub mod file;
pub mod outdial;
pub mod outdialtarget;
pub mod recording;
pub mod summary;
pub mod tag;
pub mod transcribe;
pub mod transcript;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Timestamp sentinel meaning "still active". A `tm_delete` strictly below
/// this value marks the record as logically removed even though the backend
/// still stores it.
pub const TIMESTAMP_ACTIVE: &str = "9999-01-01 00:00:00.000000";

/// Shared identity block embedded in every owned domain object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Identity {
    pub id: Uuid,
    pub customer_id: Uuid,
}

/// Ownership view of a fetched domain object: the only two facts the facade
/// needs before authorizing an operation.
pub trait Owned {
    fn customer_id(&self) -> Uuid;
    fn is_deleted(&self) -> bool;
}

macro_rules! impl_owned {
    ($t:ty) => {
        impl crate::models::Owned for $t {
            fn customer_id(&self) -> uuid::Uuid {
                self.identity.customer_id
            }

            fn is_deleted(&self) -> bool {
                self.tm_delete.as_str() < crate::models::TIMESTAMP_ACTIVE
            }
        }
    };
}

pub(crate) use impl_owned;
