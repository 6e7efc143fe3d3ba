use serde::{Deserialize, Serialize};
use std::ops::{BitAnd, BitOr};
use uuid::Uuid;

/// Permission bitmask carried by every acting agent.
///
/// Customer-scoped bits only grant access inside the agent's own customer;
/// project-scoped bits apply platform-wide and bypass the customer match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Permission(pub u64);

impl Permission {
    pub const NONE: Permission = Permission(0x0000);
    pub const PROJECT_SUPER_ADMIN: Permission = Permission(0x0001);
    pub const PROJECT_ADMIN: Permission = Permission(0x0002);
    pub const PROJECT_MANAGER: Permission = Permission(0x0004);
    pub const CUSTOMER_ADMIN: Permission = Permission(0x0010);
    pub const CUSTOMER_MANAGER: Permission = Permission(0x0020);
    pub const CUSTOMER_AGENT: Permission = Permission(0x0040);
    pub const ALL: Permission = Permission(0xFFFF);

    /// Bits that are not bound to a single customer.
    pub const PROJECT_SCOPED: Permission =
        Permission(Self::PROJECT_SUPER_ADMIN.0 | Self::PROJECT_ADMIN.0 | Self::PROJECT_MANAGER.0);

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn has(self, bits: Permission) -> bool {
        self.0 & bits.0 != 0
    }
}

impl BitOr for Permission {
    type Output = Permission;

    fn bitor(self, rhs: Permission) -> Permission {
        Permission(self.0 | rhs.0)
    }
}

impl BitAnd for Permission {
    type Output = Permission;

    fn bitand(self, rhs: Permission) -> Permission {
        Permission(self.0 & rhs.0)
    }
}

/// The authenticated actor issuing a request. Built by the upstream auth
/// layer once per request; immutable for the request's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub username: String,
    pub permission: Permission,
}

/// Permission gate. Pure function, no I/O.
///
/// A project super admin may act on any customer's resources. Everyone else
/// must hold at least one of the required bits and, when the match comes
/// only from customer-scoped bits, must belong to the target customer.
pub fn authorize(agent: &Agent, target_customer_id: Uuid, required: Permission) -> bool {
    if agent.permission.has(Permission::PROJECT_SUPER_ADMIN) {
        return true;
    }

    let granted = agent.permission & required;
    if granted.is_empty() {
        return false;
    }

    if granted.has(Permission::PROJECT_SCOPED) {
        return true;
    }

    agent.customer_id == target_customer_id
}
