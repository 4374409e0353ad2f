use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::role::{Capabilities, Role};

/// The acting user of a decision, as provided by the role source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Principal {
    pub user_id: Uuid,
    pub role: Role,
}

impl Principal {
    pub fn new(user_id: Uuid, role: Role) -> Self {
        Self { user_id, role }
    }

    /// Fresh identity with the given role.
    pub fn with_role(role: Role) -> Self {
        Self::new(Uuid::new_v4(), role)
    }

    pub fn capabilities(&self) -> Capabilities {
        self.role.capabilities()
    }

    pub fn is_admin(&self) -> bool {
        self.capabilities().is_admin
    }

    pub fn has_internal_access(&self) -> bool {
        self.capabilities().internal_access
    }

    pub fn is_affiliated(&self) -> bool {
        self.role.is_affiliated()
    }

    pub fn is_employee(&self) -> bool {
        self.role.is_employee()
    }

    pub fn is(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}
