use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::authz::Role;

/// A user account as the target of a decision (not the acting principal).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserRecord {
    pub id: Uuid,
    pub role: Role,
    /// `true` while the account has not been persisted yet.
    #[serde(default)]
    pub new_record: bool,
}

impl UserRecord {
    pub fn existing(id: Uuid, role: Role) -> Self {
        Self { id, role, new_record: false }
    }

    pub fn unsaved(role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            new_record: true,
        }
    }

    pub fn is_employee(&self) -> bool {
        self.role.is_employee()
    }
}
