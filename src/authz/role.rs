use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Roles ordered from most to least privileged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Administrator,
    Reviewer,
    Worker,
    Reporter,
    Unaffiliated,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Administrator,
        Role::Reviewer,
        Role::Worker,
        Role::Reporter,
        Role::Unaffiliated,
    ];

    pub const fn capabilities(self) -> Capabilities {
        match self {
            Role::Administrator => Capabilities {
                is_admin: true,
                internal_access: true,
                privileged_write: true,
                self_only_write: false,
            },
            Role::Reviewer => Capabilities {
                is_admin: false,
                internal_access: true,
                privileged_write: true,
                self_only_write: false,
            },
            Role::Worker => Capabilities {
                is_admin: false,
                internal_access: true,
                privileged_write: false,
                self_only_write: true,
            },
            Role::Reporter => Capabilities {
                is_admin: false,
                internal_access: false,
                privileged_write: false,
                self_only_write: true,
            },
            Role::Unaffiliated => Capabilities::NONE,
        }
    }

    /// Unaffiliated users sit permanently outside the resource hierarchy.
    pub fn is_affiliated(self) -> bool {
        !matches!(self, Role::Unaffiliated)
    }

    pub fn is_employee(self) -> bool {
        self.is_affiliated()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => "administrator",
            Role::Reviewer => "reviewer",
            Role::Worker => "worker",
            Role::Reporter => "reporter",
            Role::Unaffiliated => "unaffiliated",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Capability bits derived once per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// Bypasses destroy protection and the historical visibility gate.
    pub is_admin: bool,
    /// May reach resources flagged `internal`.
    pub internal_access: bool,
    /// May mutate resources owned by someone else.
    pub privileged_write: bool,
    /// May mutate only resources it owns.
    pub self_only_write: bool,
}

impl Capabilities {
    pub const NONE: Capabilities = Capabilities {
        is_admin: false,
        internal_access: false,
        privileged_write: false,
        self_only_write: false,
    };

    /// Write access to a resource, given whether the principal owns it.
    pub fn can_write(&self, owned: bool) -> bool {
        self.privileged_write || (self.self_only_write && owned)
    }
}
