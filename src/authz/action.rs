use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Create,
    Read,
    Update,
    Destroy,
    Assign,
    SelfAssign,
    Finish,
    Approve,
    Disapprove,
}

impl Action {
    pub const ALL: [Action; 9] = [
        Action::Create,
        Action::Read,
        Action::Update,
        Action::Destroy,
        Action::Assign,
        Action::SelfAssign,
        Action::Finish,
        Action::Approve,
        Action::Disapprove,
    ];

    pub const CRUD: [Action; 4] = [Action::Create, Action::Read, Action::Update, Action::Destroy];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Read => "read",
            Action::Update => "update",
            Action::Destroy => "destroy",
            Action::Assign => "assign",
            Action::SelfAssign => "self_assign",
            Action::Finish => "finish",
            Action::Approve => "approve",
            Action::Disapprove => "disapprove",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
