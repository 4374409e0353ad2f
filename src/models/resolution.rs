use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::work_item::Issue;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Resolution {
    pub id: Uuid,
    pub owner: Uuid,
    pub issue: Option<Issue>,
}

impl Resolution {
    pub fn new(issue: Issue, owner: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner,
            issue: Some(issue),
        }
    }
}
