use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::work_item::Task;

/// Review lifecycle. `Approved` and `Disapproved` are terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReviewState {
    #[default]
    Pending,
    Approved,
    Disapproved,
}

impl ReviewState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ReviewState::Pending)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Review {
    pub id: Uuid,
    pub owner: Uuid,
    #[serde(default)]
    pub state: ReviewState,
    pub task: Option<Task>,
}

impl Review {
    pub fn new(task: Task, owner: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner,
            state: ReviewState::Pending,
            task: Some(task),
        }
    }

    pub fn with_state(mut self, state: ReviewState) -> Self {
        self.state = state;
        self
    }
}
