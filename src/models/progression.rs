use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::work_item::Task;

/// Work-in-progress record an assignee keeps on a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Progression {
    pub id: Uuid,
    pub owner: Uuid,
    pub task: Option<Task>,
}

impl Progression {
    pub fn new(task: Task, owner: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner,
            task: Some(task),
        }
    }
}
