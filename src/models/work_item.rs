use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::project::Project;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Open,
    Closed,
}

/// Shape shared by issues and tasks.
pub trait WorkItem {
    fn status(&self) -> Status;
    fn project(&self) -> Option<&Project>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Issue {
    pub id: Uuid,
    pub owner: Uuid,
    #[serde(default)]
    pub status: Status,
    pub project: Option<Project>,
}

impl Issue {
    pub fn new(project: Project, owner: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner,
            status: Status::Open,
            project: Some(project),
        }
    }

    pub fn closed(mut self) -> Self {
        self.status = Status::Closed;
        self
    }
}

impl WorkItem for Issue {
    fn status(&self) -> Status {
        self.status
    }

    fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Task {
    pub id: Uuid,
    pub owner: Uuid,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub assignees: BTreeSet<Uuid>,
    pub project: Option<Project>,
}

impl Task {
    pub fn new(project: Project, owner: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner,
            status: Status::Open,
            assignees: BTreeSet::new(),
            project: Some(project),
        }
    }

    pub fn with_assignee(mut self, user_id: Uuid) -> Self {
        self.assignees.insert(user_id);
        self
    }

    pub fn closed(mut self) -> Self {
        self.status = Status::Closed;
        self
    }
}

impl WorkItem for Task {
    fn status(&self) -> Status {
        self.status
    }

    fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }
}

/// Issue and task types are global lookup records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WorkItemType {
    pub id: Uuid,
    #[serde(default)]
    #[schema(example = "Bug")]
    pub name: String,
}

impl WorkItemType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}
