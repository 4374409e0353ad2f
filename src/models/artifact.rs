//! Records attached to a work item, project, or category.
//!
//! Every artifact carries the snapshot of its parent so reachability can be
//! derived without further lookups. A `None` parent means the reference went
//! stale between load and decision.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment<W> {
    pub id: Uuid,
    pub owner: Uuid,
    pub parent: Option<W>,
    #[serde(default)]
    pub body: String,
}

impl<W> Comment<W> {
    pub fn new(parent: W, owner: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner,
            parent: Some(parent),
            body: String::new(),
        }
    }
}

/// Audit record of a work item being closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Closure<W> {
    pub id: Uuid,
    pub owner: Uuid,
    pub parent: Option<W>,
}

impl<W> Closure<W> {
    pub fn new(parent: W, owner: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner,
            parent: Some(parent),
        }
    }
}

/// Audit record of a closed work item being reopened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reopening<W> {
    pub id: Uuid,
    pub owner: Uuid,
    pub parent: Option<W>,
}

impl<W> Reopening<W> {
    pub fn new(parent: W, owner: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner,
            parent: Some(parent),
        }
    }
}

/// Link from a source work item to another one, recorded by `user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection<W> {
    pub id: Uuid,
    pub user: Uuid,
    pub source: Option<W>,
    #[serde(default)]
    pub target: Option<Uuid>,
}

impl<W> Connection<W> {
    pub fn new(source: W, target: Uuid, user: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user,
            source: Some(source),
            target: Some(target),
        }
    }
}

/// Notification subscription; the parent is a work item, a project or a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription<S> {
    pub id: Uuid,
    pub owner: Uuid,
    pub parent: Option<S>,
}

impl<S> Subscription<S> {
    pub fn new(parent: S, owner: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner,
            parent: Some(parent),
        }
    }
}
