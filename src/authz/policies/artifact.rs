//! Comments, closures, reopenings, connections and subscriptions.
//!
//! These carry no visibility flags of their own: reachability is the parent's
//! scope. They differ only in what lifecycle state the parent must be in at
//! creation and whether an owner's destroy depends on the parent staying open.

use crate::authz::predicates::{owned_by, Owned};
use crate::authz::principal::Principal;
use crate::authz::visibility::{Mode, Scoped};
use crate::authz::Action;
use crate::models::{
    Category, Closure, Comment, Connection, Issue, Project, Reopening, ResourceKind, Status,
    Subscription, Task, WorkItem,
};

use super::{require, resolve};

/// Anything an artifact can hang off.
pub trait Parent: Scoped {
    /// Lifecycle status, for work items only.
    fn status(&self) -> Option<Status>;
}

impl Parent for Issue {
    fn status(&self) -> Option<Status> {
        Some(WorkItem::status(self))
    }
}

impl Parent for Task {
    fn status(&self) -> Option<Status> {
        Some(WorkItem::status(self))
    }
}

impl Parent for Project {
    fn status(&self) -> Option<Status> {
        None
    }
}

impl Parent for Category {
    fn status(&self) -> Option<Status> {
        None
    }
}

#[derive(Debug, Clone, Copy)]
struct Rules {
    /// Parent status required to create the artifact.
    create_when: Option<Status>,
    /// Owners may destroy only while the parent is open.
    owner_destroy_while_open: bool,
}

const COMMENT: Rules = Rules { create_when: None, owner_destroy_while_open: false };
const CLOSURE: Rules = Rules { create_when: Some(Status::Open), owner_destroy_while_open: true };
const REOPENING: Rules = Rules { create_when: Some(Status::Closed), owner_destroy_while_open: true };
const CONNECTION: Rules = Rules { create_when: None, owner_destroy_while_open: true };
const SUBSCRIPTION: Rules = Rules { create_when: None, owner_destroy_while_open: false };

pub fn comment<W: Parent>(principal: &Principal, action: Action, comment: &Comment<W>, kind: ResourceKind) -> bool {
    evaluate(principal, action, comment, comment.parent.as_ref(), kind, COMMENT)
}

pub fn closure<W: Parent>(principal: &Principal, action: Action, closure: &Closure<W>, kind: ResourceKind) -> bool {
    evaluate(principal, action, closure, closure.parent.as_ref(), kind, CLOSURE)
}

pub fn reopening<W: Parent>(
    principal: &Principal,
    action: Action,
    reopening: &Reopening<W>,
    kind: ResourceKind,
) -> bool {
    evaluate(principal, action, reopening, reopening.parent.as_ref(), kind, REOPENING)
}

pub fn connection<W: Parent>(
    principal: &Principal,
    action: Action,
    connection: &Connection<W>,
    kind: ResourceKind,
) -> bool {
    evaluate(principal, action, connection, connection.source.as_ref(), kind, CONNECTION)
}

pub fn subscription<S: Parent>(
    principal: &Principal,
    action: Action,
    subscription: &Subscription<S>,
    kind: ResourceKind,
) -> bool {
    evaluate(principal, action, subscription, subscription.parent.as_ref(), kind, SUBSCRIPTION)
}

fn evaluate<A, P>(
    principal: &Principal,
    action: Action,
    artifact: &A,
    parent: Option<&P>,
    kind: ResourceKind,
    rules: Rules,
) -> bool
where
    A: Owned,
    P: Parent,
{
    let Some(parent) = require(parent, "parent", principal, kind) else {
        return false;
    };
    let Some(chain) = resolve(parent.scope(), principal, kind) else {
        return false;
    };
    let caps = principal.capabilities();
    let owned = owned_by(artifact, principal);
    let parent_open = parent.status() == Some(Status::Open);

    match action {
        Action::Create => {
            let state_ok = rules.create_when.map_or(true, |status| parent.status() == Some(status));
            state_ok && owned && chain.reachable(principal, Mode::Live)
        }
        Action::Read => chain.reachable(principal, Mode::Historical),
        Action::Update => chain.reachable(principal, Mode::Historical) && caps.can_write(owned),
        Action::Destroy => {
            let owner_may = owned && (!rules.owner_destroy_while_open || parent_open);
            chain.reachable(principal, Mode::Historical) && (caps.privileged_write || owner_may)
        }
        _ => false,
    }
}
