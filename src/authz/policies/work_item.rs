//! Issue and task policies.

use crate::authz::predicates::{is_open, owned_by, Owned};
use crate::authz::principal::Principal;
use crate::authz::visibility::{Mode, Scoped};
use crate::authz::Action;
use crate::models::{Issue, ResourceKind, Task, WorkItem};

use super::resolve;

pub fn issue(principal: &Principal, action: Action, issue: &Issue) -> bool {
    evaluate(principal, action, issue, ResourceKind::Issue)
}

pub fn task(principal: &Principal, action: Action, task: &Task) -> bool {
    match action {
        Action::Assign | Action::SelfAssign => {
            let Some(chain) = resolve(task.ancestors(), principal, ResourceKind::Task) else {
                return false;
            };
            let caps = principal.capabilities();
            let allowed_role = caps.privileged_write || (action == Action::SelfAssign && caps.self_only_write);

            allowed_role && is_open(task) && chain.reachable(principal, Mode::Historical)
        }
        _ => evaluate(principal, action, task, ResourceKind::Task),
    }
}

fn evaluate<W>(principal: &Principal, action: Action, item: &W, kind: ResourceKind) -> bool
where
    W: WorkItem + Scoped + Owned,
{
    let Some(chain) = resolve(item.ancestors(), principal, kind) else {
        return false;
    };
    let caps = principal.capabilities();

    match action {
        Action::Create => chain.reachable(principal, Mode::Live) && owned_by(item, principal),
        Action::Read => chain.reachable(principal, Mode::Historical),
        Action::Update => {
            chain.reachable(principal, Mode::Historical) && caps.can_write(owned_by(item, principal))
        }
        Action::Destroy => chain.reachable(principal, Mode::Historical) && caps.privileged_write,
        _ => false,
    }
}
