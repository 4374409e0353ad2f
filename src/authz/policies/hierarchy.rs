//! Category and project policies.

use crate::authz::principal::Principal;
use crate::authz::visibility::{Mode, Scoped};
use crate::authz::Action;
use crate::models::{Category, Project, ResourceKind};

use super::resolve;

pub fn category(principal: &Principal, action: Action, category: &Category) -> bool {
    let kind = ResourceKind::Category;
    match action {
        Action::Create => {
            principal.is_admin()
                && resolve(category.ancestors(), principal, kind)
                    .is_some_and(|chain| chain.reachable(principal, Mode::Live))
        }
        // Staff browse the whole category tree.
        Action::Read => principal.has_internal_access() || reachable(principal, category, kind),
        Action::Update => {
            principal.is_admin()
                || (principal.capabilities().privileged_write && reachable(principal, category, kind))
        }
        Action::Destroy => principal.is_admin() && reachable(principal, category, kind),
        _ => false,
    }
}

pub fn project(principal: &Principal, action: Action, project: &Project) -> bool {
    let kind = ResourceKind::Project;
    match action {
        Action::Create => {
            principal.is_admin()
                && resolve(project.ancestors(), principal, kind)
                    .is_some_and(|chain| chain.reachable(principal, Mode::Live))
        }
        Action::Read => reachable(principal, project, kind),
        Action::Update => principal.capabilities().privileged_write && reachable(principal, project, kind),
        Action::Destroy => principal.is_admin() && reachable(principal, project, kind),
        _ => false,
    }
}

/// Historical reachability of a flagged resource: its ancestors plus its own level.
fn reachable<R: Scoped>(principal: &Principal, resource: &R, kind: ResourceKind) -> bool {
    resolve(resource.scope(), principal, kind)
        .is_some_and(|chain| chain.reachable(principal, Mode::Historical))
}
