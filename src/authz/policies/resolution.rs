use crate::authz::predicates::owned_by;
use crate::authz::principal::Principal;
use crate::authz::visibility::{Mode, Scoped};
use crate::authz::Action;
use crate::models::{Resolution, ResourceKind};

use super::{require, resolve};

/// Self-only writers need to own the resolution itself, not the issue.
pub fn resolution(principal: &Principal, action: Action, resolution: &Resolution) -> bool {
    let kind = ResourceKind::Resolution;
    let Some(issue) = require(resolution.issue.as_ref(), "issue", principal, kind) else {
        return false;
    };
    let Some(chain) = resolve(issue.ancestors(), principal, kind) else {
        return false;
    };
    if !chain.reachable(principal, Mode::Historical) {
        return false;
    }
    let caps = principal.capabilities();
    let owned = owned_by(resolution, principal);

    match action {
        Action::Create => owned,
        Action::Read | Action::Update => caps.can_write(owned),
        Action::Destroy => caps.privileged_write,
        _ => false,
    }
}
