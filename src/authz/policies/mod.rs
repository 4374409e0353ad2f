//! One policy per resource kind, each composed from role capabilities, the
//! visibility resolver and the ownership/state predicates.

pub mod account;
pub mod artifact;
pub mod catalog;
pub mod hierarchy;
pub mod resolution;
pub mod task_flow;
pub mod work_item;

use crate::errors::IndeterminateInput;
use crate::models::ResourceKind;

use super::principal::Principal;
use super::visibility::AncestorChain;

/// Unwraps a chain lookup. Indeterminate input is logged and treated as a denial.
pub(crate) fn resolve(
    chain: Result<AncestorChain, IndeterminateInput>,
    principal: &Principal,
    kind: ResourceKind,
) -> Option<AncestorChain> {
    match chain {
        Ok(chain) => Some(chain),
        Err(err) => {
            tracing::debug!(
                user_id = %principal.user_id,
                kind = %kind,
                error = %err,
                "denying on indeterminate input"
            );
            None
        }
    }
}

/// Same as [`resolve`] for a reference that must be present before a chain
/// can even be built.
pub(crate) fn require<'a, T>(
    reference: Option<&'a T>,
    name: &'static str,
    principal: &Principal,
    kind: ResourceKind,
) -> Option<&'a T> {
    if reference.is_none() {
        tracing::debug!(
            user_id = %principal.user_id,
            kind = %kind,
            error = %IndeterminateInput(name),
            "denying on indeterminate input"
        );
    }
    reference
}
