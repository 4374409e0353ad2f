//! Authorization decision engine.
//!
//! - Role model with four capability bits per role
//! - Visibility resolver over the Category -> Project -> WorkItem chain
//! - Ownership and lifecycle predicates
//! - One policy per resource kind behind a single `can` facade
//! - Configurable enforcement modes (off/advisory/strict) for callers

mod action;
mod evaluator;
pub mod policies;
pub mod predicates;
mod principal;
mod role;
pub mod visibility;

pub use action::Action;
pub use evaluator::{DefaultPolicyEvaluator, PolicyEvaluator};
pub use principal::Principal;
pub use role::{Capabilities, Role};
pub use visibility::{AncestorChain, Level, Mode};

use serde::Serialize;
use utoipa::ToSchema;

use crate::errors::{AppError, AppResult};
use crate::models::Resource;

/// Single entry point: may `principal` perform `action` on `resource`?
pub fn can(principal: &Principal, action: Action, resource: &Resource) -> bool {
    DefaultPolicyEvaluator.can(principal, action, resource)
}

/// Authorization enforcement mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AuthzMode {
    /// No permission checks (development mode)
    Off,
    /// Log denials but allow requests (testing mode)
    Advisory,
    /// Reject denied requests (production mode)
    #[default]
    Strict,
}

impl AuthzMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "off" => Some(AuthzMode::Off),
            "advisory" => Some(AuthzMode::Advisory),
            "strict" => Some(AuthzMode::Strict),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthzMode::Off => "off",
            AuthzMode::Advisory => "advisory",
            AuthzMode::Strict => "strict",
        }
    }
}

/// Turns a decision into a `Result` according to the enforcement mode.
pub fn enforce(
    mode: AuthzMode,
    evaluator: &dyn PolicyEvaluator,
    principal: &Principal,
    action: Action,
    resource: &Resource,
) -> AppResult<()> {
    if mode == AuthzMode::Off || evaluator.can(principal, action, resource) {
        return Ok(());
    }

    match mode {
        AuthzMode::Advisory => {
            tracing::warn!(
                user_id = %principal.user_id,
                action = %action,
                kind = %resource.kind(),
                "advisory mode: allowing denied request"
            );
            Ok(())
        }
        _ => Err(AppError::forbidden(format!(
            "{} may not {} this {}",
            principal.role,
            action,
            resource.kind()
        ))),
    }
}
