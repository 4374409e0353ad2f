use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::authz::{Action, Principal};
use crate::models::resource::{Resource, ResourceKind};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DecisionRequest {
    pub user: Principal,
    #[schema(example = "update")]
    pub action: Action,
    /// Resource snapshot tagged with `kind`, carrying its ancestor chain
    #[schema(value_type = Object)]
    pub resource: Resource,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DecisionResponse {
    pub allowed: bool,
    pub kind: ResourceKind,
    pub action: Action,
    pub evaluated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BatchDecisionRequest {
    pub checks: Vec<DecisionRequest>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BatchDecisionResponse {
    pub results: Vec<DecisionResponse>,
}
