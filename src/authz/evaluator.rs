use crate::models::Resource;

use super::action::Action;
use super::policies::{account, artifact, catalog, hierarchy, resolution, task_flow, work_item};
use super::principal::Principal;

/// Policy evaluator trait for pluggable authorization logic.
///
/// Implementations must be pure: no I/O and no state carried between calls.
pub trait PolicyEvaluator: Send + Sync {
    /// Check if the principal may perform `action` on `resource`.
    fn can(&self, principal: &Principal, action: Action, resource: &Resource) -> bool;
}

/// Default evaluator: dispatches on resource kind to the matching policy.
#[derive(Debug, Clone, Default)]
pub struct DefaultPolicyEvaluator;

impl DefaultPolicyEvaluator {
    pub fn new() -> Self {
        Self
    }

    fn dispatch(principal: &Principal, action: Action, resource: &Resource) -> bool {
        let kind = resource.kind();
        match resource {
            Resource::Category(category) => hierarchy::category(principal, action, category),
            Resource::Project(project) => hierarchy::project(principal, action, project),
            Resource::Issue(issue) => work_item::issue(principal, action, issue),
            Resource::Task(task) => work_item::task(principal, action, task),
            Resource::IssueComment(comment) => artifact::comment(principal, action, comment, kind),
            Resource::TaskComment(comment) => artifact::comment(principal, action, comment, kind),
            Resource::IssueClosure(closure) => artifact::closure(principal, action, closure, kind),
            Resource::TaskClosure(closure) => artifact::closure(principal, action, closure, kind),
            Resource::IssueReopening(reopening) => artifact::reopening(principal, action, reopening, kind),
            Resource::TaskReopening(reopening) => artifact::reopening(principal, action, reopening, kind),
            Resource::IssueConnection(connection) => artifact::connection(principal, action, connection, kind),
            Resource::TaskConnection(connection) => artifact::connection(principal, action, connection, kind),
            Resource::IssueSubscription(sub) => artifact::subscription(principal, action, sub, kind),
            Resource::TaskSubscription(sub) => artifact::subscription(principal, action, sub, kind),
            Resource::ProjectIssueSubscription(sub) | Resource::ProjectTaskSubscription(sub) => {
                artifact::subscription(principal, action, sub, kind)
            }
            Resource::CategoryIssueSubscription(sub) | Resource::CategoryTaskSubscription(sub) => {
                artifact::subscription(principal, action, sub, kind)
            }
            Resource::Progression(progression) => task_flow::progression(principal, action, progression),
            Resource::Review(review) => task_flow::review(principal, action, review),
            Resource::Resolution(res) => resolution::resolution(principal, action, res),
            Resource::IssueType(item_type) | Resource::TaskType(item_type) => {
                catalog::work_item_type(principal, action, item_type)
            }
            Resource::User(record) => account::user(principal, action, record),
        }
    }
}

impl PolicyEvaluator for DefaultPolicyEvaluator {
    fn can(&self, principal: &Principal, action: Action, resource: &Resource) -> bool {
        let allowed = Self::dispatch(principal, action, resource);

        tracing::debug!(
            user_id = %principal.user_id,
            role = %principal.role,
            action = %action,
            kind = %resource.kind(),
            allowed,
            "authorization decision"
        );

        allowed
    }
}
