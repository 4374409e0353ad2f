use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::artifact::{Closure, Comment, Connection, Reopening, Subscription};
use super::category::Category;
use super::progression::Progression;
use super::project::Project;
use super::resolution::Resolution;
use super::review::Review;
use super::user::UserRecord;
use super::work_item::{Issue, Task, WorkItemType};

/// Every resource kind the decision engine knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Category,
    Project,
    Issue,
    Task,
    IssueComment,
    TaskComment,
    IssueClosure,
    TaskClosure,
    IssueReopening,
    TaskReopening,
    IssueConnection,
    TaskConnection,
    IssueSubscription,
    TaskSubscription,
    ProjectIssueSubscription,
    ProjectTaskSubscription,
    CategoryIssueSubscription,
    CategoryTaskSubscription,
    Progression,
    Review,
    Resolution,
    IssueType,
    TaskType,
    User,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Category => "category",
            ResourceKind::Project => "project",
            ResourceKind::Issue => "issue",
            ResourceKind::Task => "task",
            ResourceKind::IssueComment => "issue_comment",
            ResourceKind::TaskComment => "task_comment",
            ResourceKind::IssueClosure => "issue_closure",
            ResourceKind::TaskClosure => "task_closure",
            ResourceKind::IssueReopening => "issue_reopening",
            ResourceKind::TaskReopening => "task_reopening",
            ResourceKind::IssueConnection => "issue_connection",
            ResourceKind::TaskConnection => "task_connection",
            ResourceKind::IssueSubscription => "issue_subscription",
            ResourceKind::TaskSubscription => "task_subscription",
            ResourceKind::ProjectIssueSubscription => "project_issue_subscription",
            ResourceKind::ProjectTaskSubscription => "project_task_subscription",
            ResourceKind::CategoryIssueSubscription => "category_issue_subscription",
            ResourceKind::CategoryTaskSubscription => "category_task_subscription",
            ResourceKind::Progression => "progression",
            ResourceKind::Review => "review",
            ResourceKind::Resolution => "resolution",
            ResourceKind::IssueType => "issue_type",
            ResourceKind::TaskType => "task_type",
            ResourceKind::User => "user",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A resource snapshot with its ancestor chain already resolved.
///
/// Serialized with an internal `kind` tag matching [`ResourceKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resource {
    Category(Category),
    Project(Project),
    Issue(Issue),
    Task(Task),
    IssueComment(Comment<Issue>),
    TaskComment(Comment<Task>),
    IssueClosure(Closure<Issue>),
    TaskClosure(Closure<Task>),
    IssueReopening(Reopening<Issue>),
    TaskReopening(Reopening<Task>),
    IssueConnection(Connection<Issue>),
    TaskConnection(Connection<Task>),
    IssueSubscription(Subscription<Issue>),
    TaskSubscription(Subscription<Task>),
    ProjectIssueSubscription(Subscription<Project>),
    ProjectTaskSubscription(Subscription<Project>),
    CategoryIssueSubscription(Subscription<Category>),
    CategoryTaskSubscription(Subscription<Category>),
    Progression(Progression),
    Review(Review),
    Resolution(Resolution),
    IssueType(WorkItemType),
    TaskType(WorkItemType),
    User(UserRecord),
}

impl Resource {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Resource::Category(_) => ResourceKind::Category,
            Resource::Project(_) => ResourceKind::Project,
            Resource::Issue(_) => ResourceKind::Issue,
            Resource::Task(_) => ResourceKind::Task,
            Resource::IssueComment(_) => ResourceKind::IssueComment,
            Resource::TaskComment(_) => ResourceKind::TaskComment,
            Resource::IssueClosure(_) => ResourceKind::IssueClosure,
            Resource::TaskClosure(_) => ResourceKind::TaskClosure,
            Resource::IssueReopening(_) => ResourceKind::IssueReopening,
            Resource::TaskReopening(_) => ResourceKind::TaskReopening,
            Resource::IssueConnection(_) => ResourceKind::IssueConnection,
            Resource::TaskConnection(_) => ResourceKind::TaskConnection,
            Resource::IssueSubscription(_) => ResourceKind::IssueSubscription,
            Resource::TaskSubscription(_) => ResourceKind::TaskSubscription,
            Resource::ProjectIssueSubscription(_) => ResourceKind::ProjectIssueSubscription,
            Resource::ProjectTaskSubscription(_) => ResourceKind::ProjectTaskSubscription,
            Resource::CategoryIssueSubscription(_) => ResourceKind::CategoryIssueSubscription,
            Resource::CategoryTaskSubscription(_) => ResourceKind::CategoryTaskSubscription,
            Resource::Progression(_) => ResourceKind::Progression,
            Resource::Review(_) => ResourceKind::Review,
            Resource::Resolution(_) => ResourceKind::Resolution,
            Resource::IssueType(_) => ResourceKind::IssueType,
            Resource::TaskType(_) => ResourceKind::TaskType,
            Resource::User(_) => ResourceKind::User,
        }
    }
}
