//! Small pure predicates the policies are composed from.

use uuid::Uuid;

use crate::errors::IndeterminateInput;
use crate::models::{
    Category, Closure, Comment, Connection, Issue, Progression, Project, Reopening, Resolution,
    Review, Status, Subscription, Task, WorkItem,
};

use super::principal::Principal;

/// Resources recording the user they belong to.
pub trait Owned {
    fn owner_id(&self) -> Uuid;
}

pub fn owned_by<R: Owned + ?Sized>(resource: &R, principal: &Principal) -> bool {
    principal.is(resource.owner_id())
}

pub fn assigned(task: &Task, principal: &Principal) -> bool {
    task.assignees.contains(&principal.user_id)
}

pub fn is_open<W: WorkItem + ?Sized>(item: &W) -> bool {
    item.status() == Status::Open
}

pub fn review_pending(review: &Review) -> bool {
    !review.state.is_terminal()
}

pub fn project_of<W: WorkItem + ?Sized>(item: &W) -> Result<&Project, IndeterminateInput> {
    item.project().ok_or(IndeterminateInput("project"))
}

pub fn category_of(project: &Project) -> Result<&Category, IndeterminateInput> {
    project.category.as_ref().ok_or(IndeterminateInput("category"))
}

impl Owned for Issue {
    fn owner_id(&self) -> Uuid {
        self.owner
    }
}

impl Owned for Task {
    fn owner_id(&self) -> Uuid {
        self.owner
    }
}

impl<W> Owned for Comment<W> {
    fn owner_id(&self) -> Uuid {
        self.owner
    }
}

impl<W> Owned for Closure<W> {
    fn owner_id(&self) -> Uuid {
        self.owner
    }
}

impl<W> Owned for Reopening<W> {
    fn owner_id(&self) -> Uuid {
        self.owner
    }
}

impl<W> Owned for Connection<W> {
    fn owner_id(&self) -> Uuid {
        self.user
    }
}

impl<S> Owned for Subscription<S> {
    fn owner_id(&self) -> Uuid {
        self.owner
    }
}

impl Owned for Progression {
    fn owner_id(&self) -> Uuid {
        self.owner
    }
}

impl Owned for Review {
    fn owner_id(&self) -> Uuid {
        self.owner
    }
}

impl Owned for Resolution {
    fn owner_id(&self) -> Uuid {
        self.owner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authz::Role;
    use crate::models::ReviewState;

    fn task() -> Task {
        Task::new(Project::new(Category::new(true, false), true, false), Uuid::new_v4())
    }

    #[test]
    fn ownership_is_identity_equality() {
        let worker = Principal::with_role(Role::Worker);
        let issue = Issue::new(Project::new(Category::new(true, false), true, false), worker.user_id);

        assert!(owned_by(&issue, &worker));
        assert!(!owned_by(&issue, &Principal::new(Uuid::new_v4(), Role::Worker)));
    }

    #[test]
    fn connection_belongs_to_recording_user() {
        let user = Principal::with_role(Role::Reporter);
        let connection = Connection::new(task(), Uuid::new_v4(), user.user_id);
        assert!(owned_by(&connection, &user));
    }

    #[test]
    fn assignment_is_membership() {
        let worker = Principal::with_role(Role::Worker);
        assert!(!assigned(&task(), &worker));
        assert!(assigned(&task().with_assignee(worker.user_id), &worker));
    }

    #[test]
    fn open_and_pending_states() {
        assert!(is_open(&task()));
        assert!(!is_open(&task().closed()));

        let review = Review::new(task(), Uuid::new_v4());
        assert!(review_pending(&review));
        assert!(!review_pending(&review.with_state(ReviewState::Disapproved)));
    }

    #[test]
    fn ancestor_lookups_report_missing_links() {
        let mut item = task();
        assert!(project_of(&item).is_ok());

        item.project.as_mut().unwrap().category = None;
        assert_eq!(
            category_of(project_of(&item).unwrap()),
            Err(IndeterminateInput("category"))
        );

        item.project = None;
        assert_eq!(project_of(&item).unwrap_err(), IndeterminateInput("project"));
    }
}
