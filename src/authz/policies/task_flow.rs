//! Progressions and reviews: records only a task's assignees may open.

use crate::authz::predicates::{assigned, is_open, owned_by, review_pending};
use crate::authz::principal::Principal;
use crate::authz::visibility::{AncestorChain, Mode, Scoped};
use crate::authz::Action;
use crate::models::{Progression, ResourceKind, Review, Task};

use super::{require, resolve};

/// Self-only writers read and edit only their own progressions.
pub fn progression(principal: &Principal, action: Action, progression: &Progression) -> bool {
    let kind = ResourceKind::Progression;
    let Some((task, chain)) = task_scope(progression.task.as_ref(), principal, kind) else {
        return false;
    };
    if !chain.reachable(principal, Mode::Historical) {
        return false;
    }
    let caps = principal.capabilities();
    let owned = owned_by(progression, principal);

    match action {
        Action::Create => owned && assigned(task, principal) && is_open(task),
        Action::Read | Action::Update => caps.can_write(owned),
        Action::Destroy => caps.privileged_write || owned,
        Action::Finish => owned,
        _ => false,
    }
}

/// Approve and disapprove stay possible only while the review is pending, and
/// never for the review's own author.
pub fn review(principal: &Principal, action: Action, review: &Review) -> bool {
    let kind = ResourceKind::Review;
    let Some((task, chain)) = task_scope(review.task.as_ref(), principal, kind) else {
        return false;
    };
    if !chain.reachable(principal, Mode::Historical) {
        return false;
    }
    let caps = principal.capabilities();
    let owned = owned_by(review, principal);
    let pending = review_pending(review);

    match action {
        Action::Create => owned && assigned(task, principal) && is_open(task),
        Action::Read => true,
        Action::Update => pending && caps.can_write(owned),
        Action::Approve | Action::Disapprove => pending && caps.privileged_write && !owned,
        Action::Destroy => pending && (caps.privileged_write || (owned && is_open(task))),
        _ => false,
    }
}

fn task_scope<'a>(
    task: Option<&'a Task>,
    principal: &Principal,
    kind: ResourceKind,
) -> Option<(&'a Task, AncestorChain)> {
    let task = require(task, "task", principal, kind)?;
    let chain = resolve(task.ancestors(), principal, kind)?;
    Some((task, chain))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authz::Role;
    use crate::models::{Category, Project, ReviewState};
    use uuid::Uuid;

    fn task_for(assignee: &Principal) -> Task {
        Task::new(Project::new(Category::new(true, false), true, false), Uuid::new_v4())
            .with_assignee(assignee.user_id)
    }

    #[test]
    fn assignee_tracks_progress_while_task_open() {
        let reviewer = Principal::with_role(Role::Reviewer);
        let open = Progression::new(task_for(&reviewer), reviewer.user_id);
        assert!(progression(&reviewer, Action::Create, &open));

        let closed = Progression::new(task_for(&reviewer).closed(), reviewer.user_id);
        assert!(!progression(&reviewer, Action::Create, &closed));
    }

    #[test]
    fn non_assignee_cannot_start_progression() {
        let worker = Principal::with_role(Role::Worker);
        let other = Principal::with_role(Role::Worker);
        let record = Progression::new(task_for(&other), worker.user_id);
        assert!(!progression(&worker, Action::Create, &record));
    }

    #[test]
    fn orphaned_progression_is_denied() {
        let admin = Principal::with_role(Role::Administrator);
        let mut record = Progression::new(task_for(&admin), admin.user_id);
        record.task = None;

        for action in Action::ALL {
            assert!(!progression(&admin, action, &record), "{action}");
        }
    }

    #[test]
    fn only_owner_finishes() {
        let worker = Principal::with_role(Role::Worker);
        let record = Progression::new(task_for(&worker), worker.user_id);

        assert!(progression(&worker, Action::Finish, &record));
        assert!(!progression(&Principal::with_role(Role::Administrator), Action::Finish, &record));
        assert!(progression(&Principal::with_role(Role::Administrator), Action::Destroy, &record));
    }

    #[test]
    fn self_only_writers_keep_to_their_own_progressions() {
        let worker = Principal::with_role(Role::Worker);
        let reporter = Principal::with_role(Role::Reporter);
        let foreign = Progression::new(task_for(&worker), Uuid::new_v4());

        for user in [&worker, &reporter] {
            assert!(!progression(user, Action::Read, &foreign), "{}", user.role);
            assert!(!progression(user, Action::Update, &foreign), "{}", user.role);
        }
        let reviewer = Principal::with_role(Role::Reviewer);
        assert!(progression(&reviewer, Action::Read, &foreign));
        assert!(progression(&reviewer, Action::Update, &foreign));

        let own = Progression::new(task_for(&worker), worker.user_id);
        assert!(progression(&worker, Action::Read, &own));
        assert!(progression(&worker, Action::Update, &own));
    }

    #[test]
    fn owner_destroys_progression_even_after_task_closes() {
        let worker = Principal::with_role(Role::Worker);
        let open = Progression::new(task_for(&worker), worker.user_id);
        let closed = Progression::new(task_for(&worker).closed(), worker.user_id);
        let foreign = Progression::new(task_for(&worker), Uuid::new_v4());

        assert!(progression(&worker, Action::Destroy, &open));
        assert!(progression(&worker, Action::Destroy, &closed));
        assert!(!progression(&worker, Action::Destroy, &foreign));
    }

    #[test]
    fn admin_starts_progression_under_hidden_project() {
        let admin = Principal::with_role(Role::Administrator);
        let task = Task::new(Project::new(Category::new(false, true), false, false), Uuid::new_v4())
            .with_assignee(admin.user_id);
        let record = Progression::new(task, admin.user_id);

        assert!(progression(&admin, Action::Create, &record));
        assert!(!progression(&Principal::with_role(Role::Reviewer), Action::Read, &record));
    }

    #[test]
    fn approval_is_terminal() {
        let admin = Principal::with_role(Role::Administrator);
        let worker = Principal::with_role(Role::Worker);
        let pending = Review::new(task_for(&worker), worker.user_id);

        assert!(review(&admin, Action::Approve, &pending));
        assert!(review(&admin, Action::Disapprove, &pending));

        for state in [ReviewState::Approved, ReviewState::Disapproved] {
            let done = pending.clone().with_state(state);
            for role in Role::ALL {
                let user = Principal::with_role(role);
                assert!(!review(&user, Action::Approve, &done));
                assert!(!review(&user, Action::Disapprove, &done));
                assert!(!review(&user, Action::Update, &done));
                assert!(!review(&user, Action::Destroy, &done));
            }
        }
    }

    #[test]
    fn reviewers_do_not_approve_their_own_work() {
        let reviewer = Principal::with_role(Role::Reviewer);
        let own = Review::new(task_for(&reviewer), reviewer.user_id);
        assert!(!review(&reviewer, Action::Approve, &own));
        assert!(!review(&Principal::with_role(Role::Worker), Action::Approve, &own));
    }

    #[test]
    fn owner_withdraws_pending_review_only_on_open_task() {
        let worker = Principal::with_role(Role::Worker);
        let open = Review::new(task_for(&worker), worker.user_id);
        let closed = Review::new(task_for(&worker).closed(), worker.user_id);

        assert!(review(&worker, Action::Destroy, &open));
        assert!(!review(&worker, Action::Destroy, &closed));
    }

    #[test]
    fn privileged_writers_destroy_pending_reviews_on_closed_tasks() {
        let worker = Principal::with_role(Role::Worker);
        let pending = Review::new(task_for(&worker).closed(), worker.user_id);

        for role in [Role::Administrator, Role::Reviewer] {
            assert!(review(&Principal::with_role(role), Action::Destroy, &pending), "{role}");
        }
        let approved = pending.with_state(ReviewState::Approved);
        assert!(!review(&Principal::with_role(Role::Administrator), Action::Destroy, &approved));
    }
}
