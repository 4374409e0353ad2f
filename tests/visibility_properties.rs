//! Sweeps over every role and every flag combination of a two-level chain.

use uuid::Uuid;

use tracker_authz::authz::{AncestorChain, Level, Mode};
use tracker_authz::models::{
    Category, Closure, Comment, Connection, Issue, Progression, Project, Reopening, Resolution, Review,
    ReviewState, Subscription, Task,
};
use tracker_authz::{can, Action, Principal, Resource, Role};

const FLAGS: [(bool, bool); 4] = [(true, false), (true, true), (false, false), (false, true)];

fn chains() -> Vec<((bool, bool), (bool, bool))> {
    FLAGS
        .iter()
        .flat_map(|&category| FLAGS.iter().map(move |&project| (category, project)))
        .collect()
}

fn chain(category: (bool, bool), project: (bool, bool)) -> AncestorChain {
    AncestorChain::empty()
        .push(Level::new(category.0, category.1))
        .push(Level::new(project.0, project.1))
}

fn project(category: (bool, bool), project: (bool, bool)) -> Project {
    Project::new(Category::new(category.0, category.1), project.0, project.1)
}

/// One snapshot per hierarchical kind, all owned by `owner` and with `owner`
/// assigned to the task.
fn snapshots(project: &Project, owner: Uuid) -> Vec<Resource> {
    let category = project.category.clone().expect("fixture has a category");
    let issue = Issue::new(project.clone(), owner);
    let task = Task::new(project.clone(), owner).with_assignee(owner);

    vec![
        Resource::Project(project.clone()),
        Resource::Issue(issue.clone()),
        Resource::Task(task.clone()),
        Resource::IssueComment(Comment::new(issue.clone(), owner)),
        Resource::TaskComment(Comment::new(task.clone(), owner)),
        Resource::IssueClosure(Closure::new(issue.clone(), owner)),
        Resource::TaskClosure(Closure::new(task.clone(), owner)),
        Resource::IssueReopening(Reopening::new(issue.clone(), owner)),
        Resource::TaskReopening(Reopening::new(task.clone(), owner)),
        Resource::IssueConnection(Connection::new(issue.clone(), Uuid::new_v4(), owner)),
        Resource::TaskConnection(Connection::new(task.clone(), Uuid::new_v4(), owner)),
        Resource::IssueSubscription(Subscription::new(issue.clone(), owner)),
        Resource::TaskSubscription(Subscription::new(task.clone(), owner)),
        Resource::ProjectIssueSubscription(Subscription::new(project.clone(), owner)),
        Resource::ProjectTaskSubscription(Subscription::new(project.clone(), owner)),
        Resource::CategoryIssueSubscription(Subscription::new(category.clone(), owner)),
        Resource::CategoryTaskSubscription(Subscription::new(category, owner)),
        Resource::Progression(Progression::new(task.clone(), owner)),
        Resource::Review(Review::new(task, owner)),
        Resource::Resolution(Resolution::new(issue, owner)),
    ]
}

#[test]
fn admin_historical_reach_is_a_superset() {
    let admin = Principal::with_role(Role::Administrator);
    for (category, project) in chains() {
        let chain = chain(category, project);
        for role in Role::ALL {
            let user = Principal::with_role(role);
            if chain.reachable(&user, Mode::Historical) {
                assert!(chain.reachable(&admin, Mode::Historical), "{role} {category:?} {project:?}");
            }
        }
    }
}

#[test]
fn admin_reads_whatever_anyone_reads() {
    for (category, project_flags) in chains() {
        let fixture = project(category, project_flags);
        for role in Role::ALL {
            let user = Principal::with_role(role);
            let admin = Principal::new(user.user_id, Role::Administrator);
            for resource in snapshots(&fixture, user.user_id) {
                if can(&user, Action::Read, &resource) {
                    assert!(can(&admin, Action::Read, &resource), "{role} on {}", resource.kind());
                }
            }
        }
    }
}

#[test]
fn live_reach_implies_historical_reach() {
    for (category, project) in chains() {
        let chain = chain(category, project);
        for role in Role::ALL {
            let user = Principal::with_role(role);
            if chain.reachable(&user, Mode::Live) {
                assert!(chain.reachable(&user, Mode::Historical), "{role} {category:?} {project:?}");
            }
        }
    }
}

#[test]
fn creating_implies_reading() {
    for (category, project_flags) in chains() {
        let fixture = project(category, project_flags);
        for role in Role::ALL {
            let user = Principal::with_role(role);
            for resource in snapshots(&fixture, user.user_id) {
                if can(&user, Action::Create, &resource) {
                    assert!(can(&user, Action::Read, &resource), "{role} on {}", resource.kind());
                }
            }
        }
    }
}

#[test]
fn each_level_gates_on_its_own() {
    let reporter = Principal::with_role(Role::Reporter);
    let open = (true, false);
    assert!(chain(open, open).reachable(&reporter, Mode::Historical));

    for flipped in [(false, false), (true, true)] {
        assert!(!chain(flipped, open).reachable(&reporter, Mode::Historical), "category {flipped:?}");
        assert!(!chain(open, flipped).reachable(&reporter, Mode::Historical), "project {flipped:?}");
        assert!(!chain(flipped, open).reachable(&reporter, Mode::Live));
        assert!(!chain(open, flipped).reachable(&reporter, Mode::Live));
    }
}

#[test]
fn flags_never_inherit_through_the_chain() {
    let reporter = Principal::with_role(Role::Reporter);
    for (category, project_flags) in chains() {
        let fixture = project(category, project_flags);
        let expected = category == (true, false) && project_flags == (true, false);
        let issue = Resource::Issue(Issue::new(fixture, reporter.user_id));
        assert_eq!(can(&reporter, Action::Read, &issue), expected, "{category:?} {project_flags:?}");
    }
}

#[test]
fn terminal_reviews_refuse_approval_for_everyone() {
    for (category, project_flags) in chains() {
        let worker = Principal::with_role(Role::Worker);
        let task = Task::new(project(category, project_flags), Uuid::new_v4()).with_assignee(worker.user_id);
        for state in [ReviewState::Approved, ReviewState::Disapproved] {
            let review = Resource::Review(Review::new(task.clone(), worker.user_id).with_state(state));
            for role in Role::ALL {
                let user = Principal::with_role(role);
                assert!(!can(&user, Action::Approve, &review));
                assert!(!can(&user, Action::Disapprove, &review));
            }
        }
    }
}

#[test]
fn owner_destroy_flips_with_parent_state() {
    let worker = Principal::with_role(Role::Worker);
    let admin = Principal::with_role(Role::Administrator);
    let reviewer = Principal::with_role(Role::Reviewer);
    let fixture = project((true, false), (true, true));

    let issue = Issue::new(fixture.clone(), Uuid::new_v4());
    let task = Task::new(fixture, Uuid::new_v4());

    let pairs = vec![
        (
            Resource::IssueClosure(Closure::new(issue.clone(), worker.user_id)),
            Resource::IssueClosure(Closure::new(issue.clone().closed(), worker.user_id)),
        ),
        (
            Resource::TaskReopening(Reopening::new(task.clone(), worker.user_id)),
            Resource::TaskReopening(Reopening::new(task.clone().closed(), worker.user_id)),
        ),
        (
            Resource::IssueConnection(Connection::new(issue.clone(), Uuid::new_v4(), worker.user_id)),
            Resource::IssueConnection(Connection::new(issue.closed(), Uuid::new_v4(), worker.user_id)),
        ),
        (
            Resource::TaskConnection(Connection::new(task.clone(), Uuid::new_v4(), worker.user_id)),
            Resource::TaskConnection(Connection::new(task.closed(), Uuid::new_v4(), worker.user_id)),
        ),
    ];

    for (open, closed) in &pairs {
        assert!(can(&worker, Action::Destroy, open), "{}", open.kind());
        assert!(!can(&worker, Action::Destroy, closed), "{}", closed.kind());
        for privileged in [&admin, &reviewer] {
            assert!(can(privileged, Action::Destroy, open));
            assert!(can(privileged, Action::Destroy, closed));
        }
    }
}
