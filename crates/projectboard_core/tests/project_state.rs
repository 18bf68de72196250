use projectboard_core::{Project, ProjectState, ProjectStatus};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use uuid::Uuid;

fn state_with_recorder() -> (ProjectState, Rc<RefCell<Vec<Vec<Project>>>>) {
    let mut state = ProjectState::new();
    let seen: Rc<RefCell<Vec<Vec<Project>>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    state.add_listener(move |projects| {
        sink.borrow_mut().push(projects.to_vec());
    });
    (state, seen)
}

#[test]
fn add_project_yields_distinct_ids_with_active_status() {
    let mut state = ProjectState::new();

    let ids: HashSet<_> = (0..5)
        .map(|n| state.add_project(format!("project {n}"), "description", 2))
        .collect();

    assert_eq!(ids.len(), 5);
    assert_eq!(state.projects().len(), 5);
    assert!(state
        .projects()
        .iter()
        .all(|project| project.status == ProjectStatus::Active));
}

#[test]
fn listeners_receive_full_snapshot_in_insertion_order() {
    let (mut state, seen) = state_with_recorder();

    let first = state.add_project("first", "description", 1);
    let second = state.add_project("second", "description", 2);

    let notifications = seen.borrow();
    assert_eq!(notifications.len(), 2);
    assert_eq!(notifications[0].len(), 1);
    assert_eq!(notifications[1].len(), 2);
    assert_eq!(notifications[1][0].id, first);
    assert_eq!(notifications[1][1].id, second);
}

#[test]
fn notification_completes_within_the_mutating_call() {
    let mut state = ProjectState::new();
    let seen = Rc::new(RefCell::new(0_u32));
    let sink = Rc::clone(&seen);
    state.add_listener(move |_| *sink.borrow_mut() += 1);

    state.add_project("sync", "description", 1);

    assert_eq!(*seen.borrow(), 1);
}

#[test]
fn move_project_changes_status_and_notifies() {
    let (mut state, seen) = state_with_recorder();
    let id = state.add_project("X", "Y", 1);

    let moved = state.move_project(id, ProjectStatus::Finished);

    assert!(moved);
    assert_eq!(seen.borrow().len(), 2);
    assert_eq!(state.projects()[0].status, ProjectStatus::Finished);
}

#[test]
fn move_to_same_status_is_a_silent_noop() {
    let (mut state, seen) = state_with_recorder();
    let id = state.add_project("X", "Y", 1);

    assert!(state.move_project(id, ProjectStatus::Finished));
    let notifications_after_move = seen.borrow().len();

    // Second identical move: no mutation, no notification.
    assert!(!state.move_project(id, ProjectStatus::Finished));
    assert_eq!(seen.borrow().len(), notifications_after_move);
}

#[test]
fn move_unknown_id_is_a_silent_noop() {
    let (mut state, seen) = state_with_recorder();
    state.add_project("known", "description", 1);

    assert!(!state.move_project(Uuid::new_v4(), ProjectStatus::Finished));
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn filtered_views_partition_the_collection() {
    let mut state = ProjectState::new();
    let a = state.add_project("a", "description", 1);
    let b = state.add_project("b", "description", 2);
    let c = state.add_project("c", "description", 3);

    state.move_project(b, ProjectStatus::Finished);
    state.move_project(c, ProjectStatus::Finished);
    state.move_project(c, ProjectStatus::Active);

    let active: Vec<_> = state
        .projects()
        .iter()
        .filter(|project| project.status == ProjectStatus::Active)
        .map(|project| project.id)
        .collect();
    let finished: Vec<_> = state
        .projects()
        .iter()
        .filter(|project| project.status == ProjectStatus::Finished)
        .map(|project| project.id)
        .collect();

    assert_eq!(active, vec![a, c]);
    assert_eq!(finished, vec![b]);
    assert_eq!(active.len() + finished.len(), state.projects().len());
}

#[test]
fn second_listener_also_sees_every_notification() {
    let (mut state, first_seen) = state_with_recorder();
    let second_seen = Rc::new(RefCell::new(0_u32));
    let sink = Rc::clone(&second_seen);
    state.add_listener(move |_| *sink.borrow_mut() += 1);

    let id = state.add_project("X", "Y", 1);
    state.move_project(id, ProjectStatus::Finished);

    assert_eq!(first_seen.borrow().len(), 2);
    assert_eq!(*second_seen.borrow(), 2);
}

#[test]
fn snapshot_mutation_does_not_touch_owned_state() {
    let mut state = ProjectState::new();
    let captured: Rc<RefCell<Vec<Project>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&captured);
    state.add_listener(move |projects| {
        *sink.borrow_mut() = projects.to_vec();
    });

    state.add_project("original", "description", 1);
    captured.borrow_mut()[0].title = "tampered".to_string();

    assert_eq!(state.projects()[0].title, "original");
}
