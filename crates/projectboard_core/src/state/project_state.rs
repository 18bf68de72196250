//! Project collection and subscriber notification.
//!
//! # Responsibility
//! - Hold the owned list of projects and the registered change listeners.
//! - Apply add/move mutations and notify listeners synchronously.
//!
//! # Invariants
//! - Projects are only created through `add_project` and only mutated
//!   through `move_project` (status field only); nothing is ever deleted.
//! - Listeners observe a snapshot of the full collection in insertion
//!   order, never the owned collection itself.
//! - A no-op move (unknown id or unchanged status) notifies nobody.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use log::debug;

/// Change listener invoked with a snapshot of the full project collection.
///
/// Registered once per consumer and never deregistered; listener lifetime
/// equals the state's lifetime.
pub type Listener = Box<dyn FnMut(&[Project])>;

/// Owner of the project collection and its subscriber list.
///
/// Constructed once by the application and passed explicitly to every
/// consumer; there is no global instance. Single-instance lifetime is a
/// convention of the caller, not an enforced property.
#[derive(Default)]
pub struct ProjectState {
    projects: Vec<Project>,
    listeners: Vec<Listener>,
}

impl ProjectState {
    /// Creates an empty board state with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a change listener for the lifetime of the state.
    ///
    /// There is no removal operation; consumers subscribe once at
    /// construction time.
    pub fn add_listener(&mut self, listener: impl FnMut(&[Project]) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Creates a project with a fresh id and `Active` status, appends it,
    /// then notifies every listener.
    ///
    /// # Contract
    /// - Performs no input validation; callers validate before calling.
    /// - Notification completes before this returns.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let project = Project::new(title, description, people);
        let id = project.id;
        self.projects.push(project);
        debug!(
            "event=project_added module=state status=ok id={id} total={}",
            self.projects.len()
        );
        self.notify_listeners();
        id
    }

    /// Moves a project to `new_status` and notifies every listener.
    ///
    /// Unknown ids and unchanged statuses are silent no-ops: no mutation,
    /// no notification. Returns whether a move happened.
    pub fn move_project(&mut self, id: ProjectId, new_status: ProjectStatus) -> bool {
        let Some(project) = self.projects.iter_mut().find(|project| project.id == id) else {
            debug!("event=project_move_noop module=state status=ok id={id} reason=not_found");
            return false;
        };
        if project.status == new_status {
            debug!("event=project_move_noop module=state status=ok id={id} reason=status_unchanged");
            return false;
        }
        project.status = new_status;
        debug!(
            "event=project_moved module=state status=ok id={id} new_status={}",
            new_status.as_str()
        );
        self.notify_listeners();
        true
    }

    /// Read view of the owned collection in insertion order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    fn notify_listeners(&mut self) {
        // One snapshot per pass: listeners see a copy, never the owned vec.
        let snapshot = self.projects.clone();
        for listener in &mut self.listeners {
            listener(&snapshot);
        }
    }
}
