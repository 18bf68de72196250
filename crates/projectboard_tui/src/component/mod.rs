//! UI component contracts and mounting.
//!
//! # Responsibility
//! - Define the widget lifecycle seam shared by the form, the status
//!   lists, and their cards.
//! - Provide the host container that owns mounted widgets in render order.
//! - Define the drag-and-drop transfer payload between cards and lists.
//!
//! # Invariants
//! - `configure` runs exactly once per component, at mount time.
//! - Host children render top to bottom in mount order: `First` prepends,
//!   `Last` appends.
//! - Event handlers are inherent methods on their owning struct, so a
//!   handler can never lose its instance.

pub mod project_input;
pub mod project_item;
pub mod project_list;

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{KeyEvent, MouseEvent};
use projectboard_core::ProjectState;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

/// Board state handle shared across UI components on the single UI thread.
///
/// Explicitly constructed by the app and injected at mount time; components
/// never reach for a global instance.
pub type SharedProjectState = Rc<RefCell<ProjectState>>;

/// MIME type carried by project card transfers. Drop targets accept
/// nothing else.
pub const MIME_TEXT_PLAIN: &str = "text/plain";

/// Transfer effect permitted for a drag operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEffect {
    Move,
}

/// In-flight drag-and-drop transfer payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    pub mime: &'static str,
    /// Carried data: the dragged project's id string.
    pub data: String,
    pub effect: DragEffect,
}

/// Result of offering an event to a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Not for this component; keep offering.
    Ignored,
    /// Handled; stop propagation.
    Consumed,
    /// Handled; the app must raise the blocking alert with this message.
    Alert(&'static str),
}

/// Widget lifecycle contract.
///
/// `configure` wires subscriptions and event state once at mount time;
/// `render_content` draws into the area the host assigned. Event hooks
/// default to no-ops so purely presentational widgets only implement the
/// lifecycle methods.
pub trait Component {
    /// Vertical space this component claims inside its host.
    fn constraint(&self) -> Constraint;

    /// Wires event handling and state subscriptions.
    fn configure(&mut self, state: &SharedProjectState);

    /// Draws the component into `area`.
    fn render_content(&mut self, frame: &mut Frame, area: Rect);

    /// Handles one key event.
    fn on_key(&mut self, _key: KeyEvent, _state: &SharedProjectState) -> EventOutcome {
        EventOutcome::Ignored
    }

    /// Handles one mouse event, with access to the app-level drag context.
    fn on_mouse(
        &mut self,
        _mouse: MouseEvent,
        _drag: &mut Option<DragPayload>,
        _state: &SharedProjectState,
    ) {
    }
}

/// Insertion position within a host container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    First,
    Last,
}

/// Ordered container of mounted components.
#[derive(Default)]
pub struct Host {
    children: Vec<Box<dyn Component>>,
}

impl Host {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts one component: runs its `configure` hook, then inserts it at
    /// the requested position.
    pub fn mount(
        &mut self,
        mut component: Box<dyn Component>,
        position: InsertPosition,
        state: &SharedProjectState,
    ) {
        component.configure(state);
        match position {
            InsertPosition::First => self.children.insert(0, component),
            InsertPosition::Last => self.children.push(component),
        }
    }

    /// Renders all children top to bottom in mount order.
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let constraints: Vec<Constraint> = self
            .children
            .iter()
            .map(|child| child.constraint())
            .collect();
        let slots = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);
        for (child, slot) in self.children.iter_mut().zip(slots.iter()) {
            child.render_content(frame, *slot);
        }
    }

    /// Offers a key event to children in mount order until one takes it.
    pub fn dispatch_key(&mut self, key: KeyEvent, state: &SharedProjectState) -> EventOutcome {
        for child in &mut self.children {
            match child.on_key(key, state) {
                EventOutcome::Ignored => continue,
                outcome => return outcome,
            }
        }
        EventOutcome::Ignored
    }

    /// Offers a mouse event to every child; hit-testing decides relevance.
    pub fn dispatch_mouse(
        &mut self,
        mouse: MouseEvent,
        drag: &mut Option<DragPayload>,
        state: &SharedProjectState,
    ) {
        for child in &mut self.children {
            child.on_mouse(mouse, drag, state);
        }
    }
}
