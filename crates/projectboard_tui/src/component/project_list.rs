//! Status column list.
//!
//! # Responsibility
//! - Subscribe to board state with this column's status filter.
//! - Rebuild the full card set on every change notification.
//! - Accept project card drops and request the status move.
//!
//! # Invariants
//! - Cards appear in the order the snapshot delivers them (insertion
//!   order), never re-sorted.
//! - Rebuild is clear-then-rebuild; there is no incremental diffing.
//! - Only plain-text payloads turn on the droppable highlight.

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use log::debug;
use projectboard_core::{Project, ProjectStatus};
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;
use uuid::Uuid;

use super::{Component, DragPayload, SharedProjectState, MIME_TEXT_PLAIN};

/// Filtered snapshot shared between the list and its state listener.
///
/// The listener owns no reference to the list itself; it writes the
/// filtered projects here and bumps the generation so the next render
/// knows a rebuild is due.
#[derive(Default)]
struct ListStore {
    projects: Vec<Project>,
    generation: u64,
}

pub struct ProjectList {
    status: ProjectStatus,
    assigned: Rc<RefCell<ListStore>>,
    items: Vec<super::project_item::ProjectItem>,
    rendered_generation: u64,
    droppable: bool,
    /// Index of the card a drag started from, while this list is the
    /// source of an in-flight transfer.
    drag_source: Option<usize>,
    area: Rect,
}

impl ProjectList {
    pub fn new(status: ProjectStatus) -> Self {
        Self {
            status,
            assigned: Rc::new(RefCell::new(ListStore::default())),
            items: Vec::new(),
            rendered_generation: 0,
            droppable: false,
            drag_source: None,
            area: Rect::default(),
        }
    }

    /// Drop-target check: accepts only plain-text payloads and turns on
    /// the droppable highlight. Returns whether the payload is accepted.
    pub fn drag_over(&mut self, payload: &DragPayload) -> bool {
        if payload.mime == MIME_TEXT_PLAIN {
            self.droppable = true;
            true
        } else {
            false
        }
    }

    /// Removes the droppable highlight.
    pub fn drag_leave(&mut self) {
        self.droppable = false;
    }

    /// Drop entry: reads the project id from the payload and asks the
    /// board state to move it into this list's status.
    pub fn drop_payload(&mut self, payload: &DragPayload, state: &SharedProjectState) {
        self.droppable = false;
        let Ok(id) = Uuid::parse_str(&payload.data) else {
            debug!(
                "event=drop_rejected module=ui status=error reason=bad_id data={}",
                payload.data
            );
            return;
        };
        state.borrow_mut().move_project(id, self.status);
    }

    /// Replaces the full card set when the filtered snapshot changed since
    /// the last render.
    fn sync_items(&mut self) {
        let store = self.assigned.borrow();
        if store.generation == self.rendered_generation {
            return;
        }
        self.items = store
            .projects
            .iter()
            .cloned()
            .map(super::project_item::ProjectItem::new)
            .collect();
        self.rendered_generation = store.generation;
    }

    fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }
}

impl Component for ProjectList {
    fn constraint(&self) -> Constraint {
        Constraint::Min(6)
    }

    fn configure(&mut self, state: &SharedProjectState) {
        let status = self.status;
        let assigned = Rc::clone(&self.assigned);
        state.borrow_mut().add_listener(move |projects| {
            let relevant: Vec<Project> = projects
                .iter()
                .filter(|project| project.status == status)
                .cloned()
                .collect();
            let mut store = assigned.borrow_mut();
            store.projects = relevant;
            store.generation += 1;
        });
    }

    fn render_content(&mut self, frame: &mut Frame, area: Rect) {
        self.area = area;
        self.sync_items();

        let border_style = if self.droppable {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!("{} PROJECTS", self.status.as_str().to_uppercase()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let constraints: Vec<Constraint> = self
            .items
            .iter()
            .map(|item| item.constraint())
            .chain(std::iter::once(Constraint::Min(0)))
            .collect();
        let slots = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);
        for (item, slot) in self.items.iter_mut().zip(slots.iter()) {
            item.render_content(frame, *slot);
        }
    }

    fn on_mouse(
        &mut self,
        mouse: MouseEvent,
        drag: &mut Option<DragPayload>,
        state: &SharedProjectState,
    ) {
        let inside = self.contains(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if !inside {
                    return;
                }
                if let Some(index) = self
                    .items
                    .iter()
                    .position(|item| item.hit(mouse.column, mouse.row))
                {
                    *drag = Some(self.items[index].drag_start());
                    self.drag_source = Some(index);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let Some(payload) = drag.as_ref() else {
                    return;
                };
                if inside {
                    self.drag_over(payload);
                } else if self.droppable {
                    self.drag_leave();
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if inside {
                    if let Some(payload) = drag.as_ref() {
                        let payload = payload.clone();
                        self.drop_payload(&payload, state);
                    }
                }
                // The source card's drag ends on release wherever the
                // pointer is; informational only.
                if let Some(index) = self.drag_source.take() {
                    if let Some(item) = self.items.get(index) {
                        item.drag_end();
                    }
                }
                if self.droppable {
                    self.drag_leave();
                }
            }
            _ => {}
        }
    }
}
