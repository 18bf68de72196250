//! Single project card.
//!
//! # Responsibility
//! - Render one project's title, headcount phrase, and description.
//! - Originate drag transfers carrying the project id.
//!
//! # Invariants
//! - The card never mutates board state; moves go through its list's
//!   drop handling.

use log::debug;
use projectboard_core::Project;
use ratatui::layout::{Constraint, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::{Component, DragEffect, DragPayload, SharedProjectState, MIME_TEXT_PLAIN};

/// Card rows: title, headcount phrase, description, separator.
const CARD_HEIGHT: u16 = 4;

pub struct ProjectItem {
    project: Project,
    /// Last rendered area, recorded for mouse hit-testing.
    area: Rect,
}

impl ProjectItem {
    pub fn new(project: Project) -> Self {
        Self {
            project,
            area: Rect::default(),
        }
    }

    /// Whether the position falls inside the last rendered card area.
    pub fn hit(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }

    /// Drag-source entry: builds the plain-text transfer payload carrying
    /// the project id and permits the `Move` effect.
    pub fn drag_start(&self) -> DragPayload {
        debug!("event=drag_start module=ui id={}", self.project.id);
        DragPayload {
            mime: MIME_TEXT_PLAIN,
            data: self.project.id.to_string(),
            effect: DragEffect::Move,
        }
    }

    /// Drag-source exit: informational only, no state change.
    pub fn drag_end(&self) {
        debug!("event=drag_end module=ui id={}", self.project.id);
    }

    fn headcount_phrase(&self) -> String {
        format!("{} assigned", self.project.persons_label())
    }
}

impl Component for ProjectItem {
    fn constraint(&self) -> Constraint {
        Constraint::Length(CARD_HEIGHT)
    }

    fn configure(&mut self, _state: &SharedProjectState) {}

    fn render_content(&mut self, frame: &mut Frame, area: Rect) {
        self.area = area;
        let lines = vec![
            Line::from(Span::styled(
                self.project.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(self.headcount_phrase()),
            Line::from(self.project.description.clone()),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }
}

#[cfg(test)]
mod tests {
    use super::{DragEffect, ProjectItem, MIME_TEXT_PLAIN};
    use projectboard_core::Project;

    #[test]
    fn drag_start_builds_plain_text_move_payload() {
        let project = Project::new("Build site", "Make a site", 3);
        let item = ProjectItem::new(project.clone());

        let payload = item.drag_start();

        assert_eq!(payload.mime, MIME_TEXT_PLAIN);
        assert_eq!(payload.data, project.id.to_string());
        assert_eq!(payload.effect, DragEffect::Move);
    }

    #[test]
    fn headcount_phrase_pluralizes_at_the_boundary() {
        let three = ProjectItem::new(Project::new("Build site", "Make a site", 3));
        assert_eq!(three.headcount_phrase(), "3 persons assigned");

        let one = ProjectItem::new(Project::new("t", "d", 1));
        assert_eq!(one.headcount_phrase(), "1 person assigned");

        let zero = ProjectItem::new(Project::new("t", "d", 0));
        assert_eq!(zero.headcount_phrase(), "0 persons assigned");
    }

    #[test]
    fn unrendered_card_hits_nothing() {
        let item = ProjectItem::new(Project::new("t", "d", 1));
        assert!(!item.hit(0, 0));
        assert!(!item.hit(10, 10));
    }
}
