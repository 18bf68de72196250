//! Project creation form.
//!
//! # Responsibility
//! - Hold the three field buffers and the focus state.
//! - Validate on submit: alert on failure, add-and-clear on success.
//!
//! # Invariants
//! - Failed validation leaves every buffer untouched so the user can
//!   correct and resubmit.
//! - Successful submit clears all three buffers.
//! - The form performs the only validation in the pipeline; board state
//!   accepts what it is given.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use projectboard_core::{validate, Validatable, ValidatableValue};
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::{Component, EventOutcome, SharedProjectState};

/// The one user-visible failure message; not field-specific.
pub const INVALID_INPUT_ALERT: &str = "Invalid input, please try again!";

const DESCRIPTION_MIN_LENGTH: usize = 5;
const PEOPLE_MIN: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Description,
    People,
}

impl Field {
    fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::People,
            Self::People => Self::Title,
        }
    }

    fn previous(self) -> Self {
        match self {
            Self::Title => Self::People,
            Self::Description => Self::Title,
            Self::People => Self::Description,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::People => "People",
        }
    }
}

#[derive(Default)]
pub struct ProjectInput {
    title: String,
    description: String,
    people: String,
    focus: Option<Field>,
}

impl ProjectInput {
    pub fn new() -> Self {
        Self {
            focus: Some(Field::Title),
            ..Self::default()
        }
    }

    /// Submit entry: validates the three fields, then either requests the
    /// blocking alert (buffers untouched) or adds the project and clears.
    pub fn submit(&mut self, state: &SharedProjectState) -> EventOutcome {
        match self.gather_user_input() {
            Some((title, description, people)) => {
                state.borrow_mut().add_project(title, description, people);
                self.clear_input();
                EventOutcome::Consumed
            }
            None => EventOutcome::Alert(INVALID_INPUT_ALERT),
        }
    }

    /// Reads and validates the three fields.
    ///
    /// Title must be present; description must be present with at least
    /// five characters; people must convert to a number of at least one.
    /// Returns `None` when any check fails.
    fn gather_user_input(&self) -> Option<(String, String, u32)> {
        let entered_title = self.title.clone();
        let entered_description = self.description.clone();
        let entered_people = self.people.clone();

        let title_validatable = Validatable {
            value: ValidatableValue::Text(entered_title.clone()),
            required: true,
            ..Validatable::default()
        };
        let description_validatable = Validatable {
            value: ValidatableValue::Text(entered_description.clone()),
            required: true,
            min_length: Some(DESCRIPTION_MIN_LENGTH),
            ..Validatable::default()
        };
        // The people field is entered as text; the bound checks the
        // converted number. Text that does not convert maps below the
        // minimum so the bound rejects it.
        let people_number = entered_people.trim().parse::<i64>().unwrap_or(-1);
        let people_validatable = Validatable {
            value: ValidatableValue::Number(people_number),
            required: true,
            min: Some(PEOPLE_MIN),
            ..Validatable::default()
        };

        if !validate(&title_validatable)
            || !validate(&description_validatable)
            || !validate(&people_validatable)
        {
            return None;
        }

        let people = u32::try_from(people_number).ok()?;
        Some((entered_title, entered_description, people))
    }

    fn clear_input(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
    }

    fn active_buffer_mut(&mut self) -> Option<&mut String> {
        match self.focus? {
            Field::Title => Some(&mut self.title),
            Field::Description => Some(&mut self.description),
            Field::People => Some(&mut self.people),
        }
    }

    fn field_line(&self, field: Field) -> Line<'_> {
        let buffer = match field {
            Field::Title => &self.title,
            Field::Description => &self.description,
            Field::People => &self.people,
        };
        let focused = self.focus == Some(field);
        let marker = if focused { "> " } else { "  " };
        let label_style = if focused {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{:<12}", field.label()), label_style),
            Span::raw(buffer.clone()),
            Span::raw(if focused { "_" } else { "" }),
        ])
    }
}

impl Component for ProjectInput {
    fn constraint(&self) -> Constraint {
        // Three field rows plus a hint row inside the border.
        Constraint::Length(6)
    }

    fn configure(&mut self, _state: &SharedProjectState) {
        self.focus = Some(Field::Title);
    }

    fn render_content(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("New Project");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            self.field_line(Field::Title),
            self.field_line(Field::Description),
            self.field_line(Field::People),
            Line::from(Span::styled(
                "Enter submits · Tab switches field · Esc quits",
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn on_key(&mut self, key: KeyEvent, state: &SharedProjectState) -> EventOutcome {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.map(Field::next);
                EventOutcome::Consumed
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.map(Field::previous);
                EventOutcome::Consumed
            }
            KeyCode::Enter => self.submit(state),
            KeyCode::Backspace => {
                if let Some(buffer) = self.active_buffer_mut() {
                    buffer.pop();
                }
                EventOutcome::Consumed
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(buffer) = self.active_buffer_mut() {
                    buffer.push(c);
                }
                EventOutcome::Consumed
            }
            _ => EventOutcome::Ignored,
        }
    }
}
