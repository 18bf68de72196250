//! Application shell and event loop.
//!
//! # Responsibility
//! - Own board state, the component host, and the drag/alert context.
//! - Drive the terminal: setup, draw-then-poll loop, restore.
//!
//! # Invariants
//! - Terminal setup failure is fatal: the application does not start.
//! - While the alert is visible it swallows every event except its
//!   dismissal.
//! - The drag context clears on button release, whether or not a drop
//!   target accepted the transfer.

use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use log::info;
use projectboard_core::{ProjectState, ProjectStatus};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::{Frame, Terminal};

use crate::component::project_input::ProjectInput;
use crate::component::project_list::ProjectList;
use crate::component::{
    DragPayload, EventOutcome, Host, InsertPosition, SharedProjectState,
};

/// Fatal startup/teardown error for the terminal UI.
#[derive(Debug)]
pub enum UiError {
    Io(io::Error),
}

impl Display for UiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "terminal failure: {err}"),
        }
    }
}

impl Error for UiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for UiError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

pub struct App {
    state: SharedProjectState,
    host: Host,
    drag: Option<DragPayload>,
    alert: Option<&'static str>,
    should_quit: bool,
}

impl App {
    /// Builds the board: one explicitly constructed state handed to every
    /// mounted component. Mount order fixes the on-screen order: the input
    /// form first, then the two status lists.
    pub fn new() -> Self {
        let state: SharedProjectState = Rc::new(RefCell::new(ProjectState::new()));
        let mut host = Host::new();
        host.mount(
            Box::new(ProjectList::new(ProjectStatus::Active)),
            InsertPosition::Last,
            &state,
        );
        host.mount(
            Box::new(ProjectList::new(ProjectStatus::Finished)),
            InsertPosition::Last,
            &state,
        );
        host.mount(Box::new(ProjectInput::new()), InsertPosition::First, &state);
        Self {
            state,
            host,
            drag: None,
            alert: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn render(&mut self, frame: &mut Frame) {
        self.host.render(frame, frame.area());
        if let Some(message) = self.alert {
            render_alert(frame, message);
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        if self.alert.is_some() {
            // Blocking alert: nothing else happens until it is dismissed.
            if let Event::Key(key) = event {
                if key.kind == KeyEventKind::Press
                    && matches!(key.code, KeyCode::Enter | KeyCode::Esc)
                {
                    self.alert = None;
                }
            }
            return;
        }
        match event {
            Event::Key(key)
                if key.kind == KeyEventKind::Press || key.kind == KeyEventKind::Repeat =>
            {
                self.handle_key(key)
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let is_quit = key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL));
        if is_quit {
            self.should_quit = true;
            return;
        }
        match self.host.dispatch_key(key, &self.state) {
            EventOutcome::Alert(message) => self.alert = Some(message),
            EventOutcome::Consumed | EventOutcome::Ignored => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        self.host.dispatch_mouse(mouse, &mut self.drag, &self.state);
        if matches!(mouse.kind, MouseEventKind::Up(MouseButton::Left)) {
            // The transfer ends on release regardless of where the pointer
            // landed; the native drag lifecycle has no other exit.
            self.drag = None;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn render_alert(frame: &mut Frame, message: &str) {
    let area = alert_area(frame.area());
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Alert")
        .style(Style::default().add_modifier(Modifier::BOLD));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let lines = vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from("Press Enter to continue"),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn alert_area(area: Rect) -> Rect {
    let width = area.width.min(44);
    let height = area.height.min(5);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

/// Configures the terminal, runs the event loop, restores the terminal.
///
/// Setup failures return `UiError` and the application does not start.
pub fn run() -> Result<(), UiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Restore the terminal on panic before the default hook reports it.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new();
    info!("event=ui_start module=tui status=ok");
    let result = run_event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), UiError> {
    loop {
        terminal.draw(|frame| app.render(frame))?;
        if event::poll(Duration::from_millis(250))? {
            app.handle_event(event::read()?);
        }
        if app.should_quit() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::App;
    use crate::component::project_input::INVALID_INPUT_ALERT;
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_event(press(KeyCode::Char(c)));
        }
    }

    #[test]
    fn submitting_empty_form_raises_blocking_alert_until_dismissed() {
        let mut app = App::new();

        app.handle_event(press(KeyCode::Enter));
        assert_eq!(app.alert, Some(INVALID_INPUT_ALERT));

        // Blocked: typing changes nothing while the alert is up.
        app.handle_event(press(KeyCode::Char('x')));
        assert_eq!(app.alert, Some(INVALID_INPUT_ALERT));

        app.handle_event(press(KeyCode::Enter));
        assert_eq!(app.alert, None);
    }

    #[test]
    fn full_form_submission_reaches_board_state() {
        let mut app = App::new();

        type_text(&mut app, "Build site");
        app.handle_event(press(KeyCode::Tab));
        type_text(&mut app, "Make a site");
        app.handle_event(press(KeyCode::Tab));
        type_text(&mut app, "3");
        app.handle_event(press(KeyCode::Enter));

        assert_eq!(app.alert, None);
        let board = app.state.borrow();
        assert_eq!(board.projects().len(), 1);
        assert_eq!(board.projects()[0].title, "Build site");
        assert_eq!(board.projects()[0].people, 3);
    }

    #[test]
    fn escape_quits_when_no_alert_is_up() {
        let mut app = App::new();
        app.handle_event(press(KeyCode::Esc));
        assert!(app.should_quit());
    }
}
