//! Core domain logic for the project board.
//! This crate is the single source of truth for board invariants.

pub mod logging;
pub mod model;
pub mod state;
pub mod validation;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{Project, ProjectId, ProjectStatus};
pub use state::project_state::{Listener, ProjectState};
pub use validation::{validate, Validatable, ValidatableValue};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
