//! Terminal entry point for the project board.
//!
//! # Responsibility
//! - Bootstrap logging and hand control to the UI event loop.
//! - Map fatal startup errors to a non-zero exit.

mod app;
mod component;

use projectboard_core::{core_version, default_log_level, init_logging};

fn main() {
    let log_dir = std::env::temp_dir().join("projectboard").join("logs");
    // Logging is best-effort at startup: a board session is still usable
    // when the log directory cannot be prepared.
    if let Err(message) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        eprintln!("projectboard: logging disabled: {message}");
    }
    log::info!(
        "event=app_start module=tui status=ok version={}",
        core_version()
    );

    if let Err(err) = app::run() {
        eprintln!("projectboard: fatal: {err}");
        std::process::exit(1);
    }
}
