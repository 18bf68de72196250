//! Domain model for the project board.
//!
//! # Responsibility
//! - Define canonical data structures used by board state and UI.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - Status is the only field that changes after creation.

pub mod project;
