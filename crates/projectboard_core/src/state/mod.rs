//! Board state ownership and change notification.
//!
//! # Responsibility
//! - Own the authoritative project collection for the application.
//! - Keep every other component on derived, recomputed views.
//!
//! # Invariants
//! - All mutation goes through `ProjectState`; no other component may
//!   touch the collection directly.
//! - Notification is synchronous within the mutating call.

pub mod project_state;
