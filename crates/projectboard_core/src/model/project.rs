//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical project record shared by board state and UI.
//! - Provide the headcount phrase used by card rendering.
//!
//! # Invariants
//! - `id` is stable and never reused for another project.
//! - A project carries exactly one status at any time.
//! - Projects are never deleted; they only move between statuses.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every project on the board.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ProjectId = Uuid;

/// Board column a project belongs to.
///
/// Exactly two statuses exist; together they partition the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Work is planned or ongoing.
    Active,
    /// Work is done; the project stays on the board.
    Finished,
}

impl ProjectStatus {
    /// Stable lowercase name used for list headers and log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

/// Canonical record for one unit of work on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable global ID used for drag transfers and listener snapshots.
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Headcount assigned to the project. The form enforces a minimum of
    /// one before a project is created.
    pub people: u32,
    pub status: ProjectStatus,
}

impl Project {
    /// Creates a new project with a generated stable ID and `Active` status.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), title, description, people)
    }

    /// Creates a new project with a caller-provided stable ID.
    ///
    /// Used by tests and fixtures where identity must be deterministic.
    ///
    /// # Invariants
    /// - The provided `id` must remain stable for this project's lifetime.
    pub fn with_id(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }

    /// Pluralized headcount phrase: `1 person`, otherwise `<N> persons`.
    ///
    /// The singular/plural boundary sits exactly at one; zero pluralizes.
    pub fn persons_label(&self) -> String {
        if self.people == 1 {
            "1 person".to_string()
        } else {
            format!("{} persons", self.people)
        }
    }
}
