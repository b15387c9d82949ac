//! Service layer for weeknote
//!
//! Filesystem work lives here so the CLI only resolves configuration and
//! prints outcomes.

pub mod fs_service;
pub mod weekly_service;

// Re-export commonly used types
pub use fs_service::{NoteError, NoteResult};
pub use weekly_service::{
    ensure_current_week, inspect, rotate_previous_week, run_weekly, Creation, NoteStatus,
    Rotation, WeekStatus, WeeklyReport,
};
