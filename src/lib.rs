// Weeknote - weekly note rotation
// Archives last week's note and starts a fresh one for the current week

pub mod cli;
pub mod models;
pub mod services;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use models::{NoteLayout, NoteName, Week, WeeknoteConfig};
pub use services::{NoteError, WeeklyReport};
