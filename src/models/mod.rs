pub mod config;
pub mod note;
pub mod week;

pub use config::{default_notes_dir, WeeknoteConfig, DEFAULT_ROTATE_DIR};
pub use note::{NoteLayout, NoteName, ParseNoteNameError, DAY_SEGMENTS};
pub use week::{weekday_offset, Week};
