//! Arguments shared by every weeknote command

use crate::models::{NoteLayout, WeeknoteConfig};
use crate::Result;
use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Default)]
pub struct NotesArgs {
    /// Root notes directory
    #[arg(long = "notesdir", value_name = "PATH", global = true)]
    pub notes_dir: Option<PathBuf>,

    /// Directory within the notes root to rotate notes into [default: weekly]
    #[arg(long = "rotatedir", value_name = "NAME", global = true)]
    pub rotate_dir: Option<String>,

    /// TOML file with notes_dir, rotate_dir, layout and create_dirs
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Compute weeks from this day instead of today
    #[arg(long, value_name = "YYYY-MM-DD", global = true)]
    pub date: Option<NaiveDate>,

    /// Create the notes and rotation directories when missing
    #[arg(long, global = true)]
    pub create_dirs: bool,

    /// Write new notes in the legacy heading layout
    #[arg(long, global = true)]
    pub legacy_layout: bool,
}

impl NotesArgs {
    /// Flags override the config file, which overrides built-in defaults.
    pub fn resolve(&self) -> Result<WeeknoteConfig> {
        let mut config = match &self.config {
            Some(path) => WeeknoteConfig::load(path)?,
            None => WeeknoteConfig::default(),
        };

        if let Some(notes_dir) = &self.notes_dir {
            config.notes_dir = notes_dir.clone();
        }
        if let Some(rotate_dir) = &self.rotate_dir {
            config.rotate_dir = rotate_dir.clone();
        }
        if self.create_dirs {
            config.create_dirs = true;
        }
        if self.legacy_layout {
            config.layout = NoteLayout::Legacy;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn today(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}
