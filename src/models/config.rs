use super::note::{NoteLayout, NoteName};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

pub const DEFAULT_ROTATE_DIR: &str = "weekly";
const DEFAULT_NOTES_SUBDIR: &str = "notes";

/// Weeknote configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeeknoteConfig {
    /// Root directory holding the current note and the rotation directory
    pub notes_dir: PathBuf,

    /// Subdirectory of `notes_dir` that past notes are moved into
    pub rotate_dir: String,

    /// Initial content layout for new notes
    pub layout: NoteLayout,

    /// Create `notes_dir` and the rotation directory when missing
    pub create_dirs: bool,
}

impl Default for WeeknoteConfig {
    fn default() -> Self {
        Self {
            notes_dir: default_notes_dir(),
            rotate_dir: DEFAULT_ROTATE_DIR.to_string(),
            layout: NoteLayout::default(),
            create_dirs: false,
        }
    }
}

impl WeeknoteConfig {
    /// Load config from a TOML file. Missing keys fall back to defaults.
    pub fn load(config_path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        let mut config: WeeknoteConfig = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", config_path.display()))?;
        config.notes_dir = expand_home(&config.notes_dir);
        Ok(config)
    }

    /// Reject rotation directories that would escape the notes root.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.notes_dir.as_os_str().is_empty() {
            anyhow::bail!("notes directory cannot be empty");
        }

        let rotate = Path::new(&self.rotate_dir);
        if self.rotate_dir.trim().is_empty() {
            anyhow::bail!("rotate directory cannot be empty");
        }
        if rotate
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            anyhow::bail!(
                "rotate directory '{}' must be a relative path inside the notes directory",
                self.rotate_dir
            );
        }
        Ok(())
    }

    pub fn rotate_path(&self) -> PathBuf {
        self.notes_dir.join(&self.rotate_dir)
    }

    /// Where an active note lives.
    pub fn note_path(&self, name: &NoteName) -> PathBuf {
        self.notes_dir.join(name.file_name())
    }

    /// Where a rotated note lives.
    pub fn archive_path(&self, name: &NoteName) -> PathBuf {
        self.rotate_path().join(name.file_name())
    }
}

/// `<documents>/notes`, falling back to `<home>/notes`, then `./notes`.
pub fn default_notes_dir() -> PathBuf {
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .map(|dir| dir.join(DEFAULT_NOTES_SUBDIR))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_NOTES_SUBDIR))
}

fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}
