//! Weekly service - rotates last week's note and creates this week's
//!
//! Both steps are idempotent: a second run in the same week finds nothing to
//! move and a note already in place.

use super::fs_service::{create_note, ensure_dir, move_note, note_exists, NoteError, NoteResult};
use crate::models::{NoteName, Week, WeeknoteConfig};
use chrono::NaiveDate;
use serde::Serialize;
use std::path::PathBuf;

/// What happened to last week's note
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Rotation {
    Rotated {
        file_name: String,
        from: PathBuf,
        to: PathBuf,
    },
    NothingToRotate {
        path: PathBuf,
    },
}

/// What happened to this week's note
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Creation {
    Created { file_name: String, path: PathBuf },
    AlreadyPresent { path: PathBuf },
}

/// Outcome of a full run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyReport {
    pub today: NaiveDate,
    pub rotation: Rotation,
    pub creation: Creation,
}

impl WeeklyReport {
    /// True when the run touched the filesystem.
    pub fn changed_anything(&self) -> bool {
        matches!(self.rotation, Rotation::Rotated { .. })
            || matches!(self.creation, Creation::Created { .. })
    }
}

/// This week and the one before it.
fn weeks_around(today: NaiveDate) -> NoteResult<(Week, Week)> {
    Week::containing(today)
        .and_then(|current| current.previous().map(|previous| (current, previous)))
        .ok_or(NoteError::DateOutOfRange { date: today })
}

/// Step A: move the previous week's note into the rotation directory.
///
/// Only the week immediately before `today` is considered. An archived note
/// with the same name is replaced.
pub fn rotate_previous_week(config: &WeeknoteConfig, today: NaiveDate) -> NoteResult<Rotation> {
    let (_, previous) = weeks_around(today)?;
    let name = previous.note_name();
    let from = config.note_path(&name);

    if !note_exists(&from)? {
        return Ok(Rotation::NothingToRotate { path: from });
    }

    let to = config.archive_path(&name);
    move_note(&from, &to)?;

    Ok(Rotation::Rotated {
        file_name: name.file_name(),
        from,
        to,
    })
}

/// Step B: create the current week's note if it does not exist yet.
pub fn ensure_current_week(config: &WeeknoteConfig, today: NaiveDate) -> NoteResult<Creation> {
    let (current, _) = weeks_around(today)?;
    let name = current.note_name();
    let path = config.note_path(&name);

    if note_exists(&path)? {
        return Ok(Creation::AlreadyPresent { path });
    }

    create_note(&path, &config.layout.render(&name))?;

    Ok(Creation::Created {
        file_name: name.file_name(),
        path,
    })
}

/// Check the notes root (and with `create_dirs`, the rotation directory).
pub fn prepare_dirs(config: &WeeknoteConfig) -> NoteResult<()> {
    ensure_dir(&config.notes_dir, config.create_dirs)?;
    if config.create_dirs {
        ensure_dir(&config.rotate_path(), true)?;
    }
    Ok(())
}

/// Run both steps in order. A rotation that succeeded is kept even if
/// creating the new note fails afterwards.
pub fn run_weekly(config: &WeeknoteConfig, today: NaiveDate) -> NoteResult<WeeklyReport> {
    prepare_dirs(config)?;
    let rotation = rotate_previous_week(config, today)?;
    let creation = ensure_current_week(config, today)?;

    Ok(WeeklyReport {
        today,
        rotation,
        creation,
    })
}

/// Where one week's note is, without touching anything
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteStatus {
    pub file_name: String,
    pub week_start: NaiveDate,
    pub path: PathBuf,
    pub archive_path: PathBuf,
    pub active: bool,
    pub archived: bool,
}

impl NoteStatus {
    fn probe(config: &WeeknoteConfig, week: Week) -> NoteResult<Self> {
        let name = week.note_name();
        let path = config.note_path(&name);
        let archive_path = config.archive_path(&name);
        Ok(Self {
            file_name: name.file_name(),
            week_start: week.start(),
            active: note_exists(&path)?,
            archived: note_exists(&archive_path)?,
            path,
            archive_path,
        })
    }
}

/// Read-only view of the notes root for a given day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekStatus {
    pub today: NaiveDate,
    pub notes_dir: PathBuf,
    pub rotate_dir: PathBuf,
    pub current: NoteStatus,
    pub previous: NoteStatus,
    /// Notes in the root older than last week. Rotation never reaches these.
    pub stale: Vec<String>,
}

pub fn inspect(config: &WeeknoteConfig, today: NaiveDate) -> NoteResult<WeekStatus> {
    ensure_dir(&config.notes_dir, false)?;

    let (current, previous) = weeks_around(today)?;

    Ok(WeekStatus {
        today,
        notes_dir: config.notes_dir.clone(),
        rotate_dir: config.rotate_path(),
        current: NoteStatus::probe(config, current)?,
        previous: NoteStatus::probe(config, previous)?,
        stale: stale_notes(config, today, previous.start())?,
    })
}

fn stale_notes(
    config: &WeeknoteConfig,
    today: NaiveDate,
    before: NaiveDate,
) -> NoteResult<Vec<String>> {
    let read_err = |source: std::io::Error| NoteError::Stat {
        path: config.notes_dir.clone(),
        source,
    };

    let mut names = Vec::new();
    for entry in std::fs::read_dir(&config.notes_dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        if !entry.file_type().map_err(read_err)?.is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy().to_string();
        if let Ok(name) = NoteName::parse_near(&file_name, today) {
            if name.date() < before {
                names.push(name);
            }
        }
    }

    names.sort();
    Ok(names.iter().map(NoteName::file_name).collect())
}
