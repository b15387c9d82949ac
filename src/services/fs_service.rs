//! Filesystem primitives for weekly notes
//!
//! Every operation maps its `io::Error` into a `NoteError` that names the
//! path involved. "Not found" during an existence check is not an error.
//! The io error is kept as the error source and is not repeated in the
//! message, so printing the chain shows it once.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Result type for note filesystem operations
pub type NoteResult<T> = Result<T, NoteError>;

/// Errors that can occur while rotating or creating notes
#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    #[error("Failed to check {}", path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Notes directory does not exist: {}", path.display())]
    MissingNotesDir { path: PathBuf },

    #[error("Notes path is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Failed to create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to move {} to {}", from.display(), to.display())]
    Move {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Date {date} is out of range for week computation")]
    DateOutOfRange { date: chrono::NaiveDate },

    #[error("Failed to create {}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Whether `path` exists. Only "not found" maps to `false`.
///
/// Symlinks are followed: a dangling link counts as absent, and a later
/// `create_note` on it fails because the link itself is in the way.
pub fn note_exists(path: &Path) -> NoteResult<bool> {
    match std::fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(NoteError::Stat {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Make sure `dir` is an existing directory, creating it when `create` is set.
pub fn ensure_dir(dir: &Path, create: bool) -> NoteResult<()> {
    match std::fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(NoteError::NotADirectory {
            path: dir.to_path_buf(),
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            if !create {
                return Err(NoteError::MissingNotesDir {
                    path: dir.to_path_buf(),
                });
            }
            std::fs::create_dir_all(dir).map_err(|source| NoteError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })
        }
        Err(source) => Err(NoteError::Stat {
            path: dir.to_path_buf(),
            source,
        }),
    }
}

/// Move a note into the archive, replacing an archived note of the same name.
pub fn move_note(from: &Path, to: &Path) -> NoteResult<()> {
    std::fs::rename(from, to).map_err(|source| NoteError::Move {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}

/// Create a new note and write its initial content.
///
/// Creation is exclusive: if the file appeared since the existence check the
/// call fails instead of appending to it. This includes a dangling symlink at
/// `path`: the link is not followed. A file that was created but could not be
/// written is left in place.
pub fn create_note(path: &Path, content: &str) -> NoteResult<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| NoteError::Create {
            path: path.to_path_buf(),
            source,
        })?;

    file.write_all(content.as_bytes())
        .and_then(|_| file.flush())
        .map_err(|source| NoteError::Write {
            path: path.to_path_buf(),
            source,
        })
}
