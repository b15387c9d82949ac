use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Extension shared by every weekly note.
pub const NOTE_EXTENSION: &str = "md";

/// Day headings written into a fresh note, in order.
///
/// Saturday and Sunday share a single `weekend` heading.
pub const DAY_SEGMENTS: [&str; 6] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "weekend",
];

/// Filename of a weekly note: `YY.MM.DD.md`, named after the week's Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoteName {
    date: NaiveDate,
}

impl NoteName {
    pub fn for_date(date: NaiveDate) -> Self {
        Self { date }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// `YY.MM.DD`, used as the note's top-level heading.
    pub fn title(&self) -> String {
        format!(
            "{:02}.{:02}.{:02}",
            self.date.year().rem_euclid(100),
            self.date.month(),
            self.date.day()
        )
    }

    /// `YY.MM.DD.md`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.title(), NOTE_EXTENSION)
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

/// Error returned when a filename is not a weekly note name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a weekly note name (expected YY.MM.DD.md)")]
pub struct ParseNoteNameError(String);

impl NoteName {
    /// Parses `YY.MM.DD.md`, placing the two-digit year in the century
    /// window centred on `reference` (up to 49 years back, 50 ahead).
    pub fn parse_near(s: &str, reference: NaiveDate) -> Result<Self, ParseNoteNameError> {
        let invalid = || ParseNoteNameError(s.to_string());
        let (yy, month, day) = split_fields(s).ok_or_else(invalid)?;

        let reference_year = reference.year();
        let mut year = reference_year.div_euclid(100) * 100 + yy as i32;
        if year > reference_year + 50 {
            year -= 100;
        } else if year <= reference_year - 50 {
            year += 100;
        }

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self::for_date)
            .ok_or_else(invalid)
    }
}

impl FromStr for NoteName {
    type Err = ParseNoteNameError;

    /// Parses `YY.MM.DD.md` with every two-digit year read as 20YY. Use
    /// `parse_near` when notes may predate 2000.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseNoteNameError(s.to_string());
        let (yy, month, day) = split_fields(s).ok_or_else(invalid)?;

        NaiveDate::from_ymd_opt(2000 + yy as i32, month, day)
            .map(Self::for_date)
            .ok_or_else(invalid)
    }
}

/// `YY.MM.DD.md` into its three numeric fields.
fn split_fields(s: &str) -> Option<(u32, u32, u32)> {
    let stem = s
        .strip_suffix(NOTE_EXTENSION)
        .and_then(|rest| rest.strip_suffix('.'))?;

    let parts: Vec<&str> = stem.split('.').collect();
    if parts.len() != 3
        || parts
            .iter()
            .any(|p| p.len() != 2 || !p.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }

    Some((
        parts[0].parse().ok()?,
        parts[1].parse().ok()?,
        parts[2].parse().ok()?,
    ))
}

/// Shape of the initial content written into a new note.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteLayout {
    /// One heading per line, no stray whitespace, trailing newline.
    #[default]
    Normalized,
    /// Byte-for-byte the layout of notes written by earlier versions of the
    /// tool: trailing space on each heading, a leading space before the
    /// friday heading and no final newline.
    Legacy,
}

impl NoteLayout {
    /// Initial content for the note called `name`.
    pub fn render(&self, name: &NoteName) -> String {
        let mut lines = vec![format!("# {}", name.title())];
        lines.extend(DAY_SEGMENTS.iter().map(|day| format!("### {}", day)));

        match self {
            NoteLayout::Normalized => {
                let mut content = lines.join("\n");
                content.push('\n');
                content
            }
            NoteLayout::Legacy => {
                for line in lines.iter_mut() {
                    if line.as_str() == "### friday" {
                        line.insert(0, ' ');
                    }
                }
                lines.join(" \n")
            }
        }
    }
}
