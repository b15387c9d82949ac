use super::note::NoteName;
use chrono::{Datelike, Days, NaiveDate};

/// Number of days between a date and the Sunday that starts its week.
///
/// Sunday is 0, Saturday is 6.
pub fn weekday_offset(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// A Sunday-to-Saturday week, identified by its starting Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Week {
    start: NaiveDate,
}

impl Week {
    /// The week that contains `date`, or `None` when its Sunday falls before
    /// the earliest representable date.
    pub fn containing(date: NaiveDate) -> Option<Self> {
        date.checked_sub_days(Days::new(u64::from(weekday_offset(date))))
            .map(|start| Self { start })
    }

    /// The Sunday that starts this week.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// The week immediately before this one.
    pub fn previous(&self) -> Option<Self> {
        self.start
            .checked_sub_days(Days::new(7))
            .map(|start| Self { start })
    }

    /// Filename of the note that belongs to this week.
    pub fn note_name(&self) -> NoteName {
        NoteName::for_date(self.start)
    }
}
