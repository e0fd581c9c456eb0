use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Day of week as used by the timetable: 1 = Monday .. 6 = Saturday.
/// Sunday (7) is the "no classes" sentinel and never has lessons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DayOfWeek {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

const CLASS_DAYS: [DayOfWeek; 6] = [
    DayOfWeek::Monday,
    DayOfWeek::Tuesday,
    DayOfWeek::Wednesday,
    DayOfWeek::Thursday,
    DayOfWeek::Friday,
    DayOfWeek::Saturday,
];

impl DayOfWeek {
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::Monday),
            2 => Some(Self::Tuesday),
            3 => Some(Self::Wednesday),
            4 => Some(Self::Thursday),
            5 => Some(Self::Friday),
            6 => Some(Self::Saturday),
            7 => Some(Self::Sunday),
            _ => None,
        }
    }

    /// Timetable day for a calendar date: days since Monday plus one,
    /// which makes Sunday the sentinel 7.
    pub fn from_date<D: Datelike>(date: &D) -> Self {
        let id = date.weekday().num_days_from_monday() as u8 + 1;
        // num_days_from_monday is always 0..=6
        Self::from_id(id).unwrap_or(Self::Sunday)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    pub fn is_weekend(self) -> bool {
        self == Self::Sunday
    }

    /// The next day that has classes. Saturday and Sunday both wrap to Monday.
    pub fn next_class_day(self) -> Self {
        match self {
            Self::Monday => Self::Tuesday,
            Self::Tuesday => Self::Wednesday,
            Self::Wednesday => Self::Thursday,
            Self::Thursday => Self::Friday,
            Self::Friday => Self::Saturday,
            Self::Saturday | Self::Sunday => Self::Monday,
        }
    }

    pub fn class_days() -> &'static [DayOfWeek] {
        &CLASS_DAYS
    }
}

impl From<DayOfWeek> for u8 {
    fn from(day: DayOfWeek) -> Self {
        day.id()
    }
}

impl TryFrom<u8> for DayOfWeek {
    type Error = String;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::from_id(id).ok_or_else(|| format!("day must be between 1 and 7, got {}", id))
    }
}
