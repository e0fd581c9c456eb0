use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wall-clock time of day with minute precision ("HH:MM").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    minutes: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid clock time '{0}', expected HH:MM")]
pub struct ParseClockTimeError(pub String);

impl ClockTime {
    pub const fn hm(hour: u8, minute: u8) -> Self {
        Self {
            minutes: hour as u16 * 60 + minute as u16,
        }
    }

    pub fn hour(&self) -> u8 {
        (self.minutes / 60) as u8
    }

    pub fn minute(&self) -> u8 {
        (self.minutes % 60) as u8
    }

    /// Seconds are truncated.
    pub fn from_naive_time(time: NaiveTime) -> Self {
        Self::hm(time.hour() as u8, time.minute() as u8)
    }
}

impl FromStr for ClockTime {
    type Err = ParseClockTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map(Self::from_naive_time)
            .map_err(|_| ParseClockTimeError(s.to_string()))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// One daily lesson period. `start` is inclusive, `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimeSlot {
    pub start: ClockTime,
    pub end: ClockTime,
}

impl TimeSlot {
    pub const fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, time: ClockTime) -> bool {
        self.start <= time && time < self.end
    }

    /// True when a lesson's raw start/end strings are exactly this slot.
    pub fn matches(&self, start: &str, end: &str) -> bool {
        start.parse::<ClockTime>().ok() == Some(self.start)
            && end.parse::<ClockTime>().ok() == Some(self.end)
    }
}

const fn slot(sh: u8, sm: u8, eh: u8, em: u8) -> TimeSlot {
    TimeSlot::new(ClockTime::hm(sh, sm), ClockTime::hm(eh, em))
}

pub const TIME_SLOTS: [TimeSlot; 14] = [
    slot(8, 30, 9, 20),
    slot(9, 30, 10, 20),
    slot(10, 30, 11, 20),
    slot(11, 30, 12, 20),
    slot(12, 30, 13, 20),
    slot(13, 30, 14, 20),
    slot(14, 30, 15, 20),
    slot(15, 30, 16, 20),
    slot(16, 30, 17, 20),
    slot(17, 30, 18, 20),
    slot(18, 30, 19, 20),
    slot(19, 30, 20, 20),
    slot(20, 30, 21, 20),
    slot(21, 30, 22, 20),
];

pub fn first_slot() -> TimeSlot {
    TIME_SLOTS[0]
}

/// Resolves a clock time to the lesson period it belongs to.
///
/// Times inside a period (or exactly on its start) resolve to that period.
/// Only a time later than the end of the last period yields `None`; any
/// other unmatched time (before opening, in a break, exactly at closing)
/// falls back to the first period.
pub fn find_slot_for(time: ClockTime) -> Option<TimeSlot> {
    if let Some(slot) = TIME_SLOTS
        .iter()
        .copied()
        .find(|slot| slot.contains(time) || slot.start == time)
    {
        return Some(slot);
    }
    if time > TIME_SLOTS[TIME_SLOTS.len() - 1].end {
        return None;
    }
    Some(first_slot())
}

/// First period starting strictly after `time`, if any remain today.
pub fn next_slot_after(time: ClockTime) -> Option<TimeSlot> {
    TIME_SLOTS.iter().copied().find(|slot| slot.start > time)
}

/// First period starting at or after `time`, falling back to the first one.
pub fn nearest_slot_from(time: ClockTime) -> TimeSlot {
    TIME_SLOTS
        .iter()
        .copied()
        .find(|slot| time <= slot.start)
        .unwrap_or_else(first_slot)
}
