//! Core data model shared across the catalog and search subsystems.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for one of the two backing lecture datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DatasetKey {
    Majors,
    LiberalArts,
}

impl DatasetKey {
    /// Returns the wire identifier for this dataset ("majors" / "liberal-arts").
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetKey::Majors => "majors",
            DatasetKey::LiberalArts => "liberal-arts",
        }
    }
}

impl fmt::Display for DatasetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single catalog entry.
///
/// `id` is the catalog key but is not guaranteed unique across the two
/// datasets; duplicates are tolerated and both copies are retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lecture {
    pub id: String,
    pub title: String,
    pub major: String,
    pub grade: u8,
    /// Textual credits, e.g. "3" or "3-1".
    pub credits: String,
    /// Compact schedule encoding; `None` means no fixed schedule.
    #[serde(default)]
    pub schedule: Option<String>,
}

/// Weekday code used by the schedule encoding and the day filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayCode {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl DayCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayCode::Mon => "Mon",
            DayCode::Tue => "Tue",
            DayCode::Wed => "Wed",
            DayCode::Thu => "Thu",
            DayCode::Fri => "Fri",
            DayCode::Sat => "Sat",
        }
    }

    /// Parses a day token from the schedule encoding.
    pub fn parse(token: &str) -> Option<DayCode> {
        match token {
            "Mon" => Some(DayCode::Mon),
            "Tue" => Some(DayCode::Tue),
            "Wed" => Some(DayCode::Wed),
            "Thu" => Some(DayCode::Thu),
            "Fri" => Some(DayCode::Fri),
            "Sat" => Some(DayCode::Sat),
            _ => None,
        }
    }
}

impl fmt::Display for DayCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One contiguous scheduled block derived from a lecture's raw schedule.
///
/// `range` lists every 30-minute slot id the block occupies, ascending and
/// gap-free, and is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub day: DayCode,
    pub range: Vec<u32>,
    /// Room captured from the parenthesized suffix, when present.
    pub room: Option<String>,
}

/// A parsed slot tagged with its originating lecture, ready to be appended
/// to a timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedSlot {
    pub lecture: Lecture,
    pub slot: ScheduleSlot,
}

/// Search context supplied by the host when a search is opened, optionally
/// pre-seeding the day/time filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchContext {
    pub table_id: String,
    #[serde(default)]
    pub day: Option<DayCode>,
    #[serde(default)]
    pub time: Option<u32>,
}

/// The 30-minute slot grid: `(slot id, label)` pairs, ids 1..=24.
pub const TIME_SLOTS: [(u32, &str); 24] = [
    (1, "09:00~09:30"),
    (2, "09:30~10:00"),
    (3, "10:00~10:30"),
    (4, "10:30~11:00"),
    (5, "11:00~11:30"),
    (6, "11:30~12:00"),
    (7, "12:00~12:30"),
    (8, "12:30~13:00"),
    (9, "13:00~13:30"),
    (10, "13:30~14:00"),
    (11, "14:00~14:30"),
    (12, "14:30~15:00"),
    (13, "15:00~15:30"),
    (14, "15:30~16:00"),
    (15, "16:00~16:30"),
    (16, "16:30~17:00"),
    (17, "17:00~17:30"),
    (18, "17:30~18:00"),
    (19, "18:00~18:50"),
    (20, "18:55~19:45"),
    (21, "19:50~20:40"),
    (22, "20:45~21:35"),
    (23, "21:40~22:30"),
    (24, "22:35~23:25"),
];

/// Largest valid time slot id.
pub const MAX_TIME_SLOT_ID: u32 = TIME_SLOTS.len() as u32;
