use serde::{Deserialize, Serialize};

use crate::models::DayOfWeek;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherRef {
    pub id: String,
    pub full_name: String,
}

/// Lesson kind as coded in the timetable export (T / P / L).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LessonType {
    Lecture,
    Practice,
    Lab,
    Other(String),
}

impl LessonType {
    pub fn code(&self) -> &str {
        match self {
            LessonType::Lecture => "T",
            LessonType::Practice => "P",
            LessonType::Lab => "L",
            LessonType::Other(code) => code,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            LessonType::Lecture => "Lecture",
            LessonType::Practice => "Practice",
            LessonType::Lab => "Lab",
            LessonType::Other(code) => code,
        }
    }
}

impl From<String> for LessonType {
    fn from(code: String) -> Self {
        match code.as_str() {
            "T" => LessonType::Lecture,
            "P" => LessonType::Practice,
            "L" => LessonType::Lab,
            _ => LessonType::Other(code),
        }
    }
}

impl From<LessonType> for String {
    fn from(kind: LessonType) -> Self {
        kind.code().to_string()
    }
}

/// A scheduled lesson tying a room to a weekday and a period.
///
/// Times are kept exactly as exported so that lessons which do not line up
/// with a canonical period can still be listed for the room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonOccupancy {
    pub lesson_id: u64,
    pub room_id: u32,
    pub weekday: u8,
    pub start_time: String,
    pub end_time: String,
    pub subject_code: String,
    pub section: String,
    pub subject_name: String,
    pub subject_name_kz: Option<String>,
    pub lesson_type: LessonType,
    pub teacher: Option<TeacherRef>,
}

impl LessonOccupancy {
    pub fn day(&self) -> Option<DayOfWeek> {
        DayOfWeek::from_id(self.weekday)
    }

    pub fn is_on(&self, day: DayOfWeek) -> bool {
        self.weekday == day.id()
    }
}
