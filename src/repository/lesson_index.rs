use std::collections::{BTreeMap, BTreeSet};

use crate::models::{ClockTime, DayOfWeek, LessonOccupancy};

/// Lessons grouped by room, in load order within each room.
#[derive(Debug, Clone, Default)]
pub struct LessonIndex {
    by_room: BTreeMap<u32, Vec<LessonOccupancy>>,
    len: usize,
}

impl LessonIndex {
    pub fn new(lessons: Vec<LessonOccupancy>) -> Self {
        let len = lessons.len();
        let mut by_room: BTreeMap<u32, Vec<LessonOccupancy>> = BTreeMap::new();
        for lesson in lessons {
            by_room.entry(lesson.room_id).or_default().push(lesson);
        }
        Self { by_room, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Every lesson held in the room, including ones that do not line up
    /// with a canonical period. Unknown rooms yield an empty slice.
    pub fn get_schedule_for_room(&self, room_id: u32) -> &[LessonOccupancy] {
        self.by_room.get(&room_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Rooms with a lesson on `day` starting exactly at `start`.
    ///
    /// Lessons are stored already cut to period boundaries, so only the
    /// period start is compared, never an overlap.
    pub fn get_occupied_rooms(&self, day: DayOfWeek, start: ClockTime) -> BTreeSet<u32> {
        self.by_room
            .iter()
            .filter(|(_, lessons)| {
                lessons
                    .iter()
                    .any(|l| l.is_on(day) && starts_at(l, start))
            })
            .map(|(room_id, _)| *room_id)
            .collect()
    }
}

fn starts_at(lesson: &LessonOccupancy, start: ClockTime) -> bool {
    lesson.start_time.parse::<ClockTime>().ok() == Some(start)
}
