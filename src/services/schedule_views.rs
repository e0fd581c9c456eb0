use std::sync::Arc;

use serde::Serialize;

use crate::models::time_slot::nearest_slot_from;
use crate::models::{ClockTime, DayOfWeek, LessonOccupancy, Room, RoomSummary, TIME_SLOTS, TimeSlot};
use crate::services::RoomService;

/// Autocomplete needs at least this many characters.
pub const COMPACT_SEARCH_MIN_LEN: usize = 2;
pub const COMPACT_SEARCH_LIMIT: usize = 20;

#[derive(Debug, Clone, Serialize)]
pub struct DayEntry {
    pub id: u8,
    pub name: &'static str,
}

impl From<DayOfWeek> for DayEntry {
    fn from(day: DayOfWeek) -> Self {
        Self {
            id: day.id(),
            name: day.name(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GridCell {
    pub day: DayOfWeek,
    pub lesson: Option<LessonOccupancy>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GridRow {
    pub slot: TimeSlot,
    pub cells: Vec<GridCell>,
}

/// Period × class-day grid of a room's timetable.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleGrid {
    pub room: Room,
    pub rows: Vec<GridRow>,
}

impl ScheduleGrid {
    pub fn cell(&self, slot: &TimeSlot, day: DayOfWeek) -> Option<&LessonOccupancy> {
        self.rows
            .iter()
            .find(|row| row.slot == *slot)
            .and_then(|row| row.cells.iter().find(|c| c.day == day))
            .and_then(|c| c.lesson.as_ref())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DaySchedule {
    pub day: DayOfWeek,
    pub day_name: &'static str,
    pub lessons: Vec<LessonOccupancy>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListingView {
    pub day: DayOfWeek,
    pub day_name: &'static str,
    pub time: ClockTime,
    pub building: Option<String>,
    pub rooms: Vec<Room>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NowView {
    pub is_weekend: bool,
    pub day: DayOfWeek,
    /// Empty on the weekend.
    pub day_name: &'static str,
    pub time: ClockTime,
    pub rooms: Vec<Room>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NextView {
    pub day: DayOfWeek,
    pub day_name: &'static str,
    pub time: ClockTime,
    pub rooms: Vec<Room>,
}

/// Read views over the room service, shaped for the HTTP layer.
pub struct ScheduleViews {
    service: Arc<RoomService>,
}

impl ScheduleViews {
    pub fn new(service: Arc<RoomService>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &RoomService {
        &self.service
    }

    pub fn room(&self, room_id: u32) -> Option<Room> {
        self.service.rooms().get_by_id(room_id).cloned()
    }

    pub fn buildings(&self) -> Vec<String> {
        self.service.rooms().get_buildings()
    }

    pub fn time_slots(&self) -> &'static [TimeSlot] {
        &TIME_SLOTS
    }

    pub fn days(&self) -> Vec<DayEntry> {
        DayOfWeek::class_days().iter().copied().map(DayEntry::from).collect()
    }

    /// Lessons that do not sit exactly on a canonical period are left out of
    /// the grid; use `lessons_for_room` to see them. If two lessons claim the
    /// same cell the later one in load order is shown.
    pub fn schedule_grid(&self, room_id: u32) -> Option<ScheduleGrid> {
        let room = self.room(room_id)?;
        let lessons = self.service.lessons().get_schedule_for_room(room_id);

        let mut rows: Vec<GridRow> = TIME_SLOTS
            .iter()
            .map(|slot| GridRow {
                slot: *slot,
                cells: DayOfWeek::class_days()
                    .iter()
                    .map(|day| GridCell {
                        day: *day,
                        lesson: None,
                    })
                    .collect(),
            })
            .collect();

        for lesson in lessons {
            let Some(row) = rows
                .iter_mut()
                .find(|row| row.slot.matches(&lesson.start_time, &lesson.end_time))
            else {
                continue;
            };
            if let Some(cell) = row.cells.iter_mut().find(|c| lesson.is_on(c.day)) {
                cell.lesson = Some(lesson.clone());
            }
        }

        Some(ScheduleGrid { room, rows })
    }

    pub fn lessons_for_room(&self, room_id: u32) -> Option<Vec<LessonOccupancy>> {
        self.room(room_id)?;
        Some(self.service.lessons().get_schedule_for_room(room_id).to_vec())
    }

    /// Monday..Saturday, every day present, lessons ordered by start time.
    pub fn schedule_by_day(&self, room_id: u32) -> Option<Vec<DaySchedule>> {
        let lessons = self.lessons_for_room(room_id)?;
        Some(
            DayOfWeek::class_days()
                .iter()
                .map(|day| {
                    let mut day_lessons: Vec<LessonOccupancy> =
                        lessons.iter().filter(|l| l.is_on(*day)).cloned().collect();
                    // unparsable times go last
                    day_lessons.sort_by_cached_key(|l| {
                        let start = l.start_time.parse::<ClockTime>().ok();
                        (start.is_none(), start, l.start_time.clone())
                    });
                    DaySchedule {
                        day: *day,
                        day_name: day.name(),
                        lessons: day_lessons,
                    }
                })
                .collect(),
        )
    }

    /// Blank queries return nothing rather than every room.
    pub fn search(&self, query: &str) -> Vec<Room> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        self.service.rooms().search(query).into_iter().cloned().collect()
    }

    pub fn search_compact(&self, query: &str) -> Vec<RoomSummary> {
        let query = query.trim();
        if query.chars().count() < COMPACT_SEARCH_MIN_LEN {
            return Vec::new();
        }
        self.service
            .rooms()
            .search(query)
            .into_iter()
            .take(COMPACT_SEARCH_LIMIT)
            .map(RoomSummary::from)
            .collect()
    }

    pub fn listing(
        &self,
        day: Option<DayOfWeek>,
        time: Option<ClockTime>,
        building: Option<&str>,
    ) -> ListingView {
        let (day, time) = listing_defaults(day, time, self.service.now());
        ListingView {
            day,
            day_name: day.name(),
            time,
            building: building.map(str::to_string),
            rooms: self.service.get_free_rooms(day, time, building),
        }
    }

    pub fn now(&self, building: Option<&str>) -> NowView {
        let (day, time) = self.service.now();
        let is_weekend = day.is_weekend();
        NowView {
            is_weekend,
            day,
            day_name: if is_weekend { "" } else { day.name() },
            time,
            rooms: self.service.get_current_free_rooms(building),
        }
    }

    pub fn next(&self, building: Option<&str>) -> NextView {
        let next = self.service.get_next_slot_free_rooms(building);
        NextView {
            day: next.day,
            day_name: next.day.name(),
            time: next.start_time,
            rooms: next.rooms,
        }
    }
}

/// Fills in what a listing request left out: today (Monday on Sunday) and
/// the first period starting at or after now.
pub fn listing_defaults(
    day: Option<DayOfWeek>,
    time: Option<ClockTime>,
    now: (DayOfWeek, ClockTime),
) -> (DayOfWeek, ClockTime) {
    let (today, clock) = now;
    let day = day.unwrap_or(if today.is_weekend() {
        DayOfWeek::Monday
    } else {
        today
    });
    let time = time.unwrap_or_else(|| nearest_slot_from(clock).start);
    (day, time)
}
