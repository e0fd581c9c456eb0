use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::models::time_slot::{first_slot, next_slot_after};
use crate::models::{ClockTime, DayOfWeek, Room, find_slot_for};
use crate::repository::room_directory::in_building;
use crate::repository::{LessonIndex, RoomDirectory, Snapshot};
use crate::services::Clock;

/// Free rooms for a resolved (day, period start).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotAvailability {
    pub day: DayOfWeek,
    pub start_time: ClockTime,
    pub rooms: Vec<Room>,
}

/// Answers "which rooms are free" over a loaded snapshot.
pub struct RoomService {
    snapshot: Arc<Snapshot>,
    clock: Arc<dyn Clock>,
}

impl RoomService {
    pub fn new(snapshot: Arc<Snapshot>, clock: Arc<dyn Clock>) -> Self {
        Self { snapshot, clock }
    }

    pub fn rooms(&self) -> &RoomDirectory {
        &self.snapshot.rooms
    }

    pub fn lessons(&self) -> &LessonIndex {
        &self.snapshot.lessons
    }

    /// Current timetable day and clock time.
    pub fn now(&self) -> (DayOfWeek, ClockTime) {
        let now = self.clock.now();
        (
            DayOfWeek::from_date(&now.date()),
            ClockTime::from_naive_time(now.time()),
        )
    }

    /// Rooms with no lesson in the period `time` falls into, sorted by
    /// building then name.
    ///
    /// A time after the last period yields an empty list, and so does Sunday.
    /// Note that `is_room_free` answers both of those queries with `true`
    /// (no period resolves, or no lessons are held on Sunday); the policies
    /// are left asymmetric until product decides which one is right.
    pub fn get_free_rooms(
        &self,
        day: DayOfWeek,
        time: ClockTime,
        building: Option<&str>,
    ) -> Vec<Room> {
        if day.is_weekend() {
            return Vec::new();
        }
        let Some(slot) = find_slot_for(time) else {
            debug!("no period at {} on {}, nothing to report", time, day.name());
            return Vec::new();
        };

        let needle = building.map(str::to_lowercase);
        let occupied = self.lessons().get_occupied_rooms(day, slot.start);

        let mut free: Vec<Room> = self
            .rooms()
            .get_all()
            .iter()
            .filter(|r| needle.as_deref().is_none_or(|b| in_building(r, b)))
            .filter(|r| !occupied.contains(&r.id))
            .cloned()
            .collect();
        // stable: equal (building, name) pairs keep load order
        free.sort_by(|a, b| (&a.building, &a.name).cmp(&(&b.building, &b.name)));

        debug!(
            "{} {}: {} occupied, {} free",
            day.name(),
            slot.start,
            occupied.len(),
            free.len()
        );
        free
    }

    /// Free rooms right now. Always empty on Sunday.
    pub fn get_current_free_rooms(&self, building: Option<&str>) -> Vec<Room> {
        let (day, time) = self.now();
        if day.is_weekend() {
            return Vec::new();
        }
        self.get_free_rooms(day, time, building)
    }

    /// Free rooms for the next period to start after now, rolling over to the
    /// next class day when today's periods are done.
    pub fn get_next_slot_free_rooms(&self, building: Option<&str>) -> SlotAvailability {
        let (today, time) = self.now();
        let (day, start_time) = next_period_start(today, time);
        SlotAvailability {
            day,
            start_time,
            rooms: self.get_free_rooms(day, start_time, building),
        }
    }

    /// Whether the room has no lesson in the period `time` falls into.
    ///
    /// Out-of-hours queries are vacuously free (`true`), unlike
    /// `get_free_rooms` which reports nothing for them. Kept asymmetric on
    /// purpose until product confirms the intended behaviour.
    pub fn is_room_free(&self, room_id: u32, day: DayOfWeek, time: ClockTime) -> bool {
        match find_slot_for(time) {
            Some(slot) => !self
                .lessons()
                .get_occupied_rooms(day, slot.start)
                .contains(&room_id),
            None => true,
        }
    }
}

/// The (day, period start) that comes strictly after `time` on `day`.
pub fn next_period_start(day: DayOfWeek, time: ClockTime) -> (DayOfWeek, ClockTime) {
    if day.is_weekend() {
        return (DayOfWeek::Monday, first_slot().start);
    }
    match next_slot_after(time) {
        Some(slot) => (day, slot.start),
        None => (day.next_class_day(), first_slot().start),
    }
}
