#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;
use roomfinder::models::{LessonOccupancy, LessonType, Room};
use roomfinder::repository::Snapshot;
use roomfinder::services::{FixedClock, RoomService, ScheduleViews};

pub fn room(id: u32, name: &str, building: &str) -> Room {
    Room {
        id,
        name: name.to_string(),
        building: building.to_string(),
    }
}

pub fn lesson(room_id: u32, weekday: u8, start: &str, end: &str) -> LessonOccupancy {
    LessonOccupancy {
        lesson_id: 1,
        room_id,
        weekday,
        start_time: start.to_string(),
        end_time: end.to_string(),
        subject_code: "MAT 101".to_string(),
        section: "01-N".to_string(),
        subject_name: "Calculus I".to_string(),
        subject_name_kz: None,
        lesson_type: LessonType::Lecture,
        teacher: None,
    }
}

/// rooms = [101 in A, 102 in A]; room 1 busy on Tuesday 09:30-10:20
pub fn two_room_snapshot() -> Snapshot {
    Snapshot::new(
        vec![room(1, "101", "A"), room(2, "102", "A")],
        vec![lesson(1, 2, "09:30", "10:20")],
    )
}

pub fn service_at(snapshot: Snapshot, y: i32, m: u32, d: u32, hh: u32, mm: u32) -> RoomService {
    let now = NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(hh, mm, 0)
        .unwrap();
    RoomService::new(Arc::new(snapshot), Arc::new(FixedClock(now)))
}

pub fn views_at(snapshot: Snapshot, y: i32, m: u32, d: u32, hh: u32, mm: u32) -> ScheduleViews {
    ScheduleViews::new(Arc::new(service_at(snapshot, y, m, d, hh, mm)))
}
