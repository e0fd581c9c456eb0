use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{info, warn};

use crate::error::LoadError;
use crate::models::{LessonOccupancy, Room};
use crate::repository::dto::LessonRecord;
use crate::repository::{LessonIndex, RoomDirectory};

/// Rooms and lessons loaded once and shared read-only for the process
/// lifetime. Picking up changed files requires a restart.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub rooms: RoomDirectory,
    pub lessons: LessonIndex,
}

impl Snapshot {
    pub fn new(rooms: Vec<Room>, lessons: Vec<LessonOccupancy>) -> Self {
        Self {
            rooms: RoomDirectory::new(rooms),
            lessons: LessonIndex::new(lessons),
        }
    }

    /// Missing or malformed files degrade to empty collections.
    pub fn load(rooms_path: &Path, schedules_path: &Path) -> Self {
        let rooms = read_rooms(rooms_path).unwrap_or_else(|e| {
            warn!("rooms file {} unavailable, using empty list: {}", rooms_path.display(), e);
            Vec::new()
        });
        let lessons = read_schedules(schedules_path).unwrap_or_else(|e| {
            warn!(
                "schedules file {} unavailable, using empty schedule: {}",
                schedules_path.display(),
                e
            );
            Vec::new()
        });

        info!("loaded {} rooms and {} lessons", rooms.len(), lessons.len());
        Self::new(rooms, lessons)
    }
}

/// Records that still fail to parse are skipped one by one.
pub fn read_rooms(path: &Path) -> Result<Vec<Room>, LoadError> {
    let content = fs::read_to_string(path)?;
    let raw: Vec<Value> = serde_json::from_str(&content)?;

    Ok(raw
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<Room>(record) {
            Ok(room) => Some(room),
            Err(e) => {
                warn!("skipping malformed room record: {}", e);
                None
            }
        })
        .collect())
}

/// Schedules are stored as `{ "<room id>": [lesson, ...], ... }`.
pub fn read_schedules(path: &Path) -> Result<Vec<LessonOccupancy>, LoadError> {
    let content = fs::read_to_string(path)?;
    let raw: HashMap<String, Vec<Value>> = serde_json::from_str(&content)?;

    let mut entries: Vec<(u32, Vec<Value>)> = Vec::with_capacity(raw.len());
    for (key, records) in raw {
        match key.trim().parse::<u32>() {
            Ok(room_id) => entries.push((room_id, records)),
            Err(_) => warn!("skipping schedule entry with non-numeric room id '{}'", key),
        }
    }
    entries.sort_by_key(|(room_id, _)| *room_id);

    let mut lessons = Vec::new();
    for (room_id, records) in entries {
        for record in records {
            match serde_json::from_value::<LessonRecord>(record) {
                Ok(record) => lessons.push(record.into_occupancy(room_id)),
                Err(e) => warn!("skipping malformed lesson for room {}: {}", room_id, e),
            }
        }
    }
    Ok(lessons)
}
