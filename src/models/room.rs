use serde::{Deserialize, Serialize};

use crate::repository::dto::null_as_default;

/// A classroom. Identity is `id`; rooms are read-only once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(
        default,
        rename(deserialize = "parent_building_en"),
        alias = "building",
        deserialize_with = "null_as_default"
    )]
    pub building: String,
}

/// Compact representation used by the autocomplete endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomSummary {
    pub id: u32,
    pub name: String,
    pub building: String,
}

impl From<&Room> for RoomSummary {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id,
            name: room.name.clone(),
            building: room.building.clone(),
        }
    }
}
