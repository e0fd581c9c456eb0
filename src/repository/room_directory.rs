use crate::models::Room;

/// Read-only list of rooms in load order.
#[derive(Debug, Clone, Default)]
pub struct RoomDirectory {
    rooms: Vec<Room>,
}

impl RoomDirectory {
    pub fn new(rooms: Vec<Room>) -> Self {
        Self { rooms }
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn get_all(&self) -> &[Room] {
        &self.rooms
    }

    pub fn get_by_id(&self, id: u32) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Case-insensitive exact match on the room name.
    pub fn find_by_name(&self, name: &str) -> Option<&Room> {
        let name = name.to_lowercase();
        self.rooms.iter().find(|r| r.name.to_lowercase() == name)
    }

    /// Rooms whose building name contains `building`, ignoring case.
    pub fn find_by_building(&self, building: &str) -> Vec<&Room> {
        let needle = building.to_lowercase();
        self.rooms
            .iter()
            .filter(|r| in_building(r, &needle))
            .collect()
    }

    pub fn get_buildings(&self) -> Vec<String> {
        let mut buildings: Vec<String> = self
            .rooms
            .iter()
            .filter(|r| !r.building.is_empty())
            .map(|r| r.building.clone())
            .collect();
        buildings.sort();
        buildings.dedup();
        buildings
    }

    /// Substring match against name or building, in load order.
    pub fn search(&self, query: &str) -> Vec<&Room> {
        let needle = query.trim().to_lowercase();
        self.rooms
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&needle) || in_building(r, &needle))
            .collect()
    }
}

/// `needle` must already be lowercased.
pub(crate) fn in_building(room: &Room, needle: &str) -> bool {
    room.building.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(id: u32, name: &str, building: &str) -> Room {
        Room {
            id,
            name: name.to_string(),
            building: building.to_string(),
        }
    }

    fn directory() -> RoomDirectory {
        RoomDirectory::new(vec![
            room(1, "F105", "Main Building"),
            room(2, "f106", "Main Building"),
            room(3, "G201", "Green Hall"),
            room(4, "Gym", ""),
        ])
    }

    #[test]
    fn test_get_by_id() {
        let dir = directory();
        assert_eq!(dir.get_by_id(3).map(|r| r.name.as_str()), Some("G201"));
        assert!(dir.get_by_id(99).is_none());
    }

    #[test]
    fn test_find_by_name_is_case_insensitive_exact() {
        let dir = directory();
        assert_eq!(dir.find_by_name("F106").map(|r| r.id), Some(2));
        assert!(dir.find_by_name("F10").is_none());
    }

    #[test]
    fn test_find_by_building_substring() {
        let dir = directory();
        let ids: Vec<u32> = dir.find_by_building("main").iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(dir.find_by_building("library").is_empty());
    }

    #[test]
    fn test_get_buildings_sorted_distinct_non_empty() {
        let dir = directory();
        assert_eq!(dir.get_buildings(), vec!["Green Hall", "Main Building"]);
    }

    #[test]
    fn test_search_name_or_building() {
        let dir = directory();
        let ids: Vec<u32> = dir.search("  g ").iter().map(|r| r.id).collect();
        // "G201" by name and building, "Gym" by name, "Main Building" contains "g"
        assert_eq!(ids, vec![1, 2, 3, 4]);
        let ids: Vec<u32> = dir.search("hall").iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_empty_directory() {
        let dir = RoomDirectory::default();
        assert!(dir.is_empty());
        assert!(dir.get_buildings().is_empty());
        assert!(dir.search("a").is_empty());
    }
}
