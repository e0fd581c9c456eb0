pub mod dto;
pub mod lesson_index;
pub mod room_directory;
pub mod snapshot;

pub use lesson_index::LessonIndex;
pub use room_directory::RoomDirectory;
pub use snapshot::Snapshot;
