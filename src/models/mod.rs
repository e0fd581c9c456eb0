pub mod day;
pub mod lesson;
pub mod room;
pub mod time_slot;

pub use day::DayOfWeek;
pub use lesson::{LessonOccupancy, LessonType, TeacherRef};
pub use room::{Room, RoomSummary};
pub use time_slot::{ClockTime, ParseClockTimeError, TIME_SLOTS, TimeSlot, find_slot_for};
