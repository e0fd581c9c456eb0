pub mod clock;
pub mod room_service;
pub mod schedule_views;

pub use clock::{Clock, FixedClock, SystemClock};
pub use room_service::{RoomService, SlotAvailability};
pub use schedule_views::ScheduleViews;
