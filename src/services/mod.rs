pub mod attendance;
pub mod occupancy;

pub use attendance::{AttendanceStore, InMemoryAttendanceStore};
pub use occupancy::{KioskOccupancy, OccupancyService};
