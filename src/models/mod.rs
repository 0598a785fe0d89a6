pub mod attendance;
pub mod candidate;
pub mod ids;
pub mod state;

// Re-export core models for easy access
pub use attendance::AttendanceRecord;
pub use candidate::{CandidateGroup, CandidateGroupType, CandidateLocation, CandidateSchedule};
pub use ids::{FamilyId, GroupId, GroupTypeId, LocationId, PersonId, ScheduleId};
pub use state::{CheckInState, Family, Person};
