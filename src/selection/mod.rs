//! # Attended Service Selection
//!
//! The decision core: given a person's recent attendance and the candidates
//! open right now, choose what to pre-select at the kiosk.

pub mod resolver;
pub mod selector;

pub use resolver::{
    group_occupancy, least_occupied_group, least_occupied_location, resolve_group,
    resolve_location, resolve_schedule, Resolution,
};
pub use selector::{
    window_start, AttendanceSelector, SelectedChain, SelectionOptions, SelectionSummary,
    SkipReason, SkippedAttendance,
};
