#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

//! # Attended Check-in
//!
//! Check-in workflow action that pre-selects the services a person attended
//! on their most recent visit.
//!
//! ## Overview
//!
//! A kiosk session builds a candidate tree per person: the group types they
//! may attend, the groups open in each, the rooms (locations) of each group
//! and the service times (schedules) of each room. This crate looks at the
//! person's attendance over the last six months, takes every check-in from
//! their most recent day, and marks the matching candidate chain selected.
//!
//! Two optional room-balancing modes override the "last attended" choice:
//!
//! - **By group**: the unfiltered group with the fewest people across all of
//!   its rooms
//! - **By location**: the unfiltered room with an open, unfiltered schedule
//!   and the fewest people
//!
//! ## Module Organization
//!
//! - [`selection`] - The decision core
//! - [`action`] - Workflow action wrapper and host contract
//! - [`models`] - Candidate tree, check-in state and attendance records
//! - [`services`] - Attendance and occupancy capabilities
//! - [`config`] - Layered configuration
//! - [`logging`] - Structured logging setup
//! - [`error`] - Structured error handling
//!
//! ## Quick Start
//!
//! ```rust
//! use attended_checkin::models::*;
//! use attended_checkin::selection::{AttendanceSelector, SelectionOptions};
//! use attended_checkin::services::{InMemoryAttendanceStore, KioskOccupancy};
//! use chrono::NaiveDate;
//! use std::sync::Arc;
//!
//! let last_sunday = NaiveDate::from_ymd_opt(2026, 10, 11).unwrap();
//! let store = InMemoryAttendanceStore::new(vec![AttendanceRecord {
//!     person_id: PersonId(1),
//!     group_type_id: GroupTypeId(10),
//!     group_id: GroupId(100),
//!     location_id: LocationId(1000),
//!     schedule_id: ScheduleId(9),
//!     start_date_time: last_sunday.and_hms_opt(9, 0, 0).unwrap(),
//! }]);
//!
//! let mut state = CheckInState::new(vec![Family::selected(1).with_person(
//!     Person::selected(1).with_group_type(CandidateGroupType::new(10).with_group(
//!         CandidateGroup::new(100).with_location(
//!             CandidateLocation::new(1000).with_schedule(CandidateSchedule::new(9)),
//!         ),
//!     )),
//! )]);
//!
//! let selector = AttendanceSelector::new(Arc::new(store), Arc::new(KioskOccupancy::new()));
//! let today = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
//! let summary = selector
//!     .select(&mut state, SelectionOptions::default(), today)
//!     .unwrap();
//!
//! assert_eq!(summary.selections.len(), 1);
//! assert!(state.families[0].people[0].group_types[0].selected);
//! ```

pub mod macros;

pub mod action;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;
pub mod selection;
pub mod services;

pub use action::{ActionComponent, ActionContext, ActionResult, SelectByMultipleAttended};
pub use config::{ConfigLoader, SelectorConfig};
pub use error::{CheckInError, Result};
pub use selection::{AttendanceSelector, SelectionOptions, SelectionSummary};
