//! Builders for check-in sessions and attendance history

use attended_checkin::models::*;
use attended_checkin::selection::AttendanceSelector;
use attended_checkin::services::{InMemoryAttendanceStore, KioskOccupancy};
use chrono::{NaiveDate, NaiveDateTime};
use std::sync::Arc;

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at(date: NaiveDate, hour: u32) -> NaiveDateTime {
    date.and_hms_opt(hour, 0, 0).unwrap()
}

/// Wednesday the tests run on
pub fn today() -> NaiveDate {
    day(2026, 10, 14)
}

/// The Sunday before `today()`
pub fn last_sunday() -> NaiveDate {
    day(2026, 10, 11)
}

pub fn attendance(
    person: i32,
    group_type: i32,
    group: i32,
    location: i32,
    schedule: i32,
    start: NaiveDateTime,
) -> AttendanceRecord {
    AttendanceRecord {
        person_id: PersonId(person),
        group_type_id: GroupTypeId(group_type),
        group_id: GroupId(group),
        location_id: LocationId(location),
        schedule_id: ScheduleId(schedule),
        start_date_time: start,
    }
}

pub fn room(location: i32, schedules: &[i32]) -> CandidateLocation {
    schedules.iter().fold(CandidateLocation::new(location), |location, id| {
        location.with_schedule(CandidateSchedule::new(*id))
    })
}

/// A group type with one group, one room and one service time
pub fn single_chain(
    group_type: i32,
    group: i32,
    location: i32,
    schedule: i32,
) -> CandidateGroupType {
    CandidateGroupType::new(group_type)
        .with_group(CandidateGroup::new(group).with_location(room(location, &[schedule])))
}

pub fn session(people: Vec<Person>) -> CheckInState {
    let family = people
        .into_iter()
        .fold(Family::selected(1), Family::with_person);
    CheckInState::new(vec![family])
}

/// Shared store and occupancy behind a selector
pub struct Harness {
    pub store: Arc<InMemoryAttendanceStore>,
    pub occupancy: Arc<KioskOccupancy>,
}

impl Harness {
    pub fn new(records: Vec<AttendanceRecord>) -> Self {
        Self {
            store: Arc::new(InMemoryAttendanceStore::new(records)),
            occupancy: Arc::new(KioskOccupancy::new()),
        }
    }

    pub fn with_counts(self, counts: &[(i32, u32)]) -> Self {
        for (location, count) in counts {
            self.occupancy.set(LocationId(*location), *count);
        }
        self
    }

    pub fn selector(&self) -> AttendanceSelector {
        AttendanceSelector::new(self.store.clone(), self.occupancy.clone())
    }
}

/// Number of selected nodes at each level: (group types, groups, locations, schedules)
pub fn selected_counts(person: &Person) -> (usize, usize, usize, usize) {
    let group_types = person.group_types.iter().filter(|gt| gt.selected).count();
    let groups = person
        .group_types
        .iter()
        .flat_map(|gt| &gt.groups)
        .filter(|g| g.selected)
        .count();
    let locations = person
        .group_types
        .iter()
        .flat_map(|gt| &gt.groups)
        .flat_map(|g| &g.locations)
        .filter(|l| l.selected)
        .count();
    let schedules = person
        .group_types
        .iter()
        .flat_map(|gt| &gt.groups)
        .flat_map(|g| &g.locations)
        .flat_map(|l| &l.schedules)
        .filter(|s| s.selected)
        .count();
    (group_types, groups, locations, schedules)
}
