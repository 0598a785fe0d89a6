//! Proptest strategies for candidate trees and attendance

use attended_checkin::models::*;
use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;

#[derive(Debug, Clone)]
pub struct ScheduleShape {
    pub active: bool,
    pub excluded: bool,
}

#[derive(Debug, Clone)]
pub struct LocationShape {
    pub excluded: bool,
    pub schedules: Vec<ScheduleShape>,
}

#[derive(Debug, Clone)]
pub struct GroupShape {
    pub excluded: bool,
    pub locations: Vec<LocationShape>,
}

/// Position of an attended service in the id scheme of [`build_person`]
#[derive(Debug, Clone, Copy)]
pub struct AttendedSlot {
    pub group_type: usize,
    pub group: usize,
    pub location: usize,
    pub schedule: usize,
    pub days_ago: i64,
}

pub fn group_type_id(t: usize) -> i32 {
    t as i32 + 1
}

pub fn group_id(t: usize, g: usize) -> i32 {
    group_type_id(t) * 100 + g as i32
}

pub fn location_id(t: usize, g: usize, l: usize) -> i32 {
    group_id(t, g) * 10 + l as i32
}

pub fn schedule_id(t: usize, g: usize, l: usize, s: usize) -> i32 {
    location_id(t, g, l) * 10 + s as i32
}

pub fn schedule_strategy() -> impl Strategy<Value = ScheduleShape> {
    (prop::bool::weighted(0.8), prop::bool::weighted(0.2))
        .prop_map(|(active, excluded)| ScheduleShape { active, excluded })
}

pub fn location_strategy() -> impl Strategy<Value = LocationShape> {
    (
        prop::bool::weighted(0.2),
        prop::collection::vec(schedule_strategy(), 0..3),
    )
        .prop_map(|(excluded, schedules)| LocationShape { excluded, schedules })
}

pub fn group_strategy() -> impl Strategy<Value = GroupShape> {
    (
        prop::bool::weighted(0.25),
        prop::collection::vec(location_strategy(), 0..4),
    )
        .prop_map(|(excluded, locations)| GroupShape { excluded, locations })
}

/// One to three group types of up to four groups each
pub fn tree_strategy() -> impl Strategy<Value = Vec<Vec<GroupShape>>> {
    prop::collection::vec(prop::collection::vec(group_strategy(), 0..4), 1..4)
}

/// Slots may point past the generated tree to exercise resolution misses
pub fn slot_strategy() -> impl Strategy<Value = AttendedSlot> {
    (0usize..4, 0usize..5, 0usize..4, 0usize..3, 0i64..150).prop_map(
        |(group_type, group, location, schedule, days_ago)| AttendedSlot {
            group_type,
            group,
            location,
            schedule,
            days_ago,
        },
    )
}

pub fn counts_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..25, 1..16)
}

pub fn build_person(person: i32, tree: &[Vec<GroupShape>]) -> Person {
    let mut built = Person::selected(person);
    for (t, groups) in tree.iter().enumerate() {
        let mut group_type = CandidateGroupType::new(group_type_id(t));
        for (g, group_shape) in groups.iter().enumerate() {
            let mut group = CandidateGroup::new(group_id(t, g));
            group.excluded_by_filter = group_shape.excluded;
            for (l, location_shape) in group_shape.locations.iter().enumerate() {
                let mut location = CandidateLocation::new(location_id(t, g, l));
                location.excluded_by_filter = location_shape.excluded;
                for (s, schedule_shape) in location_shape.schedules.iter().enumerate() {
                    let mut schedule = CandidateSchedule::new(schedule_id(t, g, l, s));
                    schedule.is_check_in_active = schedule_shape.active;
                    schedule.excluded_by_filter = schedule_shape.excluded;
                    location = location.with_schedule(schedule);
                }
                group = group.with_location(location);
            }
            group_type = group_type.with_group(group);
        }
        built = built.with_group_type(group_type);
    }
    built
}

pub fn build_record(person: i32, slot: AttendedSlot, today: NaiveDate) -> AttendanceRecord {
    let start: NaiveDateTime = (today - chrono::Duration::days(slot.days_ago))
        .and_hms_opt(9, 30, 0)
        .unwrap();
    AttendanceRecord {
        person_id: PersonId(person),
        group_type_id: GroupTypeId(group_type_id(slot.group_type)),
        group_id: GroupId(group_id(slot.group_type, slot.group)),
        location_id: LocationId(location_id(slot.group_type, slot.group, slot.location)),
        schedule_id: ScheduleId(schedule_id(
            slot.group_type,
            slot.group,
            slot.location,
            slot.schedule,
        )),
        start_date_time: start,
    }
}

/// Every location id of the tree, in traversal order
pub fn location_ids(person: &Person) -> Vec<LocationId> {
    person
        .group_types
        .iter()
        .flat_map(|gt| &gt.groups)
        .flat_map(|g| &g.locations)
        .map(|l| l.location_id)
        .collect()
}
