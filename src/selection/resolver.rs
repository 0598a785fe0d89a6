//! # Candidate Resolution
//!
//! One function per tree level. Each returns an index into the parent's child
//! list so the caller can apply the whole chain with a single mutable borrow.
//!
//! Default choice at every level: a lone candidate wins outright, otherwise
//! the candidate matching the attendance record's id. Room balancing replaces
//! the default with the least-occupied eligible candidate and falls back to
//! the default when nothing is eligible.

use crate::models::{
    CandidateGroup, CandidateGroupType, CandidateLocation, GroupId, LocationId, ScheduleId,
};
use crate::services::OccupancyService;

/// A chosen child index and whether room balancing chose it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub index: usize,
    pub balanced: bool,
}

impl Resolution {
    fn attended(index: usize) -> Self {
        Self {
            index,
            balanced: false,
        }
    }

    fn balanced(index: usize) -> Self {
        Self {
            index,
            balanced: true,
        }
    }
}

/// Lone candidate, else the one whose key matches `wanted`
fn single_or_matching<T, K: PartialEq>(
    candidates: &[T],
    wanted: K,
    key: impl Fn(&T) -> K,
) -> Option<usize> {
    if candidates.len() == 1 {
        return Some(0);
    }
    candidates.iter().position(|candidate| key(candidate) == wanted)
}

/// Sum of live counts over every location of the group, filtered or not
pub fn group_occupancy(group: &CandidateGroup, occupancy: &dyn OccupancyService) -> u64 {
    group
        .locations
        .iter()
        .map(|location| u64::from(occupancy.current_count(location.location_id)))
        .sum()
}

/// Unfiltered group with the lowest summed occupancy; first one on ties
pub fn least_occupied_group(
    groups: &[CandidateGroup],
    occupancy: &dyn OccupancyService,
) -> Option<usize> {
    groups
        .iter()
        .enumerate()
        .filter(|(_, group)| !group.excluded_by_filter)
        .min_by_key(|(_, group)| group_occupancy(group, occupancy))
        .map(|(index, _)| index)
}

/// Unfiltered location with an open schedule and the lowest count; first one on ties
pub fn least_occupied_location(
    locations: &[CandidateLocation],
    occupancy: &dyn OccupancyService,
) -> Option<usize> {
    locations
        .iter()
        .enumerate()
        .filter(|(_, location)| !location.excluded_by_filter && location.has_open_schedule())
        .min_by_key(|(_, location)| occupancy.current_count(location.location_id))
        .map(|(index, _)| index)
}

pub fn resolve_group(
    group_type: &CandidateGroupType,
    attended_group: GroupId,
    balance: bool,
    occupancy: &dyn OccupancyService,
) -> Option<Resolution> {
    let attended = single_or_matching(&group_type.groups, attended_group, |g| g.group_id);

    if balance {
        if let Some(index) = least_occupied_group(&group_type.groups, occupancy) {
            return Some(Resolution::balanced(index));
        }
    }

    attended.map(Resolution::attended)
}

pub fn resolve_location(
    group: &CandidateGroup,
    attended_location: LocationId,
    balance: bool,
    occupancy: &dyn OccupancyService,
) -> Option<Resolution> {
    let attended = single_or_matching(&group.locations, attended_location, |l| l.location_id);

    if balance {
        if let Some(index) = least_occupied_location(&group.locations, occupancy) {
            return Some(Resolution::balanced(index));
        }
    }

    attended.map(Resolution::attended)
}

/// Schedules are never balanced
pub fn resolve_schedule(
    location: &CandidateLocation,
    attended_schedule: ScheduleId,
) -> Option<usize> {
    single_or_matching(&location.schedules, attended_schedule, |s| s.schedule_id)
}
