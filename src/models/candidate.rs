//! # Candidate Tree
//!
//! The in-progress hierarchy a person may check into during one session:
//! group type → group → location → schedule. Parents own their children in
//! host order; the order matters for tie-breaking and is never changed here.

use super::ids::{GroupId, GroupTypeId, LocationId, ScheduleId};
use serde::{Deserialize, Serialize};

/// A group type the person is eligible for in this session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateGroupType {
    pub group_type_id: GroupTypeId,
    #[serde(default)]
    pub groups: Vec<CandidateGroup>,
    #[serde(default)]
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateGroup {
    pub group_id: GroupId,
    #[serde(default)]
    pub locations: Vec<CandidateLocation>,
    #[serde(default)]
    pub excluded_by_filter: bool,
    #[serde(default)]
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateLocation {
    pub location_id: LocationId,
    #[serde(default)]
    pub schedules: Vec<CandidateSchedule>,
    #[serde(default)]
    pub excluded_by_filter: bool,
    #[serde(default)]
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSchedule {
    pub schedule_id: ScheduleId,
    #[serde(default = "check_in_active_by_default")]
    pub is_check_in_active: bool,
    #[serde(default)]
    pub excluded_by_filter: bool,
    #[serde(default)]
    pub selected: bool,
}

fn check_in_active_by_default() -> bool {
    true
}

impl CandidateGroupType {
    pub fn new(group_type_id: impl Into<GroupTypeId>) -> Self {
        Self {
            group_type_id: group_type_id.into(),
            groups: Vec::new(),
            selected: false,
        }
    }

    pub fn with_group(mut self, group: CandidateGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Whether anything below this group type is selected
    pub fn has_selection(&self) -> bool {
        self.selected || self.groups.iter().any(CandidateGroup::has_selection)
    }
}

impl CandidateGroup {
    pub fn new(group_id: impl Into<GroupId>) -> Self {
        Self {
            group_id: group_id.into(),
            locations: Vec::new(),
            excluded_by_filter: false,
            selected: false,
        }
    }

    pub fn with_location(mut self, location: CandidateLocation) -> Self {
        self.locations.push(location);
        self
    }

    pub fn excluded(mut self) -> Self {
        self.excluded_by_filter = true;
        self
    }

    pub fn has_selection(&self) -> bool {
        self.selected || self.locations.iter().any(CandidateLocation::has_selection)
    }
}

impl CandidateLocation {
    pub fn new(location_id: impl Into<LocationId>) -> Self {
        Self {
            location_id: location_id.into(),
            schedules: Vec::new(),
            excluded_by_filter: false,
            selected: false,
        }
    }

    pub fn with_schedule(mut self, schedule: CandidateSchedule) -> Self {
        self.schedules.push(schedule);
        self
    }

    pub fn excluded(mut self) -> Self {
        self.excluded_by_filter = true;
        self
    }

    /// At least one schedule that survived filtering and is open for check-in
    pub fn has_open_schedule(&self) -> bool {
        self.schedules
            .iter()
            .any(|s| !s.excluded_by_filter && s.is_check_in_active)
    }

    pub fn has_selection(&self) -> bool {
        self.selected || self.schedules.iter().any(|s| s.selected)
    }
}

impl CandidateSchedule {
    /// An active, unfiltered schedule
    pub fn new(schedule_id: impl Into<ScheduleId>) -> Self {
        Self {
            schedule_id: schedule_id.into(),
            is_check_in_active: true,
            excluded_by_filter: false,
            selected: false,
        }
    }

    pub fn inactive(mut self) -> Self {
        self.is_check_in_active = false;
        self
    }

    pub fn excluded(mut self) -> Self {
        self.excluded_by_filter = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_schedule_requires_active_and_unfiltered() {
        let closed = CandidateLocation::new(1)
            .with_schedule(CandidateSchedule::new(10).inactive())
            .with_schedule(CandidateSchedule::new(11).excluded());
        assert!(!closed.has_open_schedule());

        let open = closed.clone().with_schedule(CandidateSchedule::new(12));
        assert!(open.has_open_schedule());
    }

    #[test]
    fn test_missing_flags_default_when_deserializing() {
        let json = r#"{ "group_type_id": 3, "groups": [ { "group_id": 30 } ] }"#;
        let group_type: CandidateGroupType = serde_json::from_str(json).unwrap();

        assert_eq!(group_type.group_type_id, GroupTypeId(3));
        assert!(!group_type.selected);
        assert!(!group_type.groups[0].excluded_by_filter);
        assert!(group_type.groups[0].locations.is_empty());
    }

    #[test]
    fn test_schedule_without_active_flag_is_active() {
        let json = r#"{ "location_id": 7, "schedules": [ { "schedule_id": 1 } ] }"#;
        let location: CandidateLocation = serde_json::from_str(json).unwrap();

        assert_eq!(location.schedules[0], CandidateSchedule::new(1));
        assert!(location.has_open_schedule());
    }
}
