//! # Attendance Selector
//!
//! Picks, for each person, the services they attended on their most recent
//! day within the look-back window and marks the matching candidate chain
//! selected. Records from that day are processed in store order; a later
//! record overwrites earlier choices on any ancestor it shares with them.

use super::resolver::{resolve_group, resolve_location, resolve_schedule};
use crate::constants::{DEFAULT_LOOKBACK_MONTHS, MAX_LOOKBACK_MONTHS};
use crate::error::{CheckInError, Result};
use crate::models::{
    AttendanceRecord, CheckInState, GroupId, GroupTypeId, LocationId, Person, PersonId,
    ScheduleId,
};
use crate::services::{AttendanceStore, OccupancyService};
use chrono::{Months, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Room balancing switches for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionOptions {
    pub balance_by_group: bool,
    pub balance_by_location: bool,
}

/// Why an attendance record produced no selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The person is not offered the record's group type this session
    GroupTypeNotOffered,
    GroupNotResolved,
    LocationNotResolved,
    ScheduleNotResolved,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::GroupTypeNotOffered => "group type not offered",
            SkipReason::GroupNotResolved => "no group resolved",
            SkipReason::LocationNotResolved => "no location resolved",
            SkipReason::ScheduleNotResolved => "no schedule resolved",
        };
        f.write_str(text)
    }
}

/// A candidate chain marked selected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedChain {
    pub person_id: PersonId,
    pub group_type_id: GroupTypeId,
    pub group_id: GroupId,
    pub location_id: LocationId,
    pub schedule_id: ScheduleId,
    pub group_balanced: bool,
    pub location_balanced: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedAttendance {
    pub person_id: PersonId,
    pub reason: SkipReason,
    pub attendance: AttendanceRecord,
}

/// What one run did
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSummary {
    pub people_considered: usize,
    pub people_without_history: usize,
    pub selections: Vec<SelectedChain>,
    pub skipped: Vec<SkippedAttendance>,
}

impl SelectionSummary {
    pub fn selections_for(&self, person_id: PersonId) -> impl Iterator<Item = &SelectedChain> {
        self.selections
            .iter()
            .filter(move |chain| chain.person_id == person_id)
    }
}

/// Indices of one chosen chain within a person's candidate tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SelectionPath {
    group_type: usize,
    group: usize,
    location: usize,
    schedule: usize,
}

impl SelectionPath {
    /// Mark the schedule and its ancestors selected
    fn apply(self, person: &mut Person) -> bool {
        let Some(group_type) = person.group_types.get_mut(self.group_type) else {
            return false;
        };
        let Some(group) = group_type.groups.get_mut(self.group) else {
            return false;
        };
        let Some(location) = group.locations.get_mut(self.location) else {
            return false;
        };
        let Some(schedule) = location.schedules.get_mut(self.schedule) else {
            return false;
        };

        schedule.selected = true;
        location.selected = true;
        group.selected = true;
        group_type.selected = true;
        true
    }
}

/// First instant of the look-back window ending `today`
///
/// Month subtraction clamps to the end of shorter months (Aug 31 minus six
/// months is the last day of February).
pub fn window_start(today: NaiveDate, lookback_months: u32) -> Result<NaiveDateTime> {
    today
        .checked_sub_months(Months::new(lookback_months))
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| {
            CheckInError::InvalidInput(format!(
                "look-back of {lookback_months} months from {today} is out of range"
            ))
        })
}

/// Selects last-attended services using injected attendance and occupancy
#[derive(Clone)]
pub struct AttendanceSelector {
    attendance: Arc<dyn AttendanceStore>,
    occupancy: Arc<dyn OccupancyService>,
    lookback_months: u32,
}

impl fmt::Debug for AttendanceSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttendanceSelector")
            .field("attendance", &"AttendanceStore")
            .field("occupancy", &"OccupancyService")
            .field("lookback_months", &self.lookback_months)
            .finish()
    }
}

impl AttendanceSelector {
    pub fn new(attendance: Arc<dyn AttendanceStore>, occupancy: Arc<dyn OccupancyService>) -> Self {
        Self {
            attendance,
            occupancy,
            lookback_months: DEFAULT_LOOKBACK_MONTHS,
        }
    }

    /// Fails unless `lookback_months` is within `1..=MAX_LOOKBACK_MONTHS`
    pub fn with_lookback_months(mut self, lookback_months: u32) -> Result<Self> {
        if !(1..=MAX_LOOKBACK_MONTHS).contains(&lookback_months) {
            return Err(CheckInError::InvalidInput(format!(
                "lookback_months must be between 1 and {MAX_LOOKBACK_MONTHS}, got {lookback_months}"
            )));
        }
        self.lookback_months = lookback_months;
        Ok(self)
    }

    pub fn lookback_months(&self) -> u32 {
        self.lookback_months
    }

    /// Run over the selected people of the selected families in `state`
    #[instrument(skip(self, state), fields(families = state.families.len()))]
    pub fn select(
        &self,
        state: &mut CheckInState,
        options: SelectionOptions,
        today: NaiveDate,
    ) -> Result<SelectionSummary> {
        let summary = self.select_people(state.selected_people_mut(), options, today)?;

        info!(
            people_considered = summary.people_considered,
            people_without_history = summary.people_without_history,
            selections = summary.selections.len(),
            skipped = summary.skipped.len(),
            balance_by_group = options.balance_by_group,
            balance_by_location = options.balance_by_location,
            "Selected services by attendance"
        );

        Ok(summary)
    }

    /// Run over an explicit list of people
    pub fn select_people<'p>(
        &self,
        people: impl IntoIterator<Item = &'p mut Person>,
        options: SelectionOptions,
        today: NaiveDate,
    ) -> Result<SelectionSummary> {
        let since = window_start(today, self.lookback_months)?;
        let mut summary = SelectionSummary::default();

        for person in people {
            self.select_for_person(person, options, since, &mut summary)?;
        }

        Ok(summary)
    }

    fn select_for_person(
        &self,
        person: &mut Person,
        options: SelectionOptions,
        since: NaiveDateTime,
        summary: &mut SelectionSummary,
    ) -> Result<()> {
        summary.people_considered += 1;

        let group_type_ids = person.eligible_group_type_ids();
        let records = if group_type_ids.is_empty() {
            Vec::new()
        } else {
            self.attendance
                .find_recent_attendance(person.person_id, &group_type_ids, since)?
        };

        let Some(last_date) = records.iter().map(AttendanceRecord::attended_on).max() else {
            debug!(person_id = %person.person_id, "No attendance in window");
            summary.people_without_history += 1;
            return Ok(());
        };

        for record in records.iter().filter(|r| r.attended_on() >= last_date) {
            match self.resolve(person, record, options) {
                Ok((path, chain)) => {
                    if path.apply(person) {
                        debug!(
                            person_id = %chain.person_id,
                            group_type_id = %chain.group_type_id,
                            group_id = %chain.group_id,
                            location_id = %chain.location_id,
                            schedule_id = %chain.schedule_id,
                            group_balanced = chain.group_balanced,
                            location_balanced = chain.location_balanced,
                            "Selected attended service"
                        );
                        summary.selections.push(chain);
                    }
                }
                Err(reason) => {
                    debug!(
                        person_id = %person.person_id,
                        group_type_id = %record.group_type_id,
                        group_id = %record.group_id,
                        reason = %reason,
                        "Skipped attendance record"
                    );
                    summary.skipped.push(SkippedAttendance {
                        person_id: person.person_id,
                        reason,
                        attendance: record.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    fn resolve(
        &self,
        person: &Person,
        record: &AttendanceRecord,
        options: SelectionOptions,
    ) -> std::result::Result<(SelectionPath, SelectedChain), SkipReason> {
        let occupancy = self.occupancy.as_ref();

        let group_type_index = person
            .group_types
            .iter()
            .position(|gt| gt.group_type_id == record.group_type_id)
            .ok_or(SkipReason::GroupTypeNotOffered)?;
        let group_type = &person.group_types[group_type_index];

        let group_choice =
            resolve_group(group_type, record.group_id, options.balance_by_group, occupancy)
                .ok_or(SkipReason::GroupNotResolved)?;
        let group = &group_type.groups[group_choice.index];

        let location_choice = resolve_location(
            group,
            record.location_id,
            options.balance_by_location,
            occupancy,
        )
        .ok_or(SkipReason::LocationNotResolved)?;
        let location = &group.locations[location_choice.index];

        let schedule_index = resolve_schedule(location, record.schedule_id)
            .ok_or(SkipReason::ScheduleNotResolved)?;
        let schedule = &location.schedules[schedule_index];

        let path = SelectionPath {
            group_type: group_type_index,
            group: group_choice.index,
            location: location_choice.index,
            schedule: schedule_index,
        };
        let chain = SelectedChain {
            person_id: person.person_id,
            group_type_id: group_type.group_type_id,
            group_id: group.group_id,
            location_id: location.location_id,
            schedule_id: schedule.schedule_id,
            group_balanced: group_choice.balanced,
            location_balanced: location_choice.balanced,
        };

        Ok((path, chain))
    }
}
