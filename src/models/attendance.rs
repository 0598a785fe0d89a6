use super::ids::{GroupId, GroupTypeId, LocationId, PersonId, ScheduleId};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// AttendanceRecord is one past check-in as reported by the host's attendance store
///
/// `start_date_time` is host-local wall-clock time; the day boundary used to
/// group a person's last visit is taken from it directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub person_id: PersonId,
    pub group_type_id: GroupTypeId,
    pub group_id: GroupId,
    pub location_id: LocationId,
    pub schedule_id: ScheduleId,
    pub start_date_time: NaiveDateTime,
}

impl AttendanceRecord {
    pub fn attended_on(&self) -> NaiveDate {
        self.start_date_time.date()
    }
}
