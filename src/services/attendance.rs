//! # Attendance Store
//!
//! Read access to a person's past check-ins. The host owns the real store;
//! [`InMemoryAttendanceStore`] serves the CLI harness and tests.

use crate::error::Result;
use crate::models::{AttendanceRecord, GroupTypeId, PersonId};
use chrono::NaiveDateTime;
use parking_lot::RwLock;
use tracing::debug;

/// Capability for querying recent attendance
pub trait AttendanceStore: Send + Sync {
    /// Records for `person_id` in any of `group_type_ids` starting at or after `since`
    ///
    /// Implementations must return only records matching all three filters.
    /// Order is preserved by the caller when several records share the
    /// person's most recent day.
    fn find_recent_attendance(
        &self,
        person_id: PersonId,
        group_type_ids: &[GroupTypeId],
        since: NaiveDateTime,
    ) -> Result<Vec<AttendanceRecord>>;
}

/// Attendance store backed by a vector, in insertion order
#[derive(Debug, Default)]
pub struct InMemoryAttendanceStore {
    records: RwLock<Vec<AttendanceRecord>>,
}

impl InMemoryAttendanceStore {
    pub fn new(records: Vec<AttendanceRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Append a record, as a completed check-in would
    pub fn record(&self, record: AttendanceRecord) {
        self.records.write().push(record);
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl AttendanceStore for InMemoryAttendanceStore {
    fn find_recent_attendance(
        &self,
        person_id: PersonId,
        group_type_ids: &[GroupTypeId],
        since: NaiveDateTime,
    ) -> Result<Vec<AttendanceRecord>> {
        let matches: Vec<AttendanceRecord> = self
            .records
            .read()
            .iter()
            .filter(|r| {
                r.person_id == person_id
                    && group_type_ids.contains(&r.group_type_id)
                    && r.start_date_time >= since
            })
            .cloned()
            .collect();

        debug!(
            person_id = %person_id,
            since = %since,
            matched = matches.len(),
            "Queried in-memory attendance"
        );

        Ok(matches)
    }
}
