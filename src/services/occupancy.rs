//! # Occupancy Service
//!
//! Live head counts per location. Counts move while a session is deciding:
//! other kiosks check people in and out concurrently, and every read is a
//! fresh point-in-time value.

use crate::models::LocationId;
use dashmap::DashMap;
use std::collections::HashMap;

/// Capability for reading the current number of people checked into a location
pub trait OccupancyService: Send + Sync {
    /// Unknown locations read as zero
    fn current_count(&self, location_id: LocationId) -> u32;
}

/// Shared in-memory occupancy counters
#[derive(Debug, Default)]
pub struct KioskOccupancy {
    counts: DashMap<LocationId, u32>,
}

impl KioskOccupancy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_counts(counts: HashMap<LocationId, u32>) -> Self {
        Self {
            counts: counts.into_iter().collect(),
        }
    }

    pub fn set(&self, location_id: LocationId, count: u32) {
        self.counts.insert(location_id, count);
    }

    /// Record one person entering the location
    pub fn check_in(&self, location_id: LocationId) -> u32 {
        let mut entry = self.counts.entry(location_id).or_insert(0);
        let next = entry.saturating_add(1);
        *entry = next;
        next
    }

    /// Record one person leaving the location
    pub fn check_out(&self, location_id: LocationId) -> u32 {
        let mut entry = self.counts.entry(location_id).or_insert(0);
        let next = entry.saturating_sub(1);
        *entry = next;
        next
    }

    pub fn snapshot(&self) -> HashMap<LocationId, u32> {
        self.counts
            .iter()
            .map(|entry| (*entry.key(), *entry.value()))
            .collect()
    }
}

impl OccupancyService for KioskOccupancy {
    fn current_count(&self, location_id: LocationId) -> u32 {
        self.counts.get(&location_id).map_or(0, |count| *count)
    }
}
