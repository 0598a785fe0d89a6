//! # Configuration
//!
//! Defaults for the selection action. A host can ship them in TOML files or
//! environment variables; the workflow action's own attributes still win for
//! a single run.

pub mod loader;

pub use loader::ConfigLoader;

use crate::constants::{DEFAULT_LOOKBACK_MONTHS, MAX_LOOKBACK_MONTHS};
use crate::error::{CheckInError, Result};
use crate::selection::SelectionOptions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Prefer the group with the fewest people across its locations
    pub room_balance_by_group: bool,
    /// Prefer the location with the fewest people
    pub room_balance_by_location: bool,
    /// Months of attendance history consulted
    pub lookback_months: u32,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            room_balance_by_group: false,
            room_balance_by_location: false,
            lookback_months: DEFAULT_LOOKBACK_MONTHS,
        }
    }
}

impl SelectorConfig {
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_LOOKBACK_MONTHS).contains(&self.lookback_months) {
            return Err(CheckInError::Configuration(format!(
                "lookback_months must be between 1 and {MAX_LOOKBACK_MONTHS}, got {}",
                self.lookback_months
            )));
        }
        Ok(())
    }

    pub fn selection_options(&self) -> SelectionOptions {
        SelectionOptions {
            balance_by_group: self.room_balance_by_group,
            balance_by_location: self.room_balance_by_location,
        }
    }
}
