//! # Workflow Actions
//!
//! The host check-in workflow runs a sequence of action components against a
//! kiosk session. Each component reads its attributes, takes the session's
//! check-in state from the workflow entity, mutates it and reports
//! success together with any error messages.
//!
//! ## Usage
//!
//! ```rust
//! use attended_checkin::action::{ActionComponent, ActionContext, SelectByMultipleAttended};
//! use attended_checkin::models::CheckInState;
//! use attended_checkin::services::{InMemoryAttendanceStore, KioskOccupancy};
//! use std::sync::Arc;
//!
//! let action = SelectByMultipleAttended::new(
//!     Arc::new(InMemoryAttendanceStore::default()),
//!     Arc::new(KioskOccupancy::new()),
//! );
//!
//! let mut entity = Some(CheckInState::default());
//! let result = action.execute(&mut entity, &ActionContext::default());
//! assert!(result.success);
//! ```

pub mod attributes;
pub mod context;
pub mod select_by_multiple_attended;
pub mod state_provider;

pub use attributes::{ActionAttributes, AttributeDefinition};
pub use context::ActionContext;
pub use select_by_multiple_attended::SelectByMultipleAttended;
pub use state_provider::CheckInStateProvider;

use crate::selection::SelectionSummary;
use serde::{Deserialize, Serialize};

/// Outcome reported back to the host workflow
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    pub success: bool,
    pub error_messages: Vec<String>,
    /// Present whenever the selection itself ran to completion
    pub summary: Option<SelectionSummary>,
}

impl ActionResult {
    pub fn success(summary: SelectionSummary) -> Self {
        Self {
            success: true,
            error_messages: Vec::new(),
            summary: Some(summary),
        }
    }

    pub fn failure(error_messages: Vec<String>) -> Self {
        Self {
            success: false,
            error_messages,
            summary: None,
        }
    }
}

/// A rule-evaluation step of the host's check-in workflow
pub trait ActionComponent: Send + Sync {
    /// Run against the state carried by `entity`
    ///
    /// Never panics on missing data: absent state and collaborator failures
    /// come back as `success = false` with error messages.
    fn execute(
        &self,
        entity: &mut dyn CheckInStateProvider,
        context: &ActionContext,
    ) -> ActionResult;

    /// Component name shown by the host
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str {
        ""
    }

    /// Attributes the host should offer when configuring this action
    fn attribute_definitions(&self) -> Vec<AttributeDefinition> {
        Vec::new()
    }
}
