//! # Select By Multiple Services Attended
//!
//! Pre-selects, for every selected person, each service they checked into on
//! their most recent visit within the look-back window, optionally steering
//! them to the least-occupied group or room.

use super::{
    ActionAttributes, ActionComponent, ActionContext, ActionResult, AttributeDefinition,
    CheckInStateProvider,
};
use crate::config::SelectorConfig;
use crate::constants::{attributes as keys, component};
use crate::error::Result;
use crate::logging::{log_action_error, log_action_operation};
use crate::selection::{AttendanceSelector, SelectionOptions};
use crate::services::{AttendanceStore, OccupancyService};
use std::sync::Arc;
use tracing::{info_span, warn};

#[derive(Debug, Clone)]
pub struct SelectByMultipleAttended {
    selector: AttendanceSelector,
    config: SelectorConfig,
}

impl SelectByMultipleAttended {
    pub fn new(attendance: Arc<dyn AttendanceStore>, occupancy: Arc<dyn OccupancyService>) -> Self {
        Self {
            selector: AttendanceSelector::new(attendance, occupancy),
            config: SelectorConfig::default(),
        }
    }

    /// Use loaded defaults for unset attributes and the configured look-back
    pub fn with_config(mut self, config: SelectorConfig) -> Result<Self> {
        self.selector = self.selector.with_lookback_months(config.lookback_months)?;
        self.config = config;
        Ok(self)
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Attribute values override the configured defaults
    pub fn selection_options(&self, attributes: &ActionAttributes) -> SelectionOptions {
        SelectionOptions {
            balance_by_group: attributes
                .get_bool_or(keys::ROOM_BALANCE_BY_GROUP, self.config.room_balance_by_group),
            balance_by_location: attributes.get_bool_or(
                keys::ROOM_BALANCE_BY_LOCATION,
                self.config.room_balance_by_location,
            ),
        }
    }
}

impl ActionComponent for SelectByMultipleAttended {
    fn execute(
        &self,
        entity: &mut dyn CheckInStateProvider,
        context: &ActionContext,
    ) -> ActionResult {
        let run_id = context.run_id.to_string();
        let _span = info_span!("select_by_multiple_attended", run_id = %run_id).entered();

        let options = self.selection_options(&context.attributes);

        let state = match entity.check_in_state() {
            Ok(state) => state,
            Err(error) => {
                log_action_error(self.name(), &run_id, &error.to_string());
                return ActionResult::failure(vec![error.to_string()]);
            }
        };

        match self.selector.select(state, options, context.today) {
            Ok(summary) => {
                log_action_operation(
                    self.name(),
                    &run_id,
                    "completed",
                    summary.selections.len(),
                    None,
                );
                ActionResult::success(summary)
            }
            Err(error) => {
                warn!(error = %error, "Selection aborted; earlier people keep their selections");
                log_action_error(self.name(), &run_id, &error.to_string());
                ActionResult::failure(vec![error.to_string()])
            }
        }
    }

    fn name(&self) -> &'static str {
        component::NAME
    }

    fn description(&self) -> &'static str {
        component::DESCRIPTION
    }

    fn attribute_definitions(&self) -> Vec<AttributeDefinition> {
        vec![
            AttributeDefinition {
                key: keys::ROOM_BALANCE_BY_GROUP,
                name: "Room Balance By Group",
                description: component::ROOM_BALANCE_BY_GROUP_HELP,
                default: false,
            },
            AttributeDefinition {
                key: keys::ROOM_BALANCE_BY_LOCATION,
                name: "Room Balance By Location",
                description: component::ROOM_BALANCE_BY_LOCATION_HELP,
                default: false,
            },
        ]
    }
}
