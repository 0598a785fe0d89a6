//! Per-invocation context handed to an action

use super::attributes::ActionAttributes;
use chrono::{Local, NaiveDate};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ActionContext {
    /// Attribute values of the workflow action instance
    pub attributes: ActionAttributes,
    /// Local calendar date the look-back window ends on
    pub today: NaiveDate,
    /// Correlates the log lines of one invocation
    pub run_id: Uuid,
}

impl ActionContext {
    pub fn new(attributes: ActionAttributes) -> Self {
        Self {
            attributes,
            today: Local::now().date_naive(),
            run_id: Uuid::new_v4(),
        }
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }
}

impl Default for ActionContext {
    fn default() -> Self {
        Self::new(ActionAttributes::empty())
    }
}
