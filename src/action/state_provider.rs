use crate::error::{CheckInError, Result};
use crate::models::CheckInState;

/// Supplies the check-in state a workflow entity carries
///
/// The host's workflow entity may not have a check-in session attached (an
/// expired kiosk session, a misconfigured workflow). That case is reported as
/// [`CheckInError::StateUnavailable`] and fails the action before any
/// selection happens.
pub trait CheckInStateProvider {
    fn check_in_state(&mut self) -> Result<&mut CheckInState>;
}

impl CheckInStateProvider for CheckInState {
    fn check_in_state(&mut self) -> Result<&mut CheckInState> {
        Ok(self)
    }
}

impl CheckInStateProvider for Option<CheckInState> {
    fn check_in_state(&mut self) -> Result<&mut CheckInState> {
        self.as_mut().ok_or_else(|| {
            CheckInError::StateUnavailable(
                "check-in state not found on workflow entity".to_string(),
            )
        })
    }
}
