//! # Constants
//!
//! Attribute keys, component metadata and the defaults that bound the
//! attended-service selection.

/// Workflow action attribute keys as the host stores them
pub mod attributes {
    pub const ROOM_BALANCE_BY_GROUP: &str = "RoomBalanceByGroup";
    pub const ROOM_BALANCE_BY_LOCATION: &str = "RoomBalanceByLocation";
}

/// Metadata the host shows for this action component
pub mod component {
    pub const NAME: &str = "Select By Multiple Services Attended";
    pub const DESCRIPTION: &str = "Select multiple services this person last checked into";
    pub const ROOM_BALANCE_BY_GROUP_HELP: &str = "Select the group with the least number of \
        current people. Best for groups having a 1:1 ratio with locations.";
    pub const ROOM_BALANCE_BY_LOCATION_HELP: &str = "Select the location with the least number of \
        current people. Best for groups having 1 to many ratio with locations.";
}

/// Environment variable names read by configuration and logging
pub mod env {
    pub const ENVIRONMENT: &str = "ATTENDED_CHECKIN_ENV";
    pub const FALLBACK_ENVIRONMENT: &str = "APP_ENV";
    pub const CONFIG_PREFIX: &str = "ATTENDED_CHECKIN";
    pub const LOG_FORMAT: &str = "ATTENDED_CHECKIN_LOG_FORMAT";
}

/// Months of attendance history consulted
pub const DEFAULT_LOOKBACK_MONTHS: u32 = 6;

/// Upper bound accepted for `lookback_months`
pub const MAX_LOOKBACK_MONTHS: u32 = 120;

/// Base name of the configuration files (`<name>.toml`, `<name>.<env>.toml`)
pub const CONFIG_FILE_STEM: &str = "attended_checkin";

pub const DEFAULT_ENVIRONMENT: &str = "development";
