//! # Select Attended
//!
//! Runs the attended-service selection over a JSON snapshot of a kiosk
//! session and prints the resulting state. Useful for reproducing a kiosk's
//! decision offline.
//!
//! Snapshot layout:
//!
//! ```json
//! {
//!   "state": { "families": [ ... ] },
//!   "attendance": [ { "person_id": 1, "group_type_id": 10, ... } ],
//!   "occupancy": { "1000": 4 },
//!   "attributes": { "RoomBalanceByGroup": "True" }
//! }
//! ```

use anyhow::{Context, Result};
use attended_checkin::action::{ActionAttributes, ActionComponent, ActionContext, ActionResult};
use attended_checkin::constants::attributes as keys;
use attended_checkin::logging::init_structured_logging;
use attended_checkin::models::{AttendanceRecord, CheckInState, LocationId};
use attended_checkin::services::{InMemoryAttendanceStore, KioskOccupancy};
use attended_checkin::{ConfigLoader, SelectByMultipleAttended};
use chrono::NaiveDate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "select-attended")]
#[command(about = "Select the services a person last attended for a kiosk session snapshot")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Snapshot file with state, attendance, occupancy and attributes
    #[arg(short, long)]
    input: PathBuf,

    /// Date the look-back window ends on (default: today, local time)
    #[arg(short, long)]
    today: Option<NaiveDate>,

    /// Force room balancing by group
    #[arg(long)]
    balance_by_group: bool,

    /// Force room balancing by location
    #[arg(long)]
    balance_by_location: bool,

    /// Configuration directory (default: ./config)
    #[arg(short, long)]
    config_dir: Option<PathBuf>,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Deserialize)]
struct Snapshot {
    state: Option<CheckInState>,
    #[serde(default)]
    attendance: Vec<AttendanceRecord>,
    #[serde(default)]
    occupancy: HashMap<LocationId, u32>,
    #[serde(default)]
    attributes: ActionAttributes,
}

#[derive(Debug, Serialize)]
struct Output {
    result: ActionResult,
    state: Option<CheckInState>,
}

fn main() {
    init_structured_logging();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(success) => {
            if !success {
                process::exit(1);
            }
        }
        Err(e) => {
            error!("select-attended failed: {e:#}");
            eprintln!("error: {e:#}");
            process::exit(2);
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    let raw = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("reading snapshot {}", cli.input.display()))?;
    let snapshot: Snapshot = serde_json::from_str(&raw)
        .with_context(|| format!("parsing snapshot {}", cli.input.display()))?;

    let config = ConfigLoader::new(cli.config_dir.clone())
        .load()
        .context("loading configuration")?;

    let mut attributes = snapshot.attributes;
    if cli.balance_by_group {
        attributes = attributes.with(keys::ROOM_BALANCE_BY_GROUP, true);
    }
    if cli.balance_by_location {
        attributes = attributes.with(keys::ROOM_BALANCE_BY_LOCATION, true);
    }

    let mut context = ActionContext::new(attributes);
    if let Some(today) = cli.today {
        context = context.with_today(today);
    }

    info!(
        input = %cli.input.display(),
        records = snapshot.attendance.len(),
        today = %context.today,
        "Running selection over snapshot"
    );

    let action = SelectByMultipleAttended::new(
        Arc::new(InMemoryAttendanceStore::new(snapshot.attendance)),
        Arc::new(KioskOccupancy::from_counts(snapshot.occupancy)),
    )
    .with_config(config)?;

    let mut state = snapshot.state;
    let result = action.execute(&mut state, &context);
    let success = result.success;

    let output = Output { result, state };
    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");

    Ok(success)
}
