//! # Structured Logging Module
//!
//! Environment-aware tracing setup for hosts and the CLI harness. Console
//! output is human-readable by default and JSON when
//! `ATTENDED_CHECKIN_LOG_FORMAT=json`.

use crate::constants::{env as env_keys, DEFAULT_ENVIRONMENT};
use chrono::Utc;
use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging once per process
pub fn init_structured_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = get_environment();
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(get_log_level(&environment)));
        let json = use_json_format();

        let console = if json {
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_ansi(false)
                .with_writer(std::io::stderr)
                .json()
                .with_filter(filter)
                .boxed()
        } else {
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr)
                .with_filter(filter)
                .boxed()
        };

        // A host may already own the global subscriber
        if tracing_subscriber::registry().with(console).try_init().is_err() {
            tracing::debug!(
                "Global tracing subscriber already initialized - keeping the existing one"
            );
        }

        tracing::debug!(
            environment = %environment,
            json = json,
            "Structured logging initialized"
        );
    });
}

fn get_environment() -> String {
    std::env::var(env_keys::ENVIRONMENT)
        .or_else(|_| std::env::var(env_keys::FALLBACK_ENVIRONMENT))
        .unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string())
}

fn get_log_level(environment: &str) -> String {
    match environment {
        "production" => "info".to_string(),
        _ => "debug".to_string(),
    }
}

fn use_json_format() -> bool {
    std::env::var(env_keys::LOG_FORMAT)
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

/// Log one invocation of a workflow action
pub fn log_action_operation(
    action: &str,
    run_id: &str,
    status: &str,
    selections: usize,
    details: Option<&str>,
) {
    tracing::info!(
        action = %action,
        run_id = %run_id,
        status = %status,
        selections = selections,
        details = details,
        timestamp = %Utc::now().to_rfc3339(),
        "ACTION_OPERATION"
    );
}

/// Log an action failure with its context
pub fn log_action_error(action: &str, run_id: &str, error: &str) {
    tracing::error!(
        action = %action,
        run_id = %run_id,
        error = %error,
        timestamp = %Utc::now().to_rfc3339(),
        "ACTION_ERROR"
    );
}
