//! Configuration Loader
//!
//! Environment-aware layering with the `config` crate:
//! `attended_checkin.toml`, then `attended_checkin.<environment>.toml`, then
//! `ATTENDED_CHECKIN_*` variables. Every layer is optional.

use super::SelectorConfig;
use crate::constants::{env as env_keys, CONFIG_FILE_STEM, DEFAULT_ENVIRONMENT};
use crate::error::Result;
use config::{Config, Environment, File};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_directory: PathBuf,
    environment: String,
    read_environment_variables: bool,
}

impl ConfigLoader {
    /// Loader for `config_dir` (default `./config`) in the detected environment
    pub fn new(config_dir: Option<PathBuf>) -> Self {
        Self {
            config_directory: config_dir.unwrap_or_else(|| PathBuf::from("config")),
            environment: Self::detect_environment(),
            read_environment_variables: true,
        }
    }

    /// Use an explicit environment instead of detecting one
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into().to_lowercase();
        self
    }

    /// Skip the `ATTENDED_CHECKIN_*` layer; tests use this to stay hermetic
    pub fn without_environment_variables(mut self) -> Self {
        self.read_environment_variables = false;
        self
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn config_directory(&self) -> &Path {
        &self.config_directory
    }

    pub fn base_file(&self) -> PathBuf {
        self.config_directory.join(format!("{CONFIG_FILE_STEM}.toml"))
    }

    pub fn environment_file(&self) -> PathBuf {
        self.config_directory
            .join(format!("{CONFIG_FILE_STEM}.{}.toml", self.environment))
    }

    pub fn load(&self) -> Result<SelectorConfig> {
        debug!(
            "Loading configuration for environment '{}' from directory: {}",
            self.environment,
            self.config_directory.display()
        );

        let mut builder = Config::builder()
            .add_source(File::from(self.base_file()).required(false))
            .add_source(File::from(self.environment_file()).required(false));

        if self.read_environment_variables {
            builder = builder.add_source(
                Environment::with_prefix(env_keys::CONFIG_PREFIX)
                    .prefix_separator("_")
                    .try_parsing(true),
            );
        }

        let config: SelectorConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        info!(
            environment = %self.environment,
            room_balance_by_group = config.room_balance_by_group,
            room_balance_by_location = config.room_balance_by_location,
            lookback_months = config.lookback_months,
            "Configuration loaded successfully"
        );

        Ok(config)
    }

    /// `ATTENDED_CHECKIN_ENV` || `APP_ENV` || `development`
    fn detect_environment() -> String {
        env::var(env_keys::ENVIRONMENT)
            .or_else(|_| env::var(env_keys::FALLBACK_ENVIRONMENT))
            .unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string())
            .to_lowercase()
    }
}
