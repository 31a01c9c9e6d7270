//! Configuration management for the pensum application.
//!
//! Settings are stored as JSON in the platform application data directory
//! and split into optional modules: activity monitoring parameters and the
//! learning platform server connection. Unconfigured modules are omitted
//! from the file, and a missing file yields the defaults, so the tool runs
//! with minimal setup.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pensum::libs::config::Config;
//!
//! // Load existing configuration or create default
//! let config = Config::read()?;
//!
//! // Run interactive configuration setup
//! let updated_config = Config::init()?;
//! updated_config.save()?;
//! # anyhow::Ok(())
//! ```

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Activity monitoring and clock cadence settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MonitorConfig {
    /// Seconds without input after which the user no longer counts as
    /// engaged. Idle ticks are never counted.
    pub idle_threshold: u64,

    /// Seconds between session clock ticks. One engaged tick adds one
    /// minute, so anything other than 60 skews the counted totals and is
    /// only useful for debugging.
    pub tick_interval: u64,
}

/// Learning platform server connection.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Base URL of the platform API, e.g. `https://api.cogito.edu`.
    pub api_url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Activity detection and tick cadence settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor: Option<MonitorConfig>,

    /// Platform document store and identity endpoints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
}

impl Default for MonitorConfig {
    /// Defaults matching the platform's web client: a five minute idle
    /// window and a one minute tick.
    fn default() -> Self {
        MonitorConfig {
            idle_threshold: 300,
            tick_interval: 60,
        }
    }
}

impl Config {
    /// Reads configuration from the filesystem, falling back to defaults
    /// when no file exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Presents the available modules, prompts for each selected one with
    /// current values as defaults, and returns the updated configuration
    /// ready for saving.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = ["Monitor", "Server"];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules)
            .interact()?;

        for &selection in &selected {
            match modules[selection] {
                "Monitor" => {
                    let default = config.monitor.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleMonitor);
                    config.monitor = Some(MonitorConfig {
                        idle_threshold: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptIdleThreshold.to_string())
                            .default(default.idle_threshold)
                            .interact_text()?,

                        tick_interval: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptTickInterval.to_string())
                            .default(default.tick_interval)
                            .interact_text()?,
                    });
                }
                "Server" => {
                    let default = config.server.clone().unwrap_or(ServerConfig {
                        api_url: String::new(),
                    });
                    msg_print!(Message::ConfigModuleServer);
                    config.server = Some(ServerConfig {
                        api_url: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptServerApiUrl.to_string())
                            .default(default.api_url)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
