use crate::error::{env_error, AppResult};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;
use toml;

/// Default title for new availability slots
pub const DEFAULT_SLOT_TITLE: &str = "Available";

/// Default start time preset for the slot editor
pub const DEFAULT_SLOT_START: &str = "09:00";

/// Default end time preset for the slot editor
pub const DEFAULT_SLOT_END: &str = "10:00";

/// Main configuration structure for the application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Id of the signed-in user
    pub user_id: String,
    /// Display name of the signed-in user
    pub user_name: String,
    /// Role of the signed-in user ("entrepreneur" or "investor")
    pub user_role: String,
    /// Title preset for new availability slots
    pub slot_title: String,
    /// Start time preset (HH:MM) for new availability slots
    pub slot_start_time: String,
    /// End time preset (HH:MM) for new availability slots
    pub slot_end_time: String,
    /// Opening wallet balance for the payment service
    pub starting_balance: f64,
    /// Seconds the simulated call service waits before reporting connected
    pub call_connect_delay_secs: u64,
    /// Map of component names to their enabled status
    pub components: HashMap<String, bool>,
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> AppResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        // Required environment variables
        let user_id = env::var("VENTURELINK_USER_ID").map_err(|_| env_error("VENTURELINK_USER_ID"))?;
        let user_name =
            env::var("VENTURELINK_USER_NAME").map_err(|_| env_error("VENTURELINK_USER_NAME"))?;

        // Role defaults to entrepreneur
        let user_role =
            env::var("VENTURELINK_USER_ROLE").unwrap_or_else(|_| String::from("entrepreneur"));

        // Slot editor presets
        let slot_title =
            env::var("SLOT_TITLE").unwrap_or_else(|_| String::from(DEFAULT_SLOT_TITLE));
        let slot_start_time =
            env::var("SLOT_START_TIME").unwrap_or_else(|_| String::from(DEFAULT_SLOT_START));
        let slot_end_time =
            env::var("SLOT_END_TIME").unwrap_or_else(|_| String::from(DEFAULT_SLOT_END));

        // Wallet and call simulation settings
        let starting_balance = env::var("STARTING_BALANCE")
            .ok()
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(0.0);

        let call_connect_delay_secs = env::var("CALL_CONNECT_DELAY_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(2);

        // Initialize default components
        let mut components = HashMap::new();
        components.insert("scheduler".to_string(), true);
        components.insert("payments".to_string(), true);
        components.insert("signing".to_string(), true);
        components.insert("calls".to_string(), true);
        components.insert("connections".to_string(), true);

        // Load components configuration from file if it exists
        if let Ok(content) = fs::read_to_string("config/components.toml") {
            if let Ok(file_components) = toml::from_str::<HashMap<String, bool>>(&content) {
                // Merge with defaults
                for (key, value) in file_components {
                    components.insert(key, value);
                }
            }
        }

        Ok(Config {
            user_id,
            user_name,
            user_role,
            slot_title,
            slot_start_time,
            slot_end_time,
            starting_balance,
            call_connect_delay_secs,
            components,
        })
    }

    /// Check if a component is enabled
    pub fn is_component_enabled(&self, name: &str) -> bool {
        *self.components.get(name).unwrap_or(&false)
    }

    /// Update component enabled status
    #[allow(dead_code)]
    pub fn set_component_enabled(&mut self, name: &str, enabled: bool) -> AppResult<()> {
        self.components.insert(name.to_string(), enabled);
        self.save_components()
    }

    /// Save component configuration to file
    #[allow(dead_code)]
    fn save_components(&self) -> AppResult<()> {
        // Create config directory if it doesn't exist
        if !Path::new("config").exists() {
            fs::create_dir("config")?;
        }

        let toml_str = toml::to_string(&self.components)?;
        fs::write("config/components.toml", toml_str)?;

        Ok(())
    }
}
