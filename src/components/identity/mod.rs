use crate::config::Config;
use serde::{Deserialize, Serialize};

/// Role of a platform member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Entrepreneur,
    Investor,
}

impl UserRole {
    /// Parse a role string, defaulting to entrepreneur
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "investor" => UserRole::Investor,
            _ => UserRole::Entrepreneur,
        }
    }

    /// Short label for display
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Entrepreneur => "entrepreneur",
            UserRole::Investor => "investor",
        }
    }
}

/// The signed-in user as reported by the session provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub name: String,
    pub role: UserRole,
}

impl CurrentUser {
    /// Build the current user from configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            id: config.user_id.clone(),
            name: config.user_name.clone(),
            role: UserRole::parse(&config.user_role),
        }
    }
}
