// 11.0 config.rs: all league settings in one place. names, admin token, event retention.
// 11.1 presets per environment. validate() before handing a config to League::new.

use serde::{Deserialize, Serialize};

// Complete configuration for one league site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueConfig {
    // Full league name shown in the header
    pub league_name: String,
    // Abbreviation (e.g. "MKHL")
    pub short_name: String,
    // Token that unlocks admin mode. None disables editing entirely
    #[serde(default, skip_serializing)]
    pub admin_token: Option<String>,
    // Maximum number of audit events kept in memory
    pub max_events: usize,
    // Start from the sample league when the repository is empty
    pub seed_on_empty: bool,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            league_name: "Amateur Hockey League".to_string(),
            short_name: "MKHL".to_string(),
            admin_token: None,
            max_events: 10_000,
            seed_on_empty: true,
        }
    }
}

impl LeagueConfig {
    // Local setup: fixed dev token so the admin panel can be exercised
    pub fn development() -> Self {
        let mut config = Self::default();
        config.admin_token = Some("dev-admin".to_string());
        config.max_events = 1_000;
        config
    }

    // Live site: token comes from the host, nothing is seeded
    pub fn production(admin_token: impl Into<String>) -> Self {
        let mut config = Self::default();
        config.admin_token = Some(admin_token.into());
        config.seed_on_empty = false;
        config
    }

    pub fn with_admin_token(mut self, token: impl Into<String>) -> Self {
        self.admin_token = Some(token.into());
        self
    }

    // Validate the configuration for internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.league_name.trim().is_empty() {
            return Err(ConfigError::InvalidName {
                reason: "League name must not be empty".to_string(),
            });
        }

        if self.short_name.trim().is_empty() {
            return Err(ConfigError::InvalidName {
                reason: "Short name must not be empty".to_string(),
            });
        }

        if self.max_events == 0 {
            return Err(ConfigError::InvalidRetention {
                reason: "Need to keep at least 1 event".to_string(),
            });
        }

        if let Some(token) = &self.admin_token {
            if token.trim().is_empty() {
                return Err(ConfigError::InvalidAdminToken {
                    reason: "Admin token is blank; use None to disable editing".to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn editing_enabled(&self) -> bool {
        self.admin_token.is_some()
    }
}

// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid name: {reason}")]
    InvalidName { reason: String },

    #[error("Invalid event retention: {reason}")]
    InvalidRetention { reason: String },

    #[error("Invalid admin token: {reason}")]
    InvalidAdminToken { reason: String },
}

// Environment presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn config(&self, admin_token: Option<String>) -> LeagueConfig {
        match (self, admin_token) {
            (Environment::Development, None) => LeagueConfig::development(),
            (Environment::Development, Some(token)) => LeagueConfig::development().with_admin_token(token),
            (Environment::Production, Some(token)) => LeagueConfig::production(token),
            // no token in production means a read-only site
            (Environment::Production, None) => LeagueConfig {
                seed_on_empty: false,
                ..LeagueConfig::default()
            },
        }
    }
}
