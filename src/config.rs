//! Configuration for the membership provider
//!
//! This module handles loading, validation, and merging of the
//! membership configuration.

use crate::error::{MembershipError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Membership provider configuration
///
/// Names the user table joined by the username-scoped confirmation
/// lookup. All three values are interpolated into SQL text, so they
/// are restricted to plain identifiers by [`validate`](Self::validate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipConfig {
    /// Name of the user table
    #[serde(default = "default_user_table_name")]
    pub user_table_name: String,
    /// Name of the user id column in the user table
    #[serde(default = "default_user_id_column")]
    pub user_id_column: String,
    /// Name of the username column in the user table
    #[serde(default = "default_user_name_column")]
    pub user_name_column: String,
}

fn default_user_table_name() -> String {
    "users".to_string()
}

fn default_user_id_column() -> String {
    "user_id".to_string()
}

fn default_user_name_column() -> String {
    "user_name".to_string()
}

impl Default for MembershipConfig {
    fn default() -> Self {
        Self {
            user_table_name: default_user_table_name(),
            user_id_column: default_user_id_column(),
            user_name_column: default_user_name_column(),
        }
    }
}

impl MembershipConfig {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading membership configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| MembershipError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| MembershipError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate().map_err(MembershipError::Config)?;

        debug!("Membership configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading membership configuration from environment variables");

        let mut config = Self::default();
        if let Ok(table) = std::env::var("MEMBERSHIP_USER_TABLE") {
            config.user_table_name = table;
        }
        if let Ok(column) = std::env::var("MEMBERSHIP_USER_ID_COLUMN") {
            config.user_id_column = column;
        }
        if let Ok(column) = std::env::var("MEMBERSHIP_USER_NAME_COLUMN") {
            config.user_name_column = column;
        }

        config.validate().map_err(MembershipError::Config)?;
        Ok(config)
    }

    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        if other.user_table_name != default_user_table_name() {
            self.user_table_name = other.user_table_name;
        }
        if other.user_id_column != default_user_id_column() {
            self.user_id_column = other.user_id_column;
        }
        if other.user_name_column != default_user_name_column() {
            self.user_name_column = other.user_name_column;
        }
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        debug!("Validating membership configuration");

        validate_identifier("user_table_name", &self.user_table_name)?;
        validate_identifier("user_id_column", &self.user_id_column)?;
        validate_identifier("user_name_column", &self.user_name_column)?;

        Ok(())
    }
}

// Values end up in SQL text, so only plain identifiers are accepted.
fn validate_identifier(field: &str, value: &str) -> std::result::Result<(), String> {
    let mut chars = value.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(format!("{} must be a plain SQL identifier, got {:?}", field, value))
    }
}
