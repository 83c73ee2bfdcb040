//! Factory-scoped configuration.
//!
//! Resolution order: the TOML config file (if present), then environment
//! variables, which win over the file. Validation runs before any fetch so
//! an incomplete configuration is reported up front.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "pipemon.toml";

pub const ENV_SUBSCRIPTION_ID: &str = "PIPEMON_SUBSCRIPTION_ID";
pub const ENV_RESOURCE_GROUP: &str = "PIPEMON_RESOURCE_GROUP";
pub const ENV_FACTORY_NAME: &str = "PIPEMON_FACTORY_NAME";

/// Identifies one data factory within one cloud subscription.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactoryConfig {
    pub subscription_id: String,
    pub resource_group: String,
    pub factory_name: String,
}

impl FactoryConfig {
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group: impl Into<String>,
        factory_name: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group: resource_group.into(),
            factory_name: factory_name.into(),
        }
    }

    /// Load configuration from `path`, letting environment variables
    /// override file values, and validate the result.
    pub fn load(path: &Path) -> ClientResult<Self> {
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(path)?;
            toml::from_str(&raw)?
        } else {
            Self::default()
        };

        apply_env(&mut config.subscription_id, ENV_SUBSCRIPTION_ID);
        apply_env(&mut config.resource_group, ENV_RESOURCE_GROUP);
        apply_env(&mut config.factory_name, ENV_FACTORY_NAME);

        config.validate()?;
        Ok(config)
    }

    /// Check that every field is populated.
    pub fn validate(&self) -> ClientResult<()> {
        if self.subscription_id.trim().is_empty() {
            return Err(ClientError::MissingConfig("subscription_id"));
        }
        if self.resource_group.trim().is_empty() {
            return Err(ClientError::MissingConfig("resource_group"));
        }
        if self.factory_name.trim().is_empty() {
            return Err(ClientError::MissingConfig("factory_name"));
        }
        Ok(())
    }

    /// Write the configuration as TOML to `path`.
    pub fn save(&self, path: &Path) -> ClientResult<()> {
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(path, raw)?;
        Ok(())
    }
}

fn apply_env(field: &mut String, var: &str) {
    if let Ok(value) = std::env::var(var) {
        if !value.trim().is_empty() {
            *field = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // `load` reads process-wide environment variables, so every test that
    // calls it (or mutates PIPEMON_*) serializes on this lock.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn full_config() -> FactoryConfig {
        FactoryConfig::new("sub-123", "rg-data", "factory-prod")
    }

    #[test]
    fn save_and_load_round_trip() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);

        let config = full_config();
        config.save(&path).unwrap();

        let loaded = FactoryConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_without_env_is_a_config_error() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        // Assumes PIPEMON_* vars are not set in the test environment.
        let err = FactoryConfig::load(&path).unwrap_err();
        assert!(matches!(err, ClientError::MissingConfig(_)));
    }

    #[test]
    fn blank_field_fails_validation() {
        let config = FactoryConfig::new("sub-123", "  ", "factory-prod");
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ClientError::MissingConfig("resource_group")));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, "subscription_id = [not toml").unwrap();

        let err = FactoryConfig::load(&path).unwrap_err();
        assert!(matches!(err, ClientError::ConfigParse(_)));
    }

    #[test]
    fn environment_overrides_file_values() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        full_config().save(&path).unwrap();

        std::env::set_var(ENV_FACTORY_NAME, "factory-override");
        let loaded = FactoryConfig::load(&path).unwrap();
        std::env::remove_var(ENV_FACTORY_NAME);

        assert_eq!(loaded.factory_name, "factory-override");
        assert_eq!(loaded.subscription_id, "sub-123");
    }
}
