// Provider configuration
// Identity and default cost are fixed once at construction time

use thiserror::Error;

/// Environment variable holding the provider identity string
pub const PROVIDER_ID_VAR: &str = "BCRYPT_PROVIDER_ID";

/// Environment variable holding the default bcrypt cost
pub const DEFAULT_COST_VAR: &str = "BCRYPT_DEFAULT_COST";

/// Identity string used when none is configured
pub const DEFAULT_PROVIDER_ID: &str = "bcrypt";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("default cost is not a valid number: {0}")]
    InvalidCost(String),

    #[error("provider id must not be empty")]
    EmptyProviderId,
}

/// Fixed configuration for a bcrypt credential hash provider
///
/// # Fields
/// * `provider_id` - Identity written into every record the provider produces
/// * `default_cost` - Cost used when neither caller nor policy supplies one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub provider_id: String,
    pub default_cost: u32,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider_id: DEFAULT_PROVIDER_ID.to_string(),
            default_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl ProviderConfig {
    /// Creates a configuration from explicit values
    pub fn new(provider_id: impl Into<String>, default_cost: u32) -> Self {
        Self {
            provider_id: provider_id.into(),
            default_cost,
        }
    }

    /// Loads configuration from the process environment
    ///
    /// A `.env` file is read first when one exists. Missing variables fall
    /// back to the defaults with a warning.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup
    ///
    /// Cost range is not checked here; the hash engine rejects unsupported
    /// costs when it is asked to hash.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let provider_id = match lookup(PROVIDER_ID_VAR) {
            Some(id) => {
                let id = id.trim().to_string();
                if id.is_empty() {
                    return Err(ConfigError::EmptyProviderId);
                }
                id
            }
            None => {
                tracing::warn!(
                    "{} not set, using default '{}'",
                    PROVIDER_ID_VAR,
                    defaults.provider_id
                );
                defaults.provider_id
            }
        };

        let default_cost = match lookup(DEFAULT_COST_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidCost(raw.clone()))?,
            None => {
                tracing::warn!(
                    "{} not set, using default {}",
                    DEFAULT_COST_VAR,
                    defaults.default_cost
                );
                defaults.default_cost
            }
        };

        Ok(Self {
            provider_id,
            default_cost,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ProviderConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ProviderConfig::default());
        assert_eq!(config.provider_id, "bcrypt");
        assert_eq!(config.default_cost, bcrypt::DEFAULT_COST);
    }

    #[test]
    fn reads_both_values() {
        let config = ProviderConfig::from_lookup(lookup_from(&[
            (PROVIDER_ID_VAR, "bcrypt-legacy"),
            (DEFAULT_COST_VAR, " 10 "),
        ]))
        .unwrap();

        assert_eq!(config.provider_id, "bcrypt-legacy");
        assert_eq!(config.default_cost, 10);
    }

    #[test]
    fn rejects_non_numeric_cost() {
        let result = ProviderConfig::from_lookup(lookup_from(&[(DEFAULT_COST_VAR, "high")]));
        assert!(matches!(result, Err(ConfigError::InvalidCost(v)) if v == "high"));
    }

    #[test]
    fn rejects_negative_cost() {
        let result = ProviderConfig::from_lookup(lookup_from(&[(DEFAULT_COST_VAR, "-1")]));
        assert!(result.is_err());
    }

    #[test]
    fn rejects_blank_provider_id() {
        let result = ProviderConfig::from_lookup(lookup_from(&[(PROVIDER_ID_VAR, "  ")]));
        assert!(matches!(result, Err(ConfigError::EmptyProviderId)));
    }
}
