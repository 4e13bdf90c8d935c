use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by credential hash providers and the pieces around them
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Invalid cost parameter: {cost}")]
    InvalidCostParameter { cost: u32 },

    #[error("Hash engine failure: {0}")]
    Engine(String),

    #[error("Unknown credential hash provider: {0}")]
    UnknownProvider(String),

    #[error("Invalid password policy: {0}")]
    InvalidPolicy(String),

    #[error("Invalid stored salt: {0}")]
    InvalidSalt(String),

    #[error("Credential serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type ProviderResult<T> = Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_cost_message_names_the_cost() {
        let err = ProviderError::InvalidCostParameter { cost: 42 };
        assert_eq!(err.to_string(), "Invalid cost parameter: 42");
    }

    #[test]
    fn config_errors_convert() {
        let err: ProviderError = ConfigError::InvalidCost("abc".to_string()).into();
        assert!(matches!(err, ProviderError::Config(_)));
    }
}
