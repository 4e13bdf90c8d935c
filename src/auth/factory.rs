// Factory for bcrypt providers
// Turns a ProviderConfig into a ready provider once at startup

use super::bcrypt_provider::BcryptHashProvider;
use crate::config::{ProviderConfig, DEFAULT_PROVIDER_ID};
use crate::domain::hash_engine::HashEngine;
use crate::errors::ProviderResult;
use crate::infrastructure::BcryptEngine;

/// Builds bcrypt credential hash providers from configuration
#[derive(Debug, Clone, Default)]
pub struct BcryptHashProviderFactory {
    config: ProviderConfig,
}

impl BcryptHashProviderFactory {
    /// Identity of providers built from the default configuration
    pub const ID: &'static str = DEFAULT_PROVIDER_ID;

    pub fn new(config: ProviderConfig) -> Self {
        Self { config }
    }

    /// Creates a factory from `BCRYPT_PROVIDER_ID` / `BCRYPT_DEFAULT_COST`
    pub fn from_env() -> ProviderResult<Self> {
        Ok(Self::new(ProviderConfig::from_env()?))
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Creates a provider backed by the bcrypt engine
    pub fn create(&self) -> BcryptHashProvider<BcryptEngine> {
        self.create_with_engine(BcryptEngine::new())
    }

    /// Creates a provider backed by the given engine
    pub fn create_with_engine<E: HashEngine>(&self, engine: E) -> BcryptHashProvider<E> {
        tracing::debug!(
            provider = %self.config.provider_id,
            default_cost = self.config.default_cost,
            "creating bcrypt provider"
        );
        BcryptHashProvider::with_engine(
            self.config.provider_id.clone(),
            self.config.default_cost,
            engine,
        )
    }
}
