// Provider registry
// Maps provider ids to implementations; built once at startup and passed
// explicitly to whatever needs it

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::credential::CredentialRecord;
use crate::domain::provider::CredentialHashProvider;
use crate::errors::{ProviderError, ProviderResult};

/// Lookup table from provider id to credential hash provider
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use bcrypt_hash_provider::auth::{BcryptHashProvider, ProviderRegistry};
///
/// let mut registry = ProviderRegistry::new("bcrypt");
/// registry.register(Arc::new(BcryptHashProvider::new("bcrypt", 4)));
///
/// assert!(registry.get("bcrypt").is_ok());
/// assert!(registry.get("md5").is_err());
/// ```
pub struct ProviderRegistry {
    default_id: String,
    providers: HashMap<String, Arc<dyn CredentialHashProvider>>,
}

impl ProviderRegistry {
    /// Creates an empty registry whose default provider is `default_id`
    pub fn new(default_id: impl Into<String>) -> Self {
        Self {
            default_id: default_id.into(),
            providers: HashMap::new(),
        }
    }

    /// Registers a provider under its own id
    ///
    /// # Returns
    /// The provider previously registered under the same id, if any
    pub fn register(
        &mut self,
        provider: Arc<dyn CredentialHashProvider>,
    ) -> Option<Arc<dyn CredentialHashProvider>> {
        let id = provider.id().to_string();
        let previous = self.providers.insert(id.clone(), provider);

        if previous.is_some() {
            tracing::warn!(provider = %id, "replaced existing credential hash provider");
        } else {
            tracing::info!(provider = %id, "registered credential hash provider");
        }
        previous
    }

    /// Finds the provider registered under `id`
    pub fn get(&self, id: &str) -> ProviderResult<Arc<dyn CredentialHashProvider>> {
        self.providers
            .get(id)
            .cloned()
            .ok_or_else(|| ProviderError::UnknownProvider(id.to_string()))
    }

    /// Provider used for new credentials when the policy names none
    pub fn default_provider(&self) -> ProviderResult<Arc<dyn CredentialHashProvider>> {
        self.get(&self.default_id)
    }

    pub fn default_id(&self) -> &str {
        &self.default_id
    }

    /// Finds the provider that produced `record`
    pub fn provider_for(
        &self,
        record: &CredentialRecord,
    ) -> ProviderResult<Arc<dyn CredentialHashProvider>> {
        self.get(record.algorithm_id())
    }

    /// Registered ids in sorted order
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Closes every registered provider
    pub fn close(&self) {
        for provider in self.providers.values() {
            provider.close();
        }
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("default_id", &self.default_id)
            .field("providers", &self.ids())
            .finish()
    }
}
