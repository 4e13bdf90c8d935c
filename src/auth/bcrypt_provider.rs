// bcrypt credential hash provider
// Stamps records with the provider id and resolved cost, delegates hashing to
// a HashEngine

use crate::domain::credential::{CredentialRecord, PasswordPolicy};
use crate::domain::hash_engine::{EngineError, HashEngine};
use crate::domain::provider::CredentialHashProvider;
use crate::errors::{ProviderError, ProviderResult};
use crate::infrastructure::BcryptEngine;

/// Credential hash provider for bcrypt
///
/// Holds a fixed identity string, a default cost and a bound engine. The
/// engine is generic so tests and alternative builds can substitute their own.
///
/// # Example
/// ```
/// use bcrypt_hash_provider::auth::BcryptHashProvider;
/// use bcrypt_hash_provider::domain::provider::CredentialHashProvider;
///
/// let provider = BcryptHashProvider::new("bcrypt", 4);
/// let record = provider.encode_credential("S3cret!", None).expect("valid cost");
///
/// assert_eq!(record.cost_factor(), 4);
/// assert!(provider.verify("S3cret!", &record));
/// ```
#[derive(Debug, Clone)]
pub struct BcryptHashProvider<E = BcryptEngine> {
    provider_id: String,
    default_cost: u32,
    engine: E,
}

impl BcryptHashProvider<BcryptEngine> {
    /// Creates a provider backed by the bcrypt engine
    pub fn new(provider_id: impl Into<String>, default_cost: u32) -> Self {
        Self::with_engine(provider_id, default_cost, BcryptEngine::new())
    }
}

impl<E: HashEngine> BcryptHashProvider<E> {
    /// Creates a provider backed by an arbitrary engine
    pub fn with_engine(provider_id: impl Into<String>, default_cost: u32, engine: E) -> Self {
        Self {
            provider_id: provider_id.into(),
            default_cost,
            engine,
        }
    }

    pub fn default_cost(&self) -> u32 {
        self.default_cost
    }

    /// Absent means the provider default
    fn resolve_cost(&self, requested: Option<u32>) -> u32 {
        requested.unwrap_or(self.default_cost)
    }
}

impl<E: HashEngine> CredentialHashProvider for BcryptHashProvider<E> {
    fn id(&self) -> &str {
        &self.provider_id
    }

    fn encode(&self, raw_password: &str, cost: Option<u32>) -> ProviderResult<String> {
        let cost = self.resolve_cost(cost);
        tracing::debug!(provider = %self.provider_id, cost, "encoding password");

        self.engine.hash(raw_password, cost).map_err(|e| match e {
            EngineError::CostNotAllowed(cost) => ProviderError::InvalidCostParameter { cost },
            other => ProviderError::Engine(other.to_string()),
        })
    }

    fn encode_credential(
        &self,
        raw_password: &str,
        cost: Option<u32>,
    ) -> ProviderResult<CredentialRecord> {
        let cost = self.resolve_cost(cost);
        let encoded = self.encode(raw_password, Some(cost))?;

        // Salt lives inside the encoded hash, the record's salt slot stays empty
        Ok(CredentialRecord::new(self.provider_id.clone(), cost, encoded))
    }

    fn verify(&self, raw_password: &str, record: &CredentialRecord) -> bool {
        match self.engine.verify(raw_password, record.encoded_secret()) {
            Ok(verified) => {
                tracing::debug!(provider = %self.provider_id, verified, "verified password");
                verified
            }
            Err(e) => {
                tracing::warn!(
                    provider = %self.provider_id,
                    algorithm = %record.algorithm_id(),
                    error = %e,
                    "stored credential could not be verified"
                );
                false
            }
        }
    }

    fn policy_check(&self, policy: &PasswordPolicy, record: &CredentialRecord) -> bool {
        let desired_cost = self.resolve_cost(policy.hash_iterations());
        let conforms =
            record.cost_factor() == desired_cost && record.algorithm_id() == self.provider_id;

        tracing::debug!(
            provider = %self.provider_id,
            algorithm = %record.algorithm_id(),
            stored_cost = record.cost_factor(),
            desired_cost,
            conforms,
            "checked credential against policy"
        );
        conforms
    }

    fn close(&self) {
        tracing::debug!(provider = %self.provider_id, "closing provider");
    }
}
