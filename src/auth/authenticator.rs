// Password authentication flow
// Verifies against the provider that produced a record, then re-hashes
// credentials that no longer conform to the current policy

use crate::domain::credential::{CredentialRecord, PasswordPolicy};
use crate::errors::ProviderResult;

use super::registry::ProviderRegistry;

/// Result of checking a password against a stored credential
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Password matched and the stored credential conforms to the policy
    Verified,
    /// Password matched but the credential was stale; store the new record
    Rehashed(CredentialRecord),
    /// Password did not match, or the record could not be interpreted
    Rejected,
}

impl AuthOutcome {
    pub fn is_authenticated(&self) -> bool {
        !matches!(self, AuthOutcome::Rejected)
    }
}

/// Authenticates passwords against stored credentials using a registry
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use bcrypt_hash_provider::auth::{AuthOutcome, BcryptHashProvider, PasswordAuthenticator, ProviderRegistry};
/// use bcrypt_hash_provider::domain::credential::PasswordPolicy;
/// use bcrypt_hash_provider::domain::provider::CredentialHashProvider;
///
/// let provider = Arc::new(BcryptHashProvider::new("bcrypt", 4));
/// let record = provider.encode_credential("S3cret!", None).unwrap();
///
/// let mut registry = ProviderRegistry::new("bcrypt");
/// registry.register(provider);
/// let authenticator = PasswordAuthenticator::new(registry);
///
/// let outcome = authenticator
///     .authenticate("S3cret!", &record, &PasswordPolicy::default())
///     .unwrap();
/// assert_eq!(outcome, AuthOutcome::Verified);
/// ```
#[derive(Debug)]
pub struct PasswordAuthenticator {
    registry: ProviderRegistry,
}

impl PasswordAuthenticator {
    pub fn new(registry: ProviderRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Checks `raw_password` against `record` and upgrades stale credentials
    ///
    /// # Returns
    /// * `Ok(AuthOutcome::Rejected)` - Wrong password, malformed record, or a
    ///   record from an unregistered algorithm
    /// * `Ok(AuthOutcome::Verified)` - Match, record conforms to the policy
    /// * `Ok(AuthOutcome::Rehashed(record))` - Match, record was re-encoded
    /// * `Err(ProviderError)` - The policy names an unknown provider or asks
    ///   for a cost the target provider rejects
    pub fn authenticate(
        &self,
        raw_password: &str,
        record: &CredentialRecord,
        policy: &PasswordPolicy,
    ) -> ProviderResult<AuthOutcome> {
        let source = match self.registry.provider_for(record) {
            Ok(provider) => provider,
            Err(e) => {
                tracing::warn!(error = %e, "no provider for stored credential");
                return Ok(AuthOutcome::Rejected);
            }
        };

        if !source.verify(raw_password, record) {
            return Ok(AuthOutcome::Rejected);
        }

        let target = match policy.hash_algorithm() {
            Some(id) => self.registry.get(id)?,
            None => self.registry.default_provider()?,
        };

        if target.policy_check(policy, record) {
            return Ok(AuthOutcome::Verified);
        }

        tracing::info!(
            from = %record.algorithm_id(),
            to = %target.id(),
            stored_cost = record.cost_factor(),
            "re-hashing stale credential"
        );
        let upgraded = target.encode_credential(raw_password, policy.hash_iterations())?;
        Ok(AuthOutcome::Rehashed(upgraded))
    }
}
