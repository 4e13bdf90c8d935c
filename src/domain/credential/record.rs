use std::collections::BTreeMap;

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

use super::policy::iterations_from_raw;
use crate::errors::{ProviderError, ProviderResult};

/// Stored representation of a hashed password credential
///
/// # Invariants
/// - `cost_factor` is a concrete positive cost, never a "use default" marker
/// - `encoded_secret` embeds its own salt and cost, so it alone is enough to
///   verify a password
/// - `salt` is empty; it only fills the salt slot of the wider credential
///   schema
/// - Immutable after construction
///
/// # Example
/// ```
/// use bcrypt_hash_provider::domain::credential::CredentialRecord;
///
/// let record = CredentialRecord::new("bcrypt", 12, "$2y$12$...");
/// assert_eq!(record.algorithm_id(), "bcrypt");
/// assert!(record.salt().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRecord {
    algorithm_id: String,
    cost_factor: u32,
    encoded_secret: String,
    #[serde(default)]
    salt: Vec<u8>,
}

impl CredentialRecord {
    /// Creates a record with an empty salt slot
    pub fn new(
        algorithm_id: impl Into<String>,
        cost_factor: u32,
        encoded_secret: impl Into<String>,
    ) -> Self {
        Self {
            algorithm_id: algorithm_id.into(),
            cost_factor,
            encoded_secret: encoded_secret.into(),
            salt: Vec::new(),
        }
    }

    pub fn algorithm_id(&self) -> &str {
        &self.algorithm_id
    }

    pub fn cost_factor(&self) -> u32 {
        self.cost_factor
    }

    pub fn encoded_secret(&self) -> &str {
        &self.encoded_secret
    }

    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    /// Splits the record into the secret/credential documents of the wider
    /// credential store
    pub fn to_storage(&self) -> ProviderResult<StoredCredential> {
        let secret = SecretData {
            value: self.encoded_secret.clone(),
            salt: STANDARD.encode(&self.salt),
            additional_parameters: BTreeMap::new(),
        };
        let credential = CredentialData {
            hash_iterations: i32::try_from(self.cost_factor).map_err(|_| {
                ProviderError::InvalidPolicy(format!(
                    "cost {} does not fit the stored iteration field",
                    self.cost_factor
                ))
            })?,
            algorithm: self.algorithm_id.clone(),
            additional_parameters: BTreeMap::new(),
        };

        Ok(StoredCredential {
            secret_data: serde_json::to_string(&secret)?,
            credential_data: serde_json::to_string(&credential)?,
        })
    }

    /// Rebuilds a record from the wider credential store's documents
    ///
    /// # Returns
    /// * `Ok(CredentialRecord)` - If both documents parse
    /// * `Err(ProviderError)` - On malformed JSON, bad base64 salt, or a stored
    ///   iteration count that is not a positive cost
    pub fn from_storage(stored: &StoredCredential) -> ProviderResult<Self> {
        let secret: SecretData = serde_json::from_str(&stored.secret_data)?;
        let credential: CredentialData = serde_json::from_str(&stored.credential_data)?;

        let cost_factor = iterations_from_raw(credential.hash_iterations)?
            .filter(|cost| *cost > 0)
            .ok_or_else(|| {
                ProviderError::InvalidPolicy(format!(
                    "stored hash iterations must be positive, got {}",
                    credential.hash_iterations
                ))
            })?;
        let salt = STANDARD
            .decode(secret.salt.as_bytes())
            .map_err(|e| ProviderError::InvalidSalt(e.to_string()))?;

        Ok(Self {
            algorithm_id: credential.algorithm,
            cost_factor,
            encoded_secret: secret.value,
            salt,
        })
    }
}

/// The two JSON documents a credential store persists for a password
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCredential {
    pub secret_data: String,
    pub credential_data: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SecretData {
    value: String,
    #[serde(default)]
    salt: String,
    #[serde(default)]
    additional_parameters: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CredentialData {
    hash_iterations: i32,
    algorithm: String,
    #[serde(default)]
    additional_parameters: BTreeMap<String, Vec<String>>,
}
