use crate::errors::{ProviderError, ProviderResult};

/// Host-side marker meaning "no explicit iteration count"
pub const NO_EXPLICIT_ITERATIONS: i32 = -1;

/// Password policy value object
///
/// Supplies the desired hash cost and, optionally, the algorithm new
/// credentials should be hashed with. An absent value means the policy has no
/// opinion and the provider (or registry) default applies.
///
/// # Example
/// ```
/// use bcrypt_hash_provider::domain::credential::PasswordPolicy;
///
/// let policy = PasswordPolicy::default().with_hash_iterations(14);
/// assert_eq!(policy.hash_iterations(), Some(14));
/// assert_eq!(policy.hash_algorithm(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordPolicy {
    hash_iterations: Option<u32>,
    hash_algorithm: Option<String>,
}

impl PasswordPolicy {
    /// Builds a policy from a host integer where `-1` means "use default"
    ///
    /// # Returns
    /// * `Ok(PasswordPolicy)` - For `-1` or any non-negative value
    /// * `Err(ProviderError::InvalidPolicy)` - For any other negative value
    pub fn from_hash_iterations(raw: i32) -> ProviderResult<Self> {
        Ok(Self {
            hash_iterations: iterations_from_raw(raw)?,
            hash_algorithm: None,
        })
    }

    /// Sets an explicit desired cost
    pub fn with_hash_iterations(mut self, iterations: u32) -> Self {
        self.hash_iterations = Some(iterations);
        self
    }

    /// Sets the algorithm new credentials should use
    pub fn with_hash_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.hash_algorithm = Some(algorithm.into());
        self
    }

    pub fn hash_iterations(&self) -> Option<u32> {
        self.hash_iterations
    }

    pub fn hash_algorithm(&self) -> Option<&str> {
        self.hash_algorithm.as_deref()
    }
}

/// Maps a host integer onto an optional cost, honouring the `-1` marker
pub(crate) fn iterations_from_raw(raw: i32) -> ProviderResult<Option<u32>> {
    match raw {
        NO_EXPLICIT_ITERATIONS => Ok(None),
        n if n >= 0 => Ok(Some(n as u32)),
        n => Err(ProviderError::InvalidPolicy(format!(
            "hash iterations must be {} or non-negative, got {}",
            NO_EXPLICIT_ITERATIONS, n
        ))),
    }
}
