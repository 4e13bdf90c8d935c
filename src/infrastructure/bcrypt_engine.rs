// bcrypt hash engine
// Emits $2y$ encodings and verifies any $2a$/$2b$/$2x$/$2y$ encoding

use bcrypt::{BcryptError, Version};

use crate::domain::hash_engine::{EngineError, HashEngine};

/// Lowest cost the bcrypt engine accepts
pub const MIN_COST: u32 = 4;

/// Highest cost the bcrypt engine accepts
pub const MAX_COST: u32 = 31;

/// HashEngine backed by the `bcrypt` crate
///
/// Passwords longer than bcrypt's 72-byte key limit are passed through
/// unchanged and truncated by the primitive itself; no pre-hashing is applied.
///
/// # Example
/// ```
/// use bcrypt_hash_provider::domain::hash_engine::HashEngine;
/// use bcrypt_hash_provider::infrastructure::BcryptEngine;
///
/// let engine = BcryptEngine::new();
/// let encoded = engine.hash("my_password", 4).expect("valid hash");
/// assert!(engine.verify("my_password", &encoded).unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BcryptEngine;

impl BcryptEngine {
    pub fn new() -> Self {
        Self
    }
}

impl HashEngine for BcryptEngine {
    fn hash(&self, password: &str, cost: u32) -> Result<String, EngineError> {
        bcrypt::hash_with_result(password, cost)
            .map(|parts| parts.format_for_version(Version::TwoY))
            .map_err(|e| match e {
                BcryptError::CostNotAllowed(cost) => EngineError::CostNotAllowed(cost),
                other => EngineError::Failure(other.to_string()),
            })
    }

    fn verify(&self, password: &str, encoded: &str) -> Result<bool, EngineError> {
        bcrypt::verify(password, encoded)
            .map_err(|e| EngineError::MalformedEncoding(describe_parse_error(&e)))
    }
}

/// Describes why an encoding was rejected without echoing it back
///
/// `BcryptError`'s own message embeds the offending hash for several variants.
fn describe_parse_error(error: &BcryptError) -> &'static str {
    match error {
        BcryptError::InvalidHash(_) => "invalid bcrypt hash layout",
        BcryptError::InvalidPrefix(_) => "unsupported bcrypt version prefix",
        BcryptError::InvalidCost(_) => "unparsable bcrypt cost field",
        BcryptError::CostNotAllowed(_) => "bcrypt cost outside supported range",
        _ => "unparsable bcrypt encoding",
    }
}
