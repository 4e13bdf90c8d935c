use thiserror::Error;

/// Failures reported by a hash engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("cost {0} is outside the supported range")]
    CostNotAllowed(u32),

    /// Carries a fixed description only, never the encoded input
    #[error("encoded hash could not be parsed: {0}")]
    MalformedEncoding(&'static str),

    #[error("hashing failed: {0}")]
    Failure(String),
}

/// Keyed one-way hash with embedded salt and cost
///
/// Implementations must:
/// - generate a fresh random salt on every `hash` call
/// - produce self-describing output (salt, cost and version are embedded)
/// - compare in `verify` in time independent of where a mismatch occurs
/// - report unparsable input to `verify` as `EngineError::MalformedEncoding`
///   rather than panicking
pub trait HashEngine: Send + Sync {
    /// Hashes `password` at `cost` and returns the encoded string
    fn hash(&self, password: &str, cost: u32) -> Result<String, EngineError>;

    /// Checks `password` against a previously encoded hash
    fn verify(&self, password: &str, encoded: &str) -> Result<bool, EngineError>;
}
