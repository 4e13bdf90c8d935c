use super::credential::{CredentialRecord, PasswordPolicy};
use crate::errors::ProviderResult;

/// Contract for a password credential hash provider
///
/// Providers are identified by an opaque id string that is written into
/// every record they produce. They hold only immutable configuration, so a
/// single instance may be shared across threads.
pub trait CredentialHashProvider: Send + Sync {
    /// Identity string stamped on produced records
    fn id(&self) -> &str;

    /// Hashes `raw_password`, returning only the encoded string
    ///
    /// `None` for `cost` means the provider default.
    fn encode(&self, raw_password: &str, cost: Option<u32>) -> ProviderResult<String>;

    /// Hashes `raw_password` into a full credential record
    ///
    /// `None` for `cost` means the provider default. The record carries the
    /// resolved cost, never the absent marker.
    fn encode_credential(
        &self,
        raw_password: &str,
        cost: Option<u32>,
    ) -> ProviderResult<CredentialRecord>;

    /// Checks `raw_password` against a stored record
    ///
    /// Never reports a match for a record it cannot interpret.
    fn verify(&self, raw_password: &str, record: &CredentialRecord) -> bool;

    /// Reports whether `record` was produced by this provider at the cost the
    /// policy currently asks for
    fn policy_check(&self, policy: &PasswordPolicy, record: &CredentialRecord) -> bool;

    /// Releases provider resources
    fn close(&self) {}
}
