// Credential domain module
// Contains the stored credential record and the password policy value object

pub mod policy;
pub mod record;

// Re-export main types for convenience
pub use policy::PasswordPolicy;
pub use record::{CredentialRecord, StoredCredential};
