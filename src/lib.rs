//! bcrypt credential hash provider
//!
//! Encodes raw passwords into storable credential records, verifies
//! passwords against them, and checks stored records against the current
//! password policy so stale credentials can be re-hashed on next login.

pub mod auth;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infrastructure;

pub use auth::{
    AuthOutcome, BcryptHashProvider, BcryptHashProviderFactory, PasswordAuthenticator,
    ProviderRegistry,
};
pub use config::ProviderConfig;
pub use domain::credential::{CredentialRecord, PasswordPolicy, StoredCredential};
pub use domain::hash_engine::{EngineError, HashEngine};
pub use domain::provider::CredentialHashProvider;
pub use errors::{ProviderError, ProviderResult};
