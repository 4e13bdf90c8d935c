// Authentication module
// bcrypt provider, its factory, the provider registry and the password
// authentication flow built on top of them

pub mod authenticator;
pub mod bcrypt_provider;
pub mod factory;
pub mod registry;

// Re-export main types
pub use authenticator::{AuthOutcome, PasswordAuthenticator};
pub use bcrypt_provider::BcryptHashProvider;
pub use factory::BcryptHashProviderFactory;
pub use registry::ProviderRegistry;
