// Infrastructure layer module
// Contains adapters for external cryptographic libraries
// Follows Hexagonal Architecture

pub mod bcrypt_engine;

pub use bcrypt_engine::BcryptEngine;
