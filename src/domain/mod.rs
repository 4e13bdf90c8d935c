// Domain layer module exports
// Provider and engine contracts live here; concrete engines live in
// infrastructure

pub mod credential;
pub mod hash_engine;
pub mod provider;
