//! Integration tests for the bcrypt credential hash provider
//!
//! These tests drive the public API with the real bcrypt engine: encoding,
//! verification, policy checks, the storage shape, and the re-hash flow.

use std::sync::Arc;
use std::thread;

use bcrypt_hash_provider::{
    AuthOutcome, BcryptHashProvider, BcryptHashProviderFactory, CredentialHashProvider,
    CredentialRecord, PasswordAuthenticator, PasswordPolicy, ProviderConfig, ProviderError,
    ProviderRegistry,
};

/// Install a test subscriber so provider logs show up with --nocapture
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Provider at the lowest bcrypt cost to keep tests fast
fn fast_provider() -> BcryptHashProvider {
    BcryptHashProviderFactory::new(ProviderConfig::new("bcrypt", 4)).create()
}

#[test]
fn default_cost_scenario() {
    init_tracing();
    let provider = BcryptHashProvider::new("bcrypt", 12);

    let record = provider.encode_credential("S3cret!", None).expect("encode");

    assert_eq!(record.cost_factor(), 12);
    assert_eq!(record.algorithm_id(), "bcrypt");
    assert!(record.encoded_secret().starts_with("$2y$12$"));
    assert!(provider.verify("S3cret!", &record));
    assert!(!provider.verify("wrong", &record));
}

#[test]
fn stale_cost_fails_policy_check() {
    init_tracing();
    let provider = fast_provider();
    let record = provider.encode_credential("S3cret!", None).expect("encode");

    let policy = PasswordPolicy::default().with_hash_iterations(14);
    assert!(!provider.policy_check(&policy, &record));

    let policy = PasswordPolicy::from_hash_iterations(-1).expect("sentinel policy");
    assert!(provider.policy_check(&policy, &record));
}

#[test]
fn foreign_algorithm_fails_policy_check() {
    let provider = fast_provider();
    let own = provider.encode_credential("S3cret!", None).expect("encode");
    let foreign = CredentialRecord::new("other-algo", 4, own.encoded_secret());

    assert!(!provider.policy_check(&PasswordPolicy::default(), &foreign));
    // Verification itself does not look at the algorithm id
    assert!(provider.verify("S3cret!", &foreign));
}

#[test]
fn malformed_secret_is_not_verified() {
    init_tracing();
    let provider = fast_provider();
    let record = CredentialRecord::new("bcrypt", 4, "not-a-hash");

    assert!(!provider.verify("", &record));
    assert!(!provider.verify("S3cret!", &record));
}

#[test]
fn fresh_salt_per_encode() {
    let provider = fast_provider();
    let first = provider.encode_credential("S3cret!", Some(4)).expect("encode");
    let second = provider.encode_credential("S3cret!", Some(4)).expect("encode");

    assert_ne!(first.encoded_secret(), second.encoded_secret());
    assert!(provider.verify("S3cret!", &first));
    assert!(provider.verify("S3cret!", &second));
}

#[test]
fn different_passwords_do_not_cross_verify() {
    let provider = fast_provider();
    let record = provider.encode_credential("alpha", None).expect("encode");

    assert!(!provider.verify("beta", &record));
    assert!(!provider.verify("alpha ", &record));
    assert!(!provider.verify("", &record));
}

#[test]
fn out_of_range_cost_is_reported() {
    let provider = fast_provider();

    for cost in [0, 3, 32] {
        match provider.encode_credential("S3cret!", Some(cost)) {
            Err(ProviderError::InvalidCostParameter { cost: reported }) => {
                assert_eq!(reported, cost)
            }
            other => panic!("expected invalid cost for {}, got {:?}", cost, other),
        }
    }
}

#[test]
fn stored_record_verifies_after_reload() {
    let provider = fast_provider();
    let record = provider.encode_credential("S3cret!", None).expect("encode");

    let stored = record.to_storage().expect("storage shape");
    let reloaded = CredentialRecord::from_storage(&stored).expect("reload");

    assert_eq!(reloaded, record);
    assert!(provider.verify("S3cret!", &reloaded));
    assert!(provider.policy_check(&PasswordPolicy::default(), &reloaded));
}

#[test]
fn provider_is_shared_across_threads() {
    let provider = Arc::new(fast_provider());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let provider = Arc::clone(&provider);
            thread::spawn(move || {
                let password = format!("password-{}", i);
                let record = provider.encode_credential(&password, None).expect("encode");
                provider.verify(&password, &record)
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().expect("thread panicked"));
    }
}

#[test]
fn login_flow_upgrades_stale_credentials() {
    init_tracing();
    let mut registry = ProviderRegistry::new("bcrypt");
    registry.register(Arc::new(fast_provider()));
    let authenticator = PasswordAuthenticator::new(registry);

    let provider = authenticator.registry().default_provider().expect("default");
    let record = provider.encode_credential("S3cret!", None).expect("encode");
    let policy = PasswordPolicy::default().with_hash_iterations(5);

    let upgraded = match authenticator
        .authenticate("S3cret!", &record, &policy)
        .expect("authenticate")
    {
        AuthOutcome::Rehashed(upgraded) => upgraded,
        other => panic!("expected rehash, got {:?}", other),
    };
    assert_eq!(upgraded.cost_factor(), 5);

    // The upgraded record now conforms
    let outcome = authenticator
        .authenticate("S3cret!", &upgraded, &policy)
        .expect("authenticate");
    assert_eq!(outcome, AuthOutcome::Verified);

    let outcome = authenticator
        .authenticate("wrong", &upgraded, &policy)
        .expect("authenticate");
    assert_eq!(outcome, AuthOutcome::Rejected);

    authenticator.registry().close();
}
