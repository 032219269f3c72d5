//! Error taxonomy tests
//!
//! Malformed input, verification failure and caller-imposed limits must
//! come back as distinct variants.

use synapsed_bliss::api::{deserialize_public_key, deserialize_signature, generate_key, verify};
use synapsed_bliss::config::BlissConfig;
use synapsed_bliss::error::{Error, VerificationFailure};
use synapsed_bliss::keys::PublicKey;
use synapsed_bliss::params::{Kind, ParamSet};

#[test]
fn test_error_display_and_debug() {
    let errors = [
        Error::InvalidKind(7),
        Error::InvalidLength { expected: 417, actual: 3 },
        Error::Malformed("bad"),
        Error::HuffmanCorrupt("bad"),
        Error::OutOfBounds("bad"),
        Error::SignatureTooLarge { bits: 4000, limit: 3584 },
        Error::KeyGeneration(4),
        Error::Randomness,
        Error::RestartLimit(10),
        Error::Internal("bad"),
        Error::VerificationFailed(VerificationFailure::ChallengeMismatch),
    ];
    for error in errors {
        assert!(!format!("{error}").is_empty());
        assert!(!format!("{error:?}").is_empty());
    }
    assert_eq!(
        Error::InvalidLength { expected: 417, actual: 3 }.to_string(),
        "invalid length: expected 417 bytes, got 3"
    );
}

#[test]
fn test_verification_failures_are_distinguished() {
    for reason in [
        VerificationFailure::KindMismatch,
        VerificationFailure::NormBound,
        VerificationFailure::MalformedChallenge,
        VerificationFailure::ChallengeMismatch,
    ] {
        assert!(Error::from(reason).is_verification_failure());
    }
    assert!(!Error::Malformed("x").is_verification_failure());
    assert!(!Error::InvalidKind(5).is_verification_failure());
}

#[test]
fn test_invalid_kind_values() {
    for value in 5..=7u8 {
        assert_eq!(Kind::try_from(value), Err(Error::InvalidKind(value)));
        assert_eq!(deserialize_public_key(&[value]), Err(Error::InvalidKind(value)));
    }
    assert_eq!(ParamSet::get(Kind::B4).kind, Kind::B4);
}

#[test]
fn test_empty_and_truncated_input() {
    assert!(matches!(deserialize_public_key(&[]), Err(Error::Malformed(_))));
    assert!(matches!(deserialize_signature(&[]), Err(Error::Malformed(_))));
    assert!(matches!(deserialize_signature(&[0x02; 100]), Err(Error::InvalidLength { .. })));
}

#[test]
fn test_public_key_from_ntt_checks_range() {
    let n = Kind::B1.params().n;
    assert!(matches!(PublicKey::from_ntt(Kind::B1, vec![12289; n]), Err(Error::OutOfBounds(_))));
    assert!(matches!(PublicKey::from_ntt(Kind::B1, vec![0; n + 1]), Err(Error::Malformed(_))));
}

#[test]
fn test_garbage_signature_is_input_error_not_verification() {
    let size = Kind::B2.params().sig_size();
    let mut bytes = vec![0xa5u8; size];
    bytes[0] = (bytes[0] & !0x07) | 0x02;
    let err = deserialize_signature(&bytes).unwrap_err();
    assert!(!err.is_verification_failure());
}

#[test]
fn test_restart_limit() {
    let (sk, _) = generate_key(Kind::B0, &[2; 64]).unwrap();
    let config = BlissConfig::default().with_max_restarts(0);
    let mut limited = 0;
    for seed in 0..32u8 {
        match sk.sign_with_seed(b"limit", &[seed; 64], &config) {
            Ok(_) => {}
            Err(err) => {
                assert_eq!(err, Error::RestartLimit(0));
                limited += 1;
            }
        }
    }
    // B0 needs about 2.4 attempts on average
    assert!(limited > 0);
}

#[test]
fn test_verify_returns_false_not_error() {
    let (sk, pk) = generate_key(Kind::B0, &[3; 64]).unwrap();
    let sig = sk.sign_with_seed(b"right", &[3; 64], &BlissConfig::default()).unwrap();
    assert_eq!(verify(&pk, &sig, b"wrong"), Ok(false));
}
