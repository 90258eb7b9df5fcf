//! TOTP generation tests against the RFC 6238 Appendix B vectors
//!
//! The appendix publishes 8-digit codes for six timestamps and three
//! hash algorithms. Each algorithm uses an ASCII seed of its digest
//! length: "12345678901234567890" repeated/truncated to 20, 32 and 64
//! bytes respectively.

use sesame_core::error::GenerationError;
use sesame_core::otp::base32;
use sesame_core::otp::totp::{generate, HashAlgorithm, TotpParameters};

const SEED_SHA1: &[u8] = b"12345678901234567890";
const SEED_SHA256: &[u8] = b"12345678901234567890123456789012";
const SEED_SHA512: &[u8] = b"1234567890123456789012345678901234567890123456789012345678901234";

fn params(algorithm: HashAlgorithm) -> TotpParameters {
    TotpParameters {
        digits: 8,
        algorithm,
        ..TotpParameters::default()
    }
}

#[test]
fn test_rfc6238_appendix_b_sha1() {
    let vectors = [
        (59, "94287082"),
        (1111111109, "07081804"),
        (1111111111, "14050471"),
        (1234567890, "89005924"),
        (2000000000, "69279037"),
        (20000000000, "65353130"),
    ];

    for (at, expected) in vectors {
        let code = generate(SEED_SHA1, &params(HashAlgorithm::Sha1), at).unwrap();
        assert_eq!(code.expose(), expected, "SHA1 vector at t={}", at);
    }
}

#[test]
fn test_rfc6238_appendix_b_sha256() {
    let vectors = [
        (59, "46119246"),
        (1111111109, "68084774"),
        (1111111111, "67062674"),
        (1234567890, "91819424"),
        (2000000000, "90698825"),
        (20000000000, "77737706"),
    ];

    for (at, expected) in vectors {
        let code = generate(SEED_SHA256, &params(HashAlgorithm::Sha256), at).unwrap();
        assert_eq!(code.expose(), expected, "SHA256 vector at t={}", at);
    }
}

#[test]
fn test_rfc6238_appendix_b_sha512() {
    let vectors = [
        (59, "90693936"),
        (1111111109, "25091201"),
        (1111111111, "99943326"),
        (1234567890, "93441116"),
        (2000000000, "38618901"),
        (20000000000, "47863826"),
    ];

    for (at, expected) in vectors {
        let code = generate(SEED_SHA512, &params(HashAlgorithm::Sha512), at).unwrap();
        assert_eq!(code.expose(), expected, "SHA512 vector at t={}", at);
    }
}

#[test]
fn test_sha1_seed_through_base32_decode() {
    // The SHA1 appendix seed, as it would be stored in the vault
    let seed = base32::decode("GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ").unwrap();
    assert_eq!(seed, SEED_SHA1);

    let code = generate(&seed, &params(HashAlgorithm::Sha1), 59).unwrap();
    assert_eq!(code.expose(), "94287082");
}

#[test]
fn test_common_provisioning_seed() {
    // A 10-byte seed, the shape most provisioning QR codes use
    let seed = base32::decode("JBSWY3DPEHPK3PXP").unwrap();

    let code = generate(&seed, &params(HashAlgorithm::Sha1), 59).unwrap();
    assert_eq!(code.expose(), "41996554");

    let six = TotpParameters::default();
    assert_eq!(generate(&seed, &six, 59).unwrap().expose(), "996554");
    assert_eq!(
        generate(&seed, &six, 1234567890).unwrap().expose(),
        "742275"
    );
}

#[test]
fn test_output_always_digits_wide() {
    for digits in 1..=10 {
        for at in [59, 1111111109, 20000000000] {
            let p = TotpParameters {
                digits,
                ..TotpParameters::default()
            };
            let code = generate(SEED_SHA1, &p, at).unwrap();
            assert_eq!(code.expose().len(), digits as usize);
            assert!(code.expose().chars().all(|c| c.is_ascii_digit()));
        }
    }
}

#[test]
fn test_parameter_validation() {
    for digits in [0, 11] {
        let p = TotpParameters {
            digits,
            ..TotpParameters::default()
        };
        assert!(matches!(
            generate(SEED_SHA1, &p, 59),
            Err(GenerationError::InvalidParameters { .. })
        ));
    }

    let p = TotpParameters {
        step: 0,
        ..TotpParameters::default()
    };
    assert!(matches!(
        generate(SEED_SHA1, &p, 59),
        Err(GenerationError::InvalidParameters { .. })
    ));

    assert_eq!(
        generate(b"", &TotpParameters::default(), 59).unwrap_err(),
        GenerationError::EmptySeed
    );
}

#[test]
fn test_larger_step_widens_window() {
    let minute = TotpParameters {
        digits: 8,
        step: 60,
        ..TotpParameters::default()
    };
    let a = generate(SEED_SHA1, &minute, 0).unwrap();
    let b = generate(SEED_SHA1, &minute, 59).unwrap();
    assert_eq!(a.expose(), b.expose());
    assert_eq!(a.expose(), "84755224");
}
