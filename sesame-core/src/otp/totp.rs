//! TOTP (Time-based One-Time Password) generation
//!
//! Implements RFC 6238 on top of the RFC 4226 HOTP construction: the
//! time-derived counter is HMACed with the seed, dynamically truncated
//! to a 31-bit word, and formatted as a zero-padded decimal code.
//!
//! Generation is a pure function of (seed, parameters, instant) so it
//! can be tested directly against the RFC 6238 Appendix B vectors.

use crate::error::GenerationError;
use crate::types::TotpCode;
use hmac::digest::core_api::BlockSizeUser;
use hmac::digest::Digest;
use hmac::{Mac, SimpleHmac};
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Sha256, Sha512};

/// Hash algorithm for the HMAC step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Sha1,
    Sha256,
    Sha512,
}

/// Parameters for a single TOTP generation request
///
/// Immutable per request; `validate` enforces the ranges before any
/// cryptographic work happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotpParameters {
    /// Number of output digits (1 through 10)
    pub digits: u32,

    /// Time step in seconds (X in RFC 6238)
    pub step: u64,

    /// HMAC hash algorithm
    pub algorithm: HashAlgorithm,

    /// Counter epoch as unix seconds (T0 in RFC 6238)
    pub epoch: u64,
}

impl Default for TotpParameters {
    fn default() -> Self {
        Self {
            digits: 6,
            step: 30,
            algorithm: HashAlgorithm::Sha1,
            epoch: 0,
        }
    }
}

impl TotpParameters {
    /// Validate digit and time-step ranges
    pub fn validate(&self) -> Result<(), GenerationError> {
        if !(1..=10).contains(&self.digits) {
            return Err(GenerationError::InvalidParameters {
                reason: format!("digits must be between 1 and 10, got {}", self.digits),
            });
        }
        if self.step == 0 {
            return Err(GenerationError::InvalidParameters {
                reason: "time step must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

/// Generate the TOTP code for `at` (unix seconds) from a raw seed
///
/// # Errors
///
/// Returns `GenerationError::EmptySeed` for a zero-length seed and
/// `GenerationError::InvalidParameters` for out-of-range digits or
/// time step, or when `at` predates the counter epoch.
pub fn generate(
    seed: &[u8],
    params: &TotpParameters,
    at: u64,
) -> Result<TotpCode, GenerationError> {
    if seed.is_empty() {
        return Err(GenerationError::EmptySeed);
    }
    params.validate()?;

    let elapsed = at
        .checked_sub(params.epoch)
        .ok_or_else(|| GenerationError::InvalidParameters {
            reason: "instant predates the counter epoch".to_string(),
        })?;
    let counter = elapsed / params.step;

    let mac = match params.algorithm {
        HashAlgorithm::Sha1 => hmac_counter::<Sha1>(seed, counter),
        HashAlgorithm::Sha256 => hmac_counter::<Sha256>(seed, counter),
        HashAlgorithm::Sha512 => hmac_counter::<Sha512>(seed, counter),
    };

    let code = truncate(&mac, params.digits);
    Ok(TotpCode::new(format!(
        "{:0width$}",
        code,
        width = params.digits as usize
    )))
}

/// HMAC the 8-byte big-endian counter with the seed as key
fn hmac_counter<D: Digest + BlockSizeUser>(seed: &[u8], counter: u64) -> Vec<u8> {
    let mut mac = SimpleHmac::<D>::new_from_slice(seed).expect("HMAC can take key of any size");
    mac.update(&counter.to_be_bytes());
    mac.finalize().into_bytes().to_vec()
}

/// Dynamic truncation per RFC 4226 §5.3
///
/// The low nibble of the last digest byte selects a 4-byte window; the
/// window is read big-endian with the top bit masked off, then reduced
/// modulo 10^digits.
fn truncate(mac: &[u8], digits: u32) -> u64 {
    let offset = (mac[mac.len() - 1] & 0x0f) as usize;
    let word = ((mac[offset] as u64 & 0x7f) << 24)
        | ((mac[offset + 1] as u64) << 16)
        | ((mac[offset + 2] as u64) << 8)
        | (mac[offset + 3] as u64);
    word % 10u64.pow(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 6238 Appendix B seed for SHA-1, "12345678901234567890"
    const RFC_SEED_SHA1: &[u8] = b"12345678901234567890";

    fn params(digits: u32, algorithm: HashAlgorithm) -> TotpParameters {
        TotpParameters {
            digits,
            algorithm,
            ..TotpParameters::default()
        }
    }

    #[test]
    fn test_rfc6238_sha1_vector() {
        let code = generate(RFC_SEED_SHA1, &params(8, HashAlgorithm::Sha1), 59).unwrap();
        assert_eq!(code.expose(), "94287082");
    }

    #[test]
    fn test_zero_padding_preserved() {
        // t=1111111109 truncates to 7081804, below 8 digits
        let code = generate(RFC_SEED_SHA1, &params(8, HashAlgorithm::Sha1), 1111111109).unwrap();
        assert_eq!(code.expose(), "07081804");
    }

    #[test]
    fn test_output_length_matches_digits() {
        for digits in 1..=10 {
            let code = generate(RFC_SEED_SHA1, &params(digits, HashAlgorithm::Sha1), 59).unwrap();
            assert_eq!(code.expose().len(), digits as usize);
            assert!(code.expose().chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_empty_seed_rejected() {
        let result = generate(b"", &TotpParameters::default(), 59);
        assert_eq!(result.unwrap_err(), GenerationError::EmptySeed);
    }

    #[test]
    fn test_invalid_digits_rejected() {
        for digits in [0, 11, 100] {
            let result = generate(RFC_SEED_SHA1, &params(digits, HashAlgorithm::Sha1), 59);
            assert!(matches!(
                result,
                Err(GenerationError::InvalidParameters { .. })
            ));
        }
    }

    #[test]
    fn test_zero_step_rejected() {
        let p = TotpParameters {
            step: 0,
            ..TotpParameters::default()
        };
        assert!(matches!(
            generate(RFC_SEED_SHA1, &p, 59),
            Err(GenerationError::InvalidParameters { .. })
        ));
    }

    #[test]
    fn test_custom_epoch_shifts_counter() {
        // Moving the epoch forward by 30s at t+30 lands in the same window
        let base = generate(RFC_SEED_SHA1, &params(8, HashAlgorithm::Sha1), 59).unwrap();
        let shifted = TotpParameters {
            digits: 8,
            epoch: 30,
            ..TotpParameters::default()
        };
        let code = generate(RFC_SEED_SHA1, &shifted, 89).unwrap();
        assert_eq!(code.expose(), base.expose());
    }

    #[test]
    fn test_instant_before_epoch_rejected() {
        let p = TotpParameters {
            epoch: 1_000,
            ..TotpParameters::default()
        };
        assert!(matches!(
            generate(RFC_SEED_SHA1, &p, 999),
            Err(GenerationError::InvalidParameters { .. })
        ));
    }

    #[test]
    fn test_same_window_same_code() {
        let p = params(6, HashAlgorithm::Sha1);
        let a = generate(RFC_SEED_SHA1, &p, 30).unwrap();
        let b = generate(RFC_SEED_SHA1, &p, 59).unwrap();
        let c = generate(RFC_SEED_SHA1, &p, 60).unwrap();
        assert_eq!(a.expose(), b.expose());
        assert_ne!(b.expose(), c.expose());
    }
}
