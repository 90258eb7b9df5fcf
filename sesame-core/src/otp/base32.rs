//! Base32 seed codec
//!
//! RFC 4648 Base32 decoding for TOTP seeds, with the tolerance users
//! expect when pasting a seed from a provisioning page:
//! 1. Strip all ASCII whitespace
//! 2. Uppercase (case-insensitive alphabet)
//! 3. Re-apply `=` padding to the 8-character quantum
//! 4. Decode, rejecting anything that does not produce whole bytes

use crate::error::DecodeError;
use data_encoding::{DecodeKind, BASE32, BASE32_NOPAD};

/// Strip ASCII whitespace from the input
fn clean(input: &str) -> String {
    input.chars().filter(|c| !c.is_ascii_whitespace()).collect()
}

/// Pad a symbol string to 8-character boundaries
///
/// Formula: padding_length = (8 - (len % 8)) % 8
fn pad(input: &str) -> String {
    let padding_len = (8 - (input.len() % 8)) % 8;
    format!("{}{}", input, "=".repeat(padding_len))
}

/// Decode a Base32 seed string to raw bytes
///
/// Accepts the RFC 4648 alphabet (A-Z, 2-7) case-insensitively, with
/// or without trailing `=` padding, and ignores embedded whitespace.
///
/// # Errors
///
/// Returns `DecodeError::InvalidCharacter` for bytes outside the
/// alphabet and `DecodeError::InvalidLength` when the symbol count
/// cannot decode to a whole number of bytes. Never silently truncates.
pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    let cleaned = clean(input).to_uppercase();
    let padded = pad(cleaned.trim_end_matches('='));

    BASE32.decode(padded.as_bytes()).map_err(|e| match e.kind {
        DecodeKind::Symbol => DecodeError::InvalidCharacter {
            position: e.position,
        },
        _ => DecodeError::InvalidLength,
    })
}

/// Encode raw bytes as an unpadded, uppercase Base32 string
pub fn encode(bytes: &[u8]) -> String {
    BASE32_NOPAD.encode(bytes)
}
