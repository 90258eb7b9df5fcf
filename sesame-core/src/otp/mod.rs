//! One-time password module
//!
//! Base32 seed decoding and RFC 6238 TOTP code generation.

pub mod base32;
pub mod totp;
