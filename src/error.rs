//! Stable error codes for the NTRUEncrypt envelope.
//!
//! A small `#[non_exhaustive]` enum a caller can match on, rather than an
//! opaque `&'static str`.

use core::fmt;

/// An error surfaced by key generation, encryption, or decryption.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NtruError {
    /// The random source returned failure.
    Prng,
    /// The parameter set's computed `max_msg_len` exceeds 255.
    InvalidMaxLen,
    /// The plaintext (on encrypt), or the decoded length byte (on decrypt),
    /// exceeds `max_msg_len`.
    MsgTooLong,
    /// SVES decoding encountered a forbidden `(-1,-1)` coefficient pair, or
    /// the decrypt re-encryption check failed.
    InvalidEncoding,
    /// Trailing bytes in the decoded padded record were non-zero.
    NoZeroPad,
    /// The repetition-weight check failed on decrypt.
    Dm0Violation,
}

impl fmt::Display for NtruError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            NtruError::Prng => "random source failure",
            NtruError::InvalidMaxLen => "parameter set's max_msg_len exceeds 255",
            NtruError::MsgTooLong => "message longer than max_msg_len",
            NtruError::InvalidEncoding => "invalid SVES encoding or failed re-encryption check",
            NtruError::NoZeroPad => "non-zero padding in decoded record",
            NtruError::Dm0Violation => "repetition weight check failed",
        };
        f.write_str(msg)
    }
}

/// If the condition is not met, return the given error. Same shape as the
/// `anyhow` crate's `ensure!`.
macro_rules! ensure {
    ($cond:expr, $err:expr $(,)?) => {
        if !$cond {
            return Err($err);
        }
    };
}

pub(crate) use ensure;
