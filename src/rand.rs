//! The random-source capability, replaceable for testing.
//!
//! `RandContext` is a thin, object-safe wrapper around `rand_core`'s
//! `CryptoRngCore`, so callers can pass anything implementing that trait
//! without this crate's public API boundary (`try_keygen_with_rng`,
//! `try_encrypt_with_rng`) naming a concrete RNG type.

use crate::error::NtruError;
use rand_core::CryptoRngCore;

/// An opaque byte source with a `generate` contract (IEEE 1363.1 §3). Implemented
/// for anything that already implements `CryptoRngCore`.
pub trait RandContext {
    /// Fill `buf` with random bytes.
    ///
    /// # Errors
    /// Returns [`NtruError::Prng`] if the underlying source fails.
    fn generate(&mut self, buf: &mut [u8]) -> Result<(), NtruError>;
}

impl<T: CryptoRngCore> RandContext for T {
    fn generate(&mut self, buf: &mut [u8]) -> Result<(), NtruError> {
        self.try_fill_bytes(buf).map_err(|_| NtruError::Prng)
    }
}
