extern crate alloc;

use crate::error::NtruError;
use crate::params::Params;
use crate::types::KeyPair;
use alloc::vec::Vec;
use rand_core::CryptoRngCore;

#[cfg(feature = "default-rng")]
use rand_core::OsRng;

/// The `KeyGen` trait is defined to allow trait objects.
pub trait KeyGen {
    /// Generates a fresh key pair for `params` using the OS default random number generator.
    ///
    /// # Errors
    /// Returns [`NtruError::Prng`] if the random number generator fails.
    /// # Examples
    /// ```rust
    /// use ntruencrypt::params::ees401ep1;
    /// use ntruencrypt::traits::KeyGen;
    /// use ntruencrypt::types::KeyPair;
    ///
    /// let params = ees401ep1();
    /// let kp = KeyPair::try_keygen(&params).expect("keygen should succeed");
    /// ```
    #[cfg(feature = "default-rng")]
    fn try_keygen(params: &Params) -> Result<Self, NtruError>
    where
        Self: Sized,
    {
        Self::try_keygen_with_rng(params, &mut OsRng)
    }

    /// Generates a fresh key pair for `params` using a caller-supplied random number generator.
    ///
    /// # Errors
    /// Returns [`NtruError::Prng`] if `rng` fails.
    fn try_keygen_with_rng(params: &Params, rng: &mut impl CryptoRngCore) -> Result<Self, NtruError>
    where
        Self: Sized;
}

impl KeyGen for KeyPair {
    fn try_keygen_with_rng(params: &Params, rng: &mut impl CryptoRngCore) -> Result<Self, NtruError> {
        crate::keygen::gen_key_pair(params, rng)
    }
}

/// The `Encrypt` trait defines encryption of a message under a public key.
pub trait Encrypt {
    /// Encrypts `msg` under `self` using the OS default random number generator.
    ///
    /// # Errors
    /// Returns [`NtruError::MsgTooLong`] if `msg` exceeds `max_msg_len(params)`, or
    /// [`NtruError::Prng`] if the random number generator fails or the internal
    /// retry loop is exhausted.
    #[cfg(feature = "default-rng")]
    fn try_encrypt(&self, msg: &[u8], params: &Params) -> Result<Vec<u8>, NtruError> {
        self.try_encrypt_with_rng(msg, params, &mut OsRng)
    }

    /// Encrypts `msg` under `self` using a caller-supplied random number generator.
    ///
    /// # Errors
    /// Returns [`NtruError::MsgTooLong`] if `msg` exceeds `max_msg_len(params)`, or
    /// [`NtruError::Prng`] if `rng` fails or the internal retry loop is exhausted.
    fn try_encrypt_with_rng(
        &self, msg: &[u8], params: &Params, rng: &mut impl CryptoRngCore,
    ) -> Result<Vec<u8>, NtruError>;
}

impl Encrypt for crate::types::EncPubKey {
    fn try_encrypt_with_rng(
        &self, msg: &[u8], params: &Params, rng: &mut impl CryptoRngCore,
    ) -> Result<Vec<u8>, NtruError> {
        crate::encrypt::encrypt(msg, self, params, rng)
    }
}

/// The `Decrypt` trait defines recovery of a message using a key pair and ciphertext.
pub trait Decrypt {
    /// Decrypts `ct` using `self`, returning the recovered plaintext and its declared length.
    ///
    /// # Errors
    /// See [`NtruError`] variants; in particular [`NtruError::InvalidEncoding`] covers
    /// both a malformed SVES encoding and a failed re-encryption check (IEEE 1363.1 §5).
    fn try_decrypt(&self, ct: &[u8], params: &Params) -> Result<(Vec<u8>, u8), NtruError>;
}

impl Decrypt for KeyPair {
    fn try_decrypt(&self, ct: &[u8], params: &Params) -> Result<(Vec<u8>, u8), NtruError> {
        crate::decrypt::decrypt(ct, self, params)
    }
}

/// The `SerDes` trait provides methods for serializing and deserializing the
/// byte-array-shaped values of this crate (public keys and ciphertexts; the
/// private key is never serialized by this trait, matching IEEE 1363.1 §5's
/// ownership note that sensitive material never crosses the byte-array
/// boundary this trait defines).
pub trait SerDes {
    /// Produces a byte vector specific to the value being serialized.
    fn into_bytes(self, params: &Params) -> Vec<u8>;

    /// Consumes a byte slice specific to the value being deserialized.
    ///
    /// # Errors
    /// Returns [`NtruError::InvalidEncoding`] on malformed input.
    fn try_from_bytes(ba: &[u8], params: &Params) -> Result<Self, NtruError>
    where
        Self: Sized;
}

impl SerDes for crate::types::EncPubKey {
    fn into_bytes(self, params: &Params) -> Vec<u8> { crate::byte_fns::to_arr(&self.h, params.q()) }

    fn try_from_bytes(ba: &[u8], params: &Params) -> Result<Self, NtruError> {
        let expected_len = crate::params::enc_len(params);
        if ba.len() != expected_len {
            return Err(NtruError::InvalidEncoding);
        }
        let h = crate::byte_fns::from_arr(ba, params.n(), params.q());
        Ok(crate::types::EncPubKey { h, q: params.q() })
    }
}
