//! Decrypt (IEEE 1363.1 §4.6).

extern crate alloc;

use crate::byte_fns::{from_arr, to_arr, to_arr4};
use crate::error::{ensure, NtruError};
use crate::mgf::derive_mask;
use crate::params::{max_msg_len, Params};
use crate::poly::mult_priv;
use crate::sampler::gen_blind_poly;
use crate::seed::{check_rep_weight, get_seed};
use crate::sves::to_sves;
use crate::types::{EncPrivKey, IntPoly, KeyPair};
use alloc::vec::Vec;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// `d = (3*t + 1)*e = 3*t*e + e`, reduced to a centered mod-`q` polynomial
/// and then mod 3: the ternary "message plus mask" polynomial `encrypt` folded
/// into `rr` (IEEE 1363.1 §4.6 steps 1-2).
fn decrypt_poly(e: &IntPoly, priv_key: &EncPrivKey, n: usize) -> IntPoly {
    let mut d = mult_priv(e, &priv_key.t, n);
    d.mul_scalar(3);
    d.add_assign(e);
    d.mod_q_centered(priv_key.q);
    d.mod3();
    d
}

/// Split the decoded record `M = b || octL || msg || zero-pad` into its
/// fields, checking the declared length and the zero-padding invariant.
/// Zeroes `m_bytes` once the needed fields have been copied out.
///
/// # Errors
/// - [`NtruError::InvalidEncoding`] if `m_bytes` is shorter than `db_bytes`, or
///   shorter than the declared message requires.
/// - [`NtruError::MsgTooLong`] if the decoded length byte exceeds `max_len_bytes`.
/// - [`NtruError::NoZeroPad`] if the trailing padding bytes are non-zero.
fn decode_record(
    mut m_bytes: Vec<u8>, db_bytes: usize, max_len_bytes: usize,
) -> Result<(Vec<u8>, Vec<u8>, u8), NtruError> {
    if m_bytes.len() <= db_bytes {
        m_bytes.zeroize();
        return Err(NtruError::InvalidEncoding);
    }
    let b = m_bytes[..db_bytes].to_vec();
    let msg_len = m_bytes[db_bytes] as usize;

    if msg_len > max_len_bytes {
        m_bytes.zeroize();
        return Err(NtruError::MsgTooLong);
    }
    if m_bytes.len() < db_bytes + 1 + msg_len {
        m_bytes.zeroize();
        return Err(NtruError::InvalidEncoding);
    }

    let msg = m_bytes[db_bytes + 1..db_bytes + 1 + msg_len].to_vec();
    let padding_ok = m_bytes[db_bytes + 1 + msg_len..].iter().all(|&byte| byte == 0);
    m_bytes.zeroize();
    ensure!(padding_ok, NtruError::NoZeroPad);

    #[allow(clippy::cast_possible_truncation)]
    Ok((b, msg, msg_len as u8))
}

/// Decrypt `enc` with `kp`, returning the recovered plaintext and its
/// declared length.
///
/// # Errors
/// - [`NtruError::Dm0Violation`] if the recovered ternary polynomial fails the
///   repetition-weight check.
/// - [`NtruError::MsgTooLong`] if the decoded length byte exceeds `max_msg_len`.
/// - [`NtruError::NoZeroPad`] if the trailing padding bytes are non-zero.
/// - [`NtruError::InvalidEncoding`] if the re-encryption check fails (IEEE 1363.1 §5):
///   the recovered `(msg, b)` do not reproduce the ciphertext's `R` component.
pub fn decrypt(enc: &[u8], kp: &KeyPair, params: &Params) -> Result<(Vec<u8>, u8), NtruError> {
    let n = params.n();
    let q = params.q();
    let skip = params.maxm1() > 0;

    let e = from_arr(enc, n, q);

    let mut mtrin = decrypt_poly(&e, &kp.priv_key, n);

    if params.dm0() > 0 && !check_rep_weight(&mtrin, params.dm0()) {
        mtrin.zeroize();
        return Err(NtruError::Dm0Violation);
    }

    let mut rr = e.clone();
    rr.sub_assign(&mtrin);
    rr.mod_q(q);

    let or4 = to_arr4(&rr);
    let mut mask = derive_mask(&or4, n);

    let mut m_trits = mtrin.clone();
    mtrin.zeroize();
    m_trits.sub_assign(&mask);
    mask.zeroize();
    m_trits.mod3();

    let sves_result = to_sves(&m_trits, skip);
    m_trits.zeroize();
    let m_bytes = sves_result?;

    let db_bytes = (params.db() / 8) as usize;
    let max_len_bytes = max_msg_len(params) as usize;
    let (mut b, msg, msg_len) = decode_record(m_bytes, db_bytes, max_len_bytes)?;

    let pub_h_bytes = to_arr(&kp.pub_key.h, q);
    let htrunc_len = (params.pklen() / 8) as usize;
    let htrunc = &pub_h_bytes[..htrunc_len];

    let mut sdata = get_seed(&msg, htrunc, &b, params);
    b.zeroize();
    let mut r_prime = gen_blind_poly(&sdata, params);
    sdata.zeroize();
    let mut rr_prime = mult_priv(&kp.pub_key.h, &r_prime, n);
    r_prime.zeroize();
    rr_prime.mod_q(q);

    let rr_bytes = to_arr(&rr, q);
    let rr_prime_bytes = to_arr(&rr_prime, q);
    rr.zeroize();
    rr_prime.zeroize();
    let matches: bool = rr_bytes.ct_eq(&rr_prime_bytes).into();
    ensure!(matches, NtruError::InvalidEncoding);

    Ok((msg, msg_len))
}

#[cfg(test)]
mod tests {
    use super::{decode_record, decrypt};
    use crate::encrypt::encrypt;
    use crate::error::NtruError;
    use crate::keygen::gen_key_pair;
    use crate::params::ees401ep1;
    use crate::poly::{invert_mod_q, mult_dense, priv_to_dense};
    use crate::byte_fns::to_arr;
    use crate::types::IntPoly;
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    #[test]
    fn round_trips_a_short_message() {
        let params = ees401ep1();
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let kp = gen_key_pair(&params, &mut rng).unwrap();
        let msg = b"NTRU lattice crypto";
        let ct = encrypt(msg, &kp.pub_key, &params, &mut rng).unwrap();
        let (recovered, len) = decrypt(&ct, &kp, &params).unwrap();
        assert_eq!(len as usize, msg.len());
        assert_eq!(&recovered[..], msg);
    }

    #[test]
    fn flipping_a_ciphertext_byte_fails_the_reencryption_check() {
        let params = ees401ep1();
        let mut rng = ChaCha8Rng::seed_from_u64(100);
        let kp = gen_key_pair(&params, &mut rng).unwrap();
        let msg = b"tamper me";
        let mut ct = encrypt(msg, &kp.pub_key, &params, &mut rng).unwrap();
        ct[0] ^= 0xFF;
        assert!(decrypt(&ct, &kp, &params).is_err());
    }

    #[test]
    fn round_trips_the_empty_message() {
        let params = ees401ep1();
        let mut rng = ChaCha8Rng::seed_from_u64(101);
        let kp = gen_key_pair(&params, &mut rng).unwrap();
        let ct = encrypt(b"", &kp.pub_key, &params, &mut rng).unwrap();
        let (recovered, len) = decrypt(&ct, &kp, &params).unwrap();
        assert_eq!(len, 0);
        assert!(recovered.is_empty());
    }

    #[test]
    fn decode_record_rejects_non_zero_padding() {
        // b = 14 bytes of salt, octL = 3, msg = "abc", then a non-zero
        // byte in what should be all-zero padding.
        let mut m_bytes = alloc::vec![0u8; 14 + 1 + 3 + 4];
        m_bytes[14] = 3;
        m_bytes[15..18].copy_from_slice(b"abc");
        m_bytes[18] = 0x01;
        assert_eq!(decode_record(m_bytes, 14, 255), Err(NtruError::NoZeroPad));
    }

    #[test]
    fn decode_record_accepts_all_zero_padding() {
        let mut m_bytes = alloc::vec![0u8; 14 + 1 + 3 + 4];
        m_bytes[14] = 3;
        m_bytes[15..18].copy_from_slice(b"abc");
        let (b, msg, msg_len) = decode_record(m_bytes, 14, 255).unwrap();
        assert_eq!(b.len(), 14);
        assert_eq!(&msg[..], b"abc");
        assert_eq!(msg_len, 3);
    }

    #[test]
    fn decode_record_rejects_a_length_byte_past_max_msg_len() {
        let mut m_bytes = alloc::vec![0u8; 14 + 1 + 3];
        m_bytes[14] = 200;
        assert_eq!(decode_record(m_bytes, 14, 100), Err(NtruError::MsgTooLong));
    }

    #[test]
    fn fails_the_repetition_weight_check_for_a_skewed_ciphertext() {
        let params = ees401ep1();
        let mut rng = ChaCha8Rng::seed_from_u64(55);
        let kp = gen_key_pair(&params, &mut rng).unwrap();
        let n = params.n();
        let q = params.q();

        // Recompute f = 3t + 1 exactly as key generation derives it, then
        // invert it, so a chosen ternary polynomial can be driven straight
        // through as `decrypt_poly`'s output without needing to predict the
        // mask step (the repetition-weight check runs before the mask is
        // ever applied).
        let mut f = priv_to_dense(&kp.priv_key.t, n);
        f.mul_scalar(3);
        f.set(0, f.get(0) + 1);
        let f_inv = invert_mod_q(&f, q, n).expect("f is invertible by construction");

        // All-ones has zero weight at -1 and at 0, far below ees401ep1's
        // dm0 = 113.
        let mut skewed = IntPoly::zero(n);
        for i in 0..n {
            skewed.set(i, 1);
        }

        let mut e = mult_dense(&f_inv, &skewed, n);
        e.mod_q(q);
        let enc = to_arr(&e, q);

        assert_eq!(decrypt(&enc, &kp, &params), Err(NtruError::Dm0Violation));
    }
}
