//! Encrypt (IEEE 1363.1 §4.5).

extern crate alloc;

use crate::byte_fns::{to_arr, to_arr4};
use crate::error::{ensure, NtruError};
use crate::mgf::derive_mask;
use crate::params::{max_msg_len, Params};
use crate::poly::mult_priv;
use crate::rand::RandContext;
use crate::sampler::gen_blind_poly;
use crate::seed::{check_rep_weight, get_seed};
use crate::sves::from_sves;
use crate::types::EncPubKey;
use alloc::vec;
use alloc::vec::Vec;
use zeroize::Zeroize;

/// Bounded retry count for the encrypt loop (IEEE 1363.1 §9: "a maximum iteration
/// count (e.g., 64) that surfaces `PrngErr` on exhaustion"). Each retry
/// redraws the salt `b`; both restart conditions (`maxm1` bound, `dm0`
/// repetition weight) are expected to pass within a handful of attempts for
/// any sane parameter set.
const MAX_RETRIES: usize = 64;

/// Encrypt `msg` under `pub_key`, drawing randomness from `rand`.
///
/// # Errors
/// - [`NtruError::InvalidMaxLen`] if the parameter set's `max_msg_len` exceeds 255.
/// - [`NtruError::MsgTooLong`] if `msg` is longer than `max_msg_len(params)`.
/// - [`NtruError::Prng`] if `rand` fails, or the retry loop is exhausted.
pub fn encrypt(
    msg: &[u8], pub_key: &EncPubKey, params: &Params, rand: &mut dyn RandContext,
) -> Result<Vec<u8>, NtruError> {
    let n = params.n();
    let q = params.q();

    let max_len_bytes = max_msg_len(params);
    ensure!(max_len_bytes <= 255, NtruError::InvalidMaxLen);
    let msg_len = msg.len();
    ensure!(msg_len <= max_len_bytes as usize, NtruError::MsgTooLong);

    let h_bytes = to_arr(&pub_key.h, q);
    let htrunc_len = (params.pklen() / 8) as usize;
    let htrunc = &h_bytes[..htrunc_len];

    let db_bytes = (params.db() / 8) as usize;
    let buf_len_bits = (n * 3 / 2 + 7) / 8 * 8 + 1;
    let buf_len_bytes = (buf_len_bits + 7) / 8;
    let skip = params.maxm1() > 0;

    for _ in 0..MAX_RETRIES {
        let mut b = vec![0u8; db_bytes];
        rand.generate(&mut b)?;

        // M = b || octL || msg || zero-pad. `buf_len_bytes` is sized to hold
        // `db_bytes + 1 + max_len_bytes` (IEEE 1363.1 §4.7), and msg_len was checked
        // against max_len_bytes above, so the zero-pad region never underflows.
        debug_assert!(db_bytes + 1 + msg_len <= buf_len_bytes);
        let mut m = vec![0u8; buf_len_bytes];
        m[..db_bytes].copy_from_slice(&b);
        #[allow(clippy::cast_possible_truncation)]
        {
            m[db_bytes] = msg_len as u8;
        }
        m[db_bytes + 1..db_bytes + 1 + msg_len].copy_from_slice(msg);

        let mut mtrin = from_sves(&m, n, skip);
        m.zeroize();

        let mut sdata = get_seed(msg, htrunc, &b, params);
        b.zeroize();
        let mut r = gen_blind_poly(&sdata, params);
        sdata.zeroize();
        let mut rr = mult_priv(&pub_key.h, &r, n);
        r.zeroize();
        rr.mod_q(q);

        let or4 = to_arr4(&rr);
        let mut mask = derive_mask(&or4, n);
        mtrin.add_assign(&mask);
        mask.zeroize();

        // Meet-in-the-middle defense (IEEE 1363.1 §4.5 step 10): if the coefficient
        // sum is too large, restart with a fresh salt rather than risk
        // leaking information through the constant coefficient.
        if params.maxm1() > 0 {
            if mtrin.sum_coeffs() > i32::from(params.maxm1()) {
                mtrin.zeroize();
                rr.zeroize();
                continue;
            }
            mtrin.zero_constant();
        }

        mtrin.mod3();

        if params.dm0() > 0 && !check_rep_weight(&mtrin, params.dm0()) {
            mtrin.zeroize();
            rr.zeroize();
            continue;
        }

        rr.add_assign(&mtrin);
        mtrin.zeroize();
        rr.mod_q(q);
        let ct = to_arr(&rr, q);
        rr.zeroize();
        return Ok(ct);
    }
    Err(NtruError::Prng)
}

#[cfg(test)]
mod tests {
    use super::encrypt;
    use crate::keygen::gen_key_pair;
    use crate::params::{ees401ep1, enc_len, max_msg_len};
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    #[test]
    fn encrypts_to_the_expected_ciphertext_length() {
        let params = ees401ep1();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let kp = gen_key_pair(&params, &mut rng).unwrap();
        let ct = encrypt(b"Hello", &kp.pub_key, &params, &mut rng).unwrap();
        assert_eq!(ct.len(), enc_len(&params));
    }

    #[test]
    fn rejects_messages_longer_than_max_msg_len() {
        let params = ees401ep1();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let kp = gen_key_pair(&params, &mut rng).unwrap();
        let max_len = max_msg_len(&params) as usize;
        let too_long = alloc::vec![0u8; max_len + 1];
        assert!(encrypt(&too_long, &kp.pub_key, &params, &mut rng).is_err());
    }
}
