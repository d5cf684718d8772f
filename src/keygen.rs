//! Key generation (IEEE 1363.1 §4.4).

use crate::error::NtruError;
use crate::params::Params;
use crate::poly::{invert_mod_q, mult_priv, priv_to_dense};
use crate::rand::RandContext;
#[cfg(feature = "product-form")]
use crate::sampler::rand_prod_poly;
use crate::sampler::rand_tern_poly;
use crate::types::{EncPrivKey, EncPubKey, IntPoly, KeyPair, PrivPoly};
use zeroize::Zeroize;

/// Sample a private or blinding polynomial directly from `rand`, at the
/// weights `params` specifies for the private key (`df1`, or
/// `df1,df2,df3` in product form).
fn sample_priv(rand: &mut dyn RandContext, params: &Params) -> Result<PrivPoly, NtruError> {
    #[cfg(feature = "product-form")]
    if params.prod_flag() {
        let (f1, f2, f3) = rand_prod_poly(rand, params.n(), params.df1(), params.df2(), params.df3())?;
        return Ok(PrivPoly::Product(f1, f2, f3));
    }
    Ok(PrivPoly::Ternary(rand_tern_poly(rand, params.n(), params.df1())?))
}

/// Sample `g` at weight `N/3` (ternary), or `(df1,df2,df3)` (product form;
/// IEEE 1363.1 §4.4 step 2 allows `g` its own product-form weight schedule,
/// distinct from `t` -- here the simpler ternary `dg = N/3` is used in both
/// cases since no parameter set in this crate specifies distinct `g` weights).
fn sample_g(rand: &mut dyn RandContext, params: &Params) -> Result<PrivPoly, NtruError> {
    #[cfg(feature = "product-form")]
    if params.prod_flag() {
        let (f1, f2, f3) = rand_prod_poly(rand, params.n(), params.df1(), params.df2(), params.df3())?;
        return Ok(PrivPoly::Product(f1, f2, f3));
    }
    Ok(PrivPoly::Ternary(rand_tern_poly(rand, params.n(), params.dg())?))
}

/// `f = 3*t + 1` as a dense ring element.
fn f_from_t(t: &PrivPoly, n: usize) -> IntPoly {
    let mut f = priv_to_dense(t, n);
    f.mul_scalar(3);
    f.set(0, f.get(0) + 1);
    f
}

/// Generate a fresh key pair.
///
/// Retries internally on arithmetic failure (a non-invertible `f` or, when
/// `check_g_invertible` is set, a non-invertible `g`); the only error this
/// can return is a failure of the random source itself (IEEE 1363.1 §4.4).
///
/// # Errors
/// Returns [`NtruError::Prng`] if `rand` fails.
pub fn gen_key_pair(params: &Params, rand: &mut dyn RandContext) -> Result<KeyPair, NtruError> {
    let n = params.n();
    let q = params.q();

    let (t, mut fq) = loop {
        let t = sample_priv(rand, params)?;
        let mut f = f_from_t(&t, n);
        let inv = invert_mod_q(&f, q, n);
        f.zeroize();
        if let Some(fq) = inv {
            break (t, fq);
        }
    };

    let mut g = loop {
        let g = sample_g(rand, params)?;
        if !params.check_g_invertible() {
            break g;
        }
        let mut g_dense = priv_to_dense(&g, n);
        let invertible = invert_mod_q(&g_dense, q, n).is_some();
        g_dense.zeroize();
        if invertible {
            break g;
        }
    };

    let mut h = mult_priv(&fq, &g, n);
    fq.zeroize();
    g.zeroize();
    h.mul_scalar(3);
    h.mod_q(q);

    Ok(KeyPair { priv_key: EncPrivKey { t, q }, pub_key: EncPubKey { h, q } })
}

#[cfg(test)]
mod tests {
    use super::gen_key_pair;
    use crate::params::ees401ep1;
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    #[test]
    fn produces_a_public_key_of_the_right_dimension() {
        let params = ees401ep1();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let kp = gen_key_pair(&params, &mut rng).expect("keygen should succeed");
        assert_eq!(kp.pub_key.h.n(), params.n());
    }

    #[test]
    fn is_deterministic_given_an_identical_rng_stream() {
        let params = ees401ep1();
        let mut rng_a = ChaCha8Rng::seed_from_u64(7);
        let mut rng_b = ChaCha8Rng::seed_from_u64(7);
        let kp_a = gen_key_pair(&params, &mut rng_a).unwrap();
        let kp_b = gen_key_pair(&params, &mut rng_b).unwrap();
        assert_eq!(kp_a.pub_key.h, kp_b.pub_key.h);
    }
}
