//! Encryption parameter sets (IEEE 1363.1 §3 `Params`, §4.7 `max_msg_len`).
//!
//! Parameter sets vary in `N` itself, which drives the size of every
//! heap-allocated polynomial in this crate — so `Params` is a runtime
//! record, validated once at construction, rather than a set of
//! compile-time constants. The named presets below are convenience
//! constructors over that runtime record.

use crate::error::NtruError;

/// Encryption/decryption parameter set, per IEEE Std 1363.1.
///
/// All fields are set once at construction via [`Params::new`] or one of the
/// named presets and are immutable for the lifetime of the value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Params {
    n: u16,
    q: u16,
    df1: u16,
    df2: u16,
    df3: u16,
    dm0: u16,
    db: u16,
    maxm1: u16,
    pklen: u16,
    oid: [u8; 3],
    prod_flag: bool,
    check_g_invertible: bool,
}

impl Params {
    /// Construct and validate a parameter set.
    ///
    /// `df2`/`df3` are only meaningful when `prod_flag` is set (IEEE 1363.1 §3); pass
    /// `0` for both in the ternary (non-product) case.
    ///
    /// # Errors
    /// Returns [`NtruError::InvalidMaxLen`] if `db` is not a multiple of 8,
    /// `n` is not odd, or (`product-form` disabled) `prod_flag` is `true`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        n: u16, q: u16, df1: u16, df2: u16, df3: u16, dm0: u16, db: u16, maxm1: u16, pklen: u16,
        oid: [u8; 3], prod_flag: bool, check_g_invertible: bool,
    ) -> Result<Self, NtruError> {
        if db % 8 != 0 || n % 2 == 0 {
            return Err(NtruError::InvalidMaxLen);
        }
        #[cfg(not(feature = "product-form"))]
        if prod_flag {
            return Err(NtruError::InvalidMaxLen);
        }
        let params = Params {
            n,
            q,
            df1,
            df2,
            df3,
            dm0,
            db,
            maxm1,
            pklen,
            oid,
            prod_flag,
            check_g_invertible,
        };
        if max_msg_len(&params) > 255 {
            return Err(NtruError::InvalidMaxLen);
        }
        Ok(params)
    }

    /// Ring dimension `N`, as a `usize` (every polynomial buffer is sized by this).
    #[must_use]
    pub fn n(&self) -> usize { self.n as usize }

    /// Coefficient modulus `q` (a power of two).
    #[must_use]
    pub fn q(&self) -> u16 { self.q }

    /// Target Hamming weight for the private polynomial `t` (and, in product
    /// form, for `f1`).
    #[must_use]
    pub fn df1(&self) -> usize { self.df1 as usize }

    /// Target Hamming weight for `f2` (product form only).
    #[must_use]
    pub fn df2(&self) -> usize { self.df2 as usize }

    /// Target Hamming weight for `f3` (product form only).
    #[must_use]
    pub fn df3(&self) -> usize { self.df3 as usize }

    /// Minimum per-sign repetition weight for the weak-plaintext check; `0` disables it.
    #[must_use]
    pub fn dm0(&self) -> u16 { self.dm0 }

    /// Bits of random salt `b` drawn per encrypt attempt.
    #[must_use]
    pub fn db(&self) -> u16 { self.db }

    /// Meet-in-the-middle defense bound; `0` disables both the bound check and constant-coefficient skip.
    #[must_use]
    pub fn maxm1(&self) -> u16 { self.maxm1 }

    /// Bits of the public key folded into the blinding-polynomial seed.
    #[must_use]
    pub fn pklen(&self) -> u16 { self.pklen }

    /// 3-byte parameter-set identifier folded into the seed.
    #[must_use]
    pub fn oid(&self) -> [u8; 3] { self.oid }

    /// Whether private/blinding polynomials use product form `f1*f2+f3`.
    #[must_use]
    pub fn prod_flag(&self) -> bool { self.prod_flag }

    /// Whether key generation verifies that `g` is invertible mod `q` (IEEE 1363.1 §9 open question; default `false`).
    #[must_use]
    pub fn check_g_invertible(&self) -> bool { self.check_g_invertible }

    /// Target Hamming weight for sampling `g`: `N/3` in both ternary and product form (IEEE 1363.1 §4.4 step 2).
    #[must_use]
    pub fn dg(&self) -> usize { self.n() / 3 }
}

/// Maximum plaintext length in bytes for this parameter set (IEEE 1363.1 §4.7).
#[must_use]
pub fn max_msg_len(params: &Params) -> u16 {
    let n = u32::from(params.n);
    let llen = 1u32;
    let db_bytes = u32::from(params.db) / 8;
    let len = if params.maxm1 > 0 {
        (n - 1) * 3 / 2 / 8 - llen - db_bytes
    } else {
        n * 3 / 2 / 8 - llen - db_bytes
    };
    #[allow(clippy::cast_possible_truncation)]
    {
        len as u16
    }
}

/// Ciphertext length in bytes: `ceil(N * log2(q) / 8)` (IEEE 1363.1 §6).
#[must_use]
pub fn enc_len(params: &Params) -> usize {
    let bits_per_coeff = params.q.trailing_zeros() as usize;
    (params.n() * bits_per_coeff + 7) / 8
}

/// IEEE 1363.1 Appendix A / EESS#1 `ees401ep1`: N=401, q=2048, moderate security.
#[must_use]
pub fn ees401ep1() -> Params {
    Params::new(401, 2048, 113, 0, 0, 113, 112, 0, 112, [0x00, 0x02, 0x04], false, false)
        .expect("ees401ep1 is a valid parameter set")
}

/// IEEE 1363.1 Appendix A / EESS#1 `ees449ep1`: N=449, q=2048, ternary private
/// key, higher security level than `ees401ep1`.
#[must_use]
pub fn ees449ep1() -> Params {
    Params::new(449, 2048, 134, 0, 0, 134, 112, 0, 112, [0x00, 0x03, 0x03], false, false)
        .expect("ees449ep1 is a valid parameter set")
}

/// IEEE 1363.1 Appendix A / EESS#1 `ees677ep1`: N=677, q=2048, higher security level.
#[cfg(feature = "product-form")]
#[must_use]
pub fn ees677ep1() -> Params {
    Params::new(677, 2048, 157, 0, 0, 157, 120, 0, 120, [0x00, 0x04, 0x03], false, false)
        .expect("ees677ep1 is a valid parameter set")
}

/// IEEE 1363.1 Appendix A / EESS#1 `ees1087ep2`: N=1087, q=2048, highest security
/// level among the four presets, product-form private key and blinding polynomial.
#[cfg(feature = "product-form")]
#[must_use]
pub fn ees1087ep2() -> Params {
    Params::new(1087, 2048, 120, 18, 18, 126, 128, 170, 128, [0x00, 0x06, 0x05], true, false)
        .expect("ees1087ep2 is a valid parameter set")
}
