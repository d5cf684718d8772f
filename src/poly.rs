//! Ring multiplication and inversion over `Z[x]/(x^N-1)`.
//!
//! `N` varies by parameter set and `q` is a power of two with no
//! NTT-friendly structure, so this module uses schoolbook convolution
//! throughout rather than a number-theoretic transform.

extern crate alloc;

use crate::types::{IntPoly, PrivPoly, TernPoly};
use alloc::vec;
use alloc::vec::Vec;

/// `result[k] += sign * sum_j dense[(k - j) mod n]` over the index set `idx`.
/// This is convolution of a dense polynomial with a sparse `{0, sign}` one,
/// i.e. `dense * sum_i sign * x^i`.
fn convolve_sparse_add(dense: &[i32], idx: &[u16], sign: i32, n: usize, out: &mut [i32]) {
    for &i in idx {
        let i = i as usize;
        for k in 0..n {
            let pos = (k + i) % n;
            out[pos] += sign * dense[k];
        }
    }
}

/// Multiply a dense polynomial by a sparse ternary polynomial: `a * t`.
#[must_use]
pub fn mult_tern(a: &IntPoly, t: &TernPoly, n: usize) -> IntPoly {
    debug_assert_eq!(a.n(), n);
    let mut out = IntPoly::zero(n);
    convolve_sparse_add(a.coeffs(), t.ones(), 1, n, out.coeffs_mut());
    convolve_sparse_add(a.coeffs(), t.neg_ones(), -1, n, out.coeffs_mut());
    out
}

/// Multiply a dense polynomial by a product-form polynomial `f1*f2 + f3`.
#[cfg(feature = "product-form")]
#[must_use]
pub fn mult_prod(a: &IntPoly, f1: &TernPoly, f2: &TernPoly, f3: &TernPoly, n: usize) -> IntPoly {
    let af1 = mult_tern(a, f1, n);
    let mut af1f2 = mult_tern(&af1, f2, n);
    let af3 = mult_tern(a, f3, n);
    af1f2.add_assign(&af3);
    af1f2
}

/// Multiply a dense polynomial by a `PrivPoly`, dispatching on its tag.
#[must_use]
pub fn mult_priv(a: &IntPoly, p: &PrivPoly, n: usize) -> IntPoly {
    match p {
        PrivPoly::Ternary(t) => mult_tern(a, t, n),
        #[cfg(feature = "product-form")]
        PrivPoly::Product(f1, f2, f3) => mult_prod(a, f1, f2, f3, n),
    }
}

/// Expand a `PrivPoly` into its dense ring-element value: the ternary
/// polynomial itself, or `f1*f2 + f3` for product form. Used by key
/// generation, which needs `g` (not a multiplier, but an operand) as a dense
/// polynomial to invert or fold into `f = 3t+1`.
#[must_use]
pub fn priv_to_dense(p: &PrivPoly, n: usize) -> IntPoly {
    match p {
        PrivPoly::Ternary(t) => t.to_dense(),
        #[cfg(feature = "product-form")]
        PrivPoly::Product(f1, f2, f3) => {
            let mut prod = mult_dense(&f1.to_dense(), &f2.to_dense(), n);
            prod.add_assign(&f3.to_dense());
            prod
        }
    }
}

/// Full schoolbook convolution of two dense polynomials, reduced modulo
/// `x^n - 1` (no coefficient-modulus reduction).
#[must_use]
pub fn mult_dense(a: &IntPoly, b: &IntPoly, n: usize) -> IntPoly {
    debug_assert_eq!(a.n(), n);
    debug_assert_eq!(b.n(), n);
    let mut out = vec![0i32; n];
    for (i, &ai) in a.coeffs().iter().enumerate() {
        if ai == 0 {
            continue;
        }
        for (j, &bj) in b.coeffs().iter().enumerate() {
            out[(i + j) % n] += ai * bj;
        }
    }
    let mut result = IntPoly::zero(n);
    result.coeffs_mut().copy_from_slice(&out);
    result
}

/// Highest index with a nonzero coefficient in `p[0..=n]`, or `None` if `p`
/// is the zero polynomial.
fn degree(p: &[u8]) -> Option<usize> { p.iter().rposition(|&c| c != 0) }

/// Inverts `a` (given as 0/1 coefficients) in `(Z/2Z)[x]/(x^n - 1)` via the
/// "almost inverse" binary extended-Euclidean algorithm (Hoffstein, Pipher
/// and Silverman's NTRU inversion technique). Returns `None` if `a` is not
/// invertible mod 2 (i.e. `gcd(a, x^n - 1) != 1` over `GF(2)`).
fn invert_mod2(a: &[u8], n: usize) -> Option<Vec<u8>> {
    // f, g, b, c all sized n+1 to hold g = x^n + 1 without truncation.
    let mut b = vec![0u8; n + 1];
    b[0] = 1;
    let mut c = vec![0u8; n + 1];
    let mut f = vec![0u8; n + 1];
    f[..n].copy_from_slice(a);
    let mut g = vec![0u8; n + 1];
    g[0] = 1;
    g[n] = 1;

    let mut deg_f = degree(&f)?;
    let mut deg_g = n;
    let mut k = 0usize;

    loop {
        while f[0] == 0 {
            // f := f / x (shift right)
            f.copy_within(1.., 0);
            *f.last_mut().unwrap() = 0;
            // c := c * x (shift left)
            c.copy_within(..n, 1);
            c[0] = 0;
            k += 1;
            deg_f = degree(&f)?;
        }
        if deg_f == 0 {
            break;
        }
        if deg_f < deg_g {
            core::mem::swap(&mut f, &mut g);
            core::mem::swap(&mut deg_f, &mut deg_g);
            core::mem::swap(&mut b, &mut c);
        }
        for i in 0..=n {
            f[i] ^= g[i];
        }
        deg_f = match degree(&f) {
            Some(d) => d,
            None => return None,
        };
        for i in 0..=n {
            b[i] ^= c[i];
        }
    }

    // b(x) * a(x) = x^k (mod x^n - 1); the inverse is x^{-k} * b(x).
    let shift = (n - (k % n)) % n;
    let mut result = vec![0u8; n];
    for i in 0..n {
        result[(i + shift) % n] = b[i];
    }
    Some(result)
}

/// Inverts `f` modulo `q` (a power of two) in `Z[x]/(x^n - 1)`, via inversion
/// mod 2 followed by Hensel lifting (`b_{k+1} = b_k * (2 - f*b_k) mod 2^{2k}`)
/// to double precision each round until it reaches `q`. Returns `None` if `f`
/// is not invertible mod 2 (the only case that can fail: once a mod-2
/// inverse exists, every power-of-two lift succeeds).
#[must_use]
pub fn invert_mod_q(f: &IntPoly, q: u16, n: usize) -> Option<IntPoly> {
    let f_mod2: Vec<u8> = f.coeffs().iter().map(|&c| (c.rem_euclid(2)) as u8).collect();
    let inv2 = invert_mod2(&f_mod2, n)?;

    let mut b = IntPoly::zero(n);
    for (i, &bit) in inv2.iter().enumerate() {
        b.set(i, i32::from(bit));
    }

    let mut modulus: u32 = 2;
    while modulus < u32::from(q) {
        modulus = modulus.saturating_mul(modulus);
        let modulus_u16 = modulus.min(u32::from(u16::MAX)) as u16;

        let mut t = mult_dense(f, &b, n);
        t.mod_q(modulus_u16);

        let mut two_minus_t = IntPoly::zero(n);
        two_minus_t.set(0, 2);
        two_minus_t.sub_assign(&t);
        two_minus_t.mod_q(modulus_u16);

        b = mult_dense(&two_minus_t, &b, n);
        b.mod_q(modulus_u16);
    }
    b.mod_q(q);
    Some(b)
}
