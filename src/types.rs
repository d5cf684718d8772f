//! Dense and sparse polynomial representations over `Z[x]/(x^N-1)`.
//!
//! Coefficients are carried as plain `i32`s because `N` and `q` are both
//! runtime `Params` fields here, not compile-time constants. A dense ring
//! element therefore needs a heap-allocated coefficient vector.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use zeroize::Zeroize;

/// A dense polynomial of length `N`; see commentary at each call site for
/// which range the coefficients currently occupy (ternary, mod-q,
/// mod-q centered, or mod-3 centered).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntPoly {
    coeffs: Vec<i32>,
}

impl IntPoly {
    /// An all-zero polynomial of length `n`.
    #[must_use]
    pub fn zero(n: usize) -> Self { IntPoly { coeffs: vec![0i32; n] } }

    /// Ring dimension `N`.
    #[must_use]
    pub fn n(&self) -> usize { self.coeffs.len() }

    #[must_use]
    pub fn coeffs(&self) -> &[i32] { &self.coeffs }

    pub fn coeffs_mut(&mut self) -> &mut [i32] { &mut self.coeffs }

    #[must_use]
    pub fn get(&self, i: usize) -> i32 { self.coeffs[i] }

    pub fn set(&mut self, i: usize, v: i32) { self.coeffs[i] = v; }

    /// `self += other`, coefficient-wise, no modular reduction.
    pub fn add_assign(&mut self, other: &IntPoly) {
        debug_assert_eq!(self.n(), other.n());
        for (a, b) in self.coeffs.iter_mut().zip(other.coeffs.iter()) {
            *a += *b;
        }
    }

    /// `self -= other`, coefficient-wise, no modular reduction.
    pub fn sub_assign(&mut self, other: &IntPoly) {
        debug_assert_eq!(self.n(), other.n());
        for (a, b) in self.coeffs.iter_mut().zip(other.coeffs.iter()) {
            *a -= *b;
        }
    }

    /// `self *= k` (scalar multiplication, used for `f = 3t+1` and `h = 3gf_q`).
    pub fn mul_scalar(&mut self, k: i32) {
        for a in &mut self.coeffs {
            *a *= k;
        }
    }

    /// Reduce every coefficient into `[0, q)`.
    pub fn mod_q(&mut self, q: u16) {
        let q = i32::from(q);
        for a in &mut self.coeffs {
            let mut v = *a % q;
            if v < 0 {
                v += q;
            }
            *a = v;
        }
    }

    /// Reduce every coefficient into the centered interval `(-q/2, q/2]`.
    pub fn mod_q_centered(&mut self, q: u16) {
        self.mod_q(q);
        let q = i32::from(q);
        for a in &mut self.coeffs {
            if *a > q / 2 {
                *a -= q;
            }
        }
    }

    /// Reduce every coefficient mod 3, centered into `{-1, 0, 1}`.
    pub fn mod3(&mut self) {
        for a in &mut self.coeffs {
            let mut v = *a % 3;
            if v < 0 {
                v += 3;
            }
            if v == 2 {
                v = -1;
            }
            *a = v;
        }
    }

    /// Sum of all coefficients (used by the `maxm1` bound check).
    #[must_use]
    pub fn sum_coeffs(&self) -> i32 { self.coeffs.iter().sum() }

    /// Zero the constant coefficient (the `maxm1` meet-in-the-middle defense,
    /// IEEE 1363.1 §4.5 step 10).
    pub fn zero_constant(&mut self) { self.coeffs[0] = 0; }

    /// Count of coefficients equal to -1, 0, +1 respectively. Only meaningful
    /// for a ternary (mod-3-centered) polynomial.
    #[must_use]
    pub fn rep_weights(&self) -> [usize; 3] {
        let mut w = [0usize; 3];
        for &c in &self.coeffs {
            debug_assert!((-1..=1).contains(&c), "rep_weights: not a ternary polynomial");
            w[(c + 1) as usize] += 1;
        }
        w
    }
}

impl Zeroize for IntPoly {
    fn zeroize(&mut self) { self.coeffs.zeroize(); }
}

impl Drop for IntPoly {
    fn drop(&mut self) { self.zeroize(); }
}

/// A sparse ternary polynomial: distinct indices into `[0, N)` for the `+1`
/// and `-1` coefficients; every other position is implicitly zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TernPoly {
    n: usize,
    ones: Vec<u16>,
    neg_ones: Vec<u16>,
}

impl TernPoly {
    #[must_use]
    pub fn new(n: usize, ones: Vec<u16>, neg_ones: Vec<u16>) -> Self {
        debug_assert!(ones.iter().all(|&i| (i as usize) < n));
        debug_assert!(neg_ones.iter().all(|&i| (i as usize) < n));
        TernPoly { n, ones, neg_ones }
    }

    #[must_use]
    pub fn n(&self) -> usize { self.n }

    #[must_use]
    pub fn ones(&self) -> &[u16] { &self.ones }

    #[must_use]
    pub fn neg_ones(&self) -> &[u16] { &self.neg_ones }

    /// Expand into a dense `IntPoly` with coefficients in `{-1, 0, 1}`.
    #[must_use]
    pub fn to_dense(&self) -> IntPoly {
        let mut p = IntPoly::zero(self.n);
        for &i in &self.ones {
            p.set(i as usize, 1);
        }
        for &i in &self.neg_ones {
            p.set(i as usize, -1);
        }
        p
    }
}

impl Zeroize for TernPoly {
    fn zeroize(&mut self) {
        self.ones.zeroize();
        self.neg_ones.zeroize();
    }
}

impl Drop for TernPoly {
    fn drop(&mut self) { self.zeroize(); }
}

/// A private (or blinding) polynomial: either a single ternary polynomial, or
/// a product-form triple `f1*f2 + f3` of sparse ternary polynomials. The tag
/// dispatches every consumer (multiplication, sampling) rather than using
/// inheritance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PrivPoly {
    Ternary(TernPoly),
    #[cfg(feature = "product-form")]
    Product(TernPoly, TernPoly, TernPoly),
}

impl PrivPoly {
    #[must_use]
    pub fn n(&self) -> usize {
        match self {
            PrivPoly::Ternary(t) => t.n(),
            #[cfg(feature = "product-form")]
            PrivPoly::Product(f1, _, _) => f1.n(),
        }
    }

    /// `true` for a product-form polynomial.
    #[must_use]
    pub fn is_product(&self) -> bool {
        match self {
            PrivPoly::Ternary(_) => false,
            #[cfg(feature = "product-form")]
            PrivPoly::Product(..) => true,
        }
    }
}

impl Zeroize for PrivPoly {
    fn zeroize(&mut self) {
        match self {
            PrivPoly::Ternary(t) => t.zeroize(),
            #[cfg(feature = "product-form")]
            PrivPoly::Product(f1, f2, f3) => {
                f1.zeroize();
                f2.zeroize();
                f3.zeroize();
            }
        }
    }
}

impl Drop for PrivPoly {
    fn drop(&mut self) { self.zeroize(); }
}

/// The private half of a key pair: `t`, from which `f = 3*t + 1` is derived
/// on demand (IEEE 1363.1 §3). `t` is secret and must be zeroed on drop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncPrivKey {
    /// The private polynomial `t`.
    pub t: PrivPoly,
    /// The coefficient modulus, carried alongside the key so decrypt doesn't
    /// need a separate `Params` reference to reconstruct `f`.
    pub q: u16,
}

impl Zeroize for EncPrivKey {
    fn zeroize(&mut self) { self.t.zeroize(); }
}

impl Drop for EncPrivKey {
    fn drop(&mut self) { self.zeroize(); }
}

/// The public half of a key pair: `h = 3*g*f_q mod q` (IEEE 1363.1 §3). Not secret.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncPubKey {
    /// The public polynomial `h`.
    pub h: IntPoly,
    /// The coefficient modulus.
    pub q: u16,
}

/// An NTRUEncrypt key pair. Owns both halves; dropping a `KeyPair` zeroes
/// the private polynomial (IEEE 1363.1 §3, §9: "sensitive values implement a
/// secure-zero on scope exit").
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPair {
    /// The private key.
    pub priv_key: EncPrivKey,
    /// The public key.
    pub pub_key: EncPubKey,
}

impl Zeroize for KeyPair {
    fn zeroize(&mut self) { self.priv_key.zeroize(); }
}

impl Drop for KeyPair {
    fn drop(&mut self) { self.zeroize(); }
}
