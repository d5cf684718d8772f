//! Ternary polynomial sampler and blinding-polynomial generator (IEEE 1363.1 §4.2, §4.3).

extern crate alloc;

use crate::error::NtruError;
use crate::igf::{bits_for, Igf};
use crate::params::Params;
use crate::rand::RandContext;
use crate::types::{PrivPoly, TernPoly};
use alloc::vec;
use alloc::vec::Vec;
use sha3::digest::XofReader;

/// Draw a ternary polynomial of length `n` with exactly `df` `+1`s and `df`
/// `-1`s from `igf`, rejecting duplicate indices via a seen-bitmap. Matches
/// the reference's two-phase draw order: `neg_ones` first, then `ones`.
pub fn gen_tern_poly<R: XofReader>(igf: &mut Igf<R>, n: usize, df: usize) -> TernPoly {
    debug_assert!(2 * df <= n, "gen_tern_poly: df too large for N");
    let mut seen = vec![false; n];
    let mut neg_ones = Vec::with_capacity(df);
    let mut ones = Vec::with_capacity(df);

    let mut t = 0;
    while t < df {
        let idx = igf.next_index();
        if !seen[idx] {
            #[allow(clippy::cast_possible_truncation)]
            neg_ones.push(idx as u16);
            seen[idx] = true;
            t += 1;
        }
    }
    t = 0;
    while t < df {
        let idx = igf.next_index();
        if !seen[idx] {
            #[allow(clippy::cast_possible_truncation)]
            ones.push(idx as u16);
            seen[idx] = true;
            t += 1;
        }
    }
    TernPoly::new(n, ones, neg_ones)
}

/// Derive a blinding (or private-key) polynomial deterministically from
/// `seed` and `params`: a single ternary polynomial, or — when
/// `params.prod_flag` is set — a product-form triple, all drawn from one
/// continuous IGF stream seeded once (IEEE 1363.1 §4.3).
#[must_use]
pub fn gen_blind_poly(seed: &[u8], params: &Params) -> PrivPoly {
    let mut igf = crate::igf::new(seed, params.n());

    #[cfg(feature = "product-form")]
    if params.prod_flag() {
        let f1 = gen_tern_poly(&mut igf, params.n(), params.df1());
        let f2 = gen_tern_poly(&mut igf, params.n(), params.df2());
        let f3 = gen_tern_poly(&mut igf, params.n(), params.df3());
        return PrivPoly::Product(f1, f2, f3);
    }

    let t = gen_tern_poly(&mut igf, params.n(), params.df1());
    PrivPoly::Ternary(t)
}

/// Draws indices directly from a [`RandContext`] rather than an IGF, with
/// the same rejection-sampling shape as [`Igf::next_index`]. Used by key
/// generation (IEEE 1363.1 §4.4), which samples `t` and `g` from true randomness
/// rather than deriving them from a seed.
struct RandDraw<'a> {
    rand: &'a mut dyn RandContext,
    n: u32,
    bits_per_draw: u32,
    bit_buf: u32,
    bit_count: u32,
}

impl<'a> RandDraw<'a> {
    fn new(rand: &'a mut dyn RandContext, n: usize) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let n_u32 = n as u32;
        RandDraw { rand, n: n_u32, bits_per_draw: bits_for(n_u32), bit_buf: 0, bit_count: 0 }
    }

    fn next_index(&mut self) -> Result<usize, NtruError> {
        loop {
            while self.bit_count < self.bits_per_draw {
                let mut byte = [0u8; 1];
                self.rand.generate(&mut byte)?;
                self.bit_buf |= u32::from(byte[0]) << self.bit_count;
                self.bit_count += 8;
            }
            let candidate = self.bit_buf & ((1u32 << self.bits_per_draw) - 1);
            self.bit_buf >>= self.bits_per_draw;
            self.bit_count -= self.bits_per_draw;
            if candidate < self.n {
                #[allow(clippy::cast_possible_truncation)]
                return Ok(candidate as usize);
            }
        }
    }
}

/// Draw a ternary polynomial of length `n`, weight `df`, directly from `rand`.
///
/// # Errors
/// Returns [`NtruError::Prng`] if the random source fails.
pub fn rand_tern_poly(rand: &mut dyn RandContext, n: usize, df: usize) -> Result<TernPoly, NtruError> {
    debug_assert!(2 * df <= n, "rand_tern_poly: df too large for N");
    let mut draw = RandDraw::new(rand, n);
    let mut seen = vec![false; n];
    let mut neg_ones = Vec::with_capacity(df);
    let mut ones = Vec::with_capacity(df);

    let mut t = 0;
    while t < df {
        let idx = draw.next_index()?;
        if !seen[idx] {
            #[allow(clippy::cast_possible_truncation)]
            neg_ones.push(idx as u16);
            seen[idx] = true;
            t += 1;
        }
    }
    t = 0;
    while t < df {
        let idx = draw.next_index()?;
        if !seen[idx] {
            #[allow(clippy::cast_possible_truncation)]
            ones.push(idx as u16);
            seen[idx] = true;
            t += 1;
        }
    }
    Ok(TernPoly::new(n, ones, neg_ones))
}

/// Draw a product-form triple `(f1, f2, f3)` directly from `rand`, each
/// independently at its own target weight.
///
/// # Errors
/// Returns [`NtruError::Prng`] if the random source fails.
#[cfg(feature = "product-form")]
pub fn rand_prod_poly(
    rand: &mut dyn RandContext, n: usize, df1: usize, df2: usize, df3: usize,
) -> Result<(TernPoly, TernPoly, TernPoly), NtruError> {
    let f1 = rand_tern_poly(rand, n, df1)?;
    let f2 = rand_tern_poly(rand, n, df2)?;
    let f3 = rand_tern_poly(rand, n, df3)?;
    Ok((f1, f2, f3))
}
