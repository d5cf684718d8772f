//! Mask Generation Function: a seeded pseudo-random ternary mask polynomial.
//!
//! This crate uses the standard MGF-TP-1 construction from IEEE 1363.1
//! Annex B.5.1.1: squeeze
//! a SHAKE256 XOF one byte at a time, split each byte into four 2-bit pairs,
//! discard any pair equal to `0b11`, and map the surviving three values
//! `{0,1,2}` onto trits `{-1,0,1}`. This gives a mask with the same
//! coefficient range as the ternary polynomials it's added to and subtracted
//! from in `encrypt`/`decrypt` (IEEE 1363.1 §4.5 step 9, §4.6 step 6), so no
//! intermediate scaling is needed.

use crate::types::IntPoly;
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::Shake256;

/// Derive an `n`-coefficient trit mask from `data`.
#[must_use]
pub fn derive_mask(data: &[u8], n: usize) -> IntPoly {
    let mut hasher = Shake256::default();
    hasher.update(data);
    let mut reader = hasher.finalize_xof();

    let mut mask = IntPoly::zero(n);
    let mut filled = 0usize;
    let mut byte = [0u8; 1];
    'outer: loop {
        reader.read(&mut byte);
        for shift in [0u8, 2, 4, 6] {
            let pair = (byte[0] >> shift) & 0b11;
            if pair == 0b11 {
                continue;
            }
            mask.set(filled, i32::from(pair) - 1);
            filled += 1;
            if filled == n {
                break 'outer;
            }
        }
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::derive_mask;

    #[test]
    fn mask_is_ternary_and_deterministic() {
        let n = 401;
        let a = derive_mask(b"some ring element bytes", n);
        let b = derive_mask(b"some ring element bytes", n);
        assert_eq!(a, b);
        for &c in a.coeffs() {
            assert!((-1..=1).contains(&c));
        }
    }

    #[test]
    fn mask_varies_with_input() {
        let n = 401;
        let a = derive_mask(b"input one", n);
        let b = derive_mask(b"input two", n);
        assert_ne!(a, b);
    }
}
