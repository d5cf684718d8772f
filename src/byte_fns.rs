//! Mod-q and 2-bit polynomial/byte encodings.
//!
//! Packs a polynomial's coefficients into a bitstream at a fixed bit width,
//! and back.

extern crate alloc;

use crate::types::IntPoly;
use alloc::vec;
use alloc::vec::Vec;

/// Pack `poly`'s coefficients (each reduced into `[0, q)`) into a
/// little-endian bitstream, `log2(q)` bits per coefficient (IEEE 1363.1 §6: public
/// key and ciphertext layout).
#[must_use]
pub fn to_arr(poly: &IntPoly, q: u16) -> Vec<u8> {
    let bits_per = q.trailing_zeros() as usize;
    let total_bits = poly.n() * bits_per;
    let mut out = vec![0u8; (total_bits + 7) / 8];

    let mut bit_index = 0usize;
    for &c in poly.coeffs() {
        let mut v = c.rem_euclid(i32::from(q)) as u32;
        for _ in 0..bits_per {
            if v & 1 == 1 {
                out[bit_index / 8] |= 1 << (bit_index % 8);
            }
            v >>= 1;
            bit_index += 1;
        }
    }
    out
}

/// Inverse of [`to_arr`]: unpack `n` coefficients of `log2(q)` bits each.
#[must_use]
pub fn from_arr(data: &[u8], n: usize, q: u16) -> IntPoly {
    let bits_per = q.trailing_zeros() as usize;
    let mut poly = IntPoly::zero(n);

    let mut bit_index = 0usize;
    for i in 0..n {
        let mut v: i32 = 0;
        for b in 0..bits_per {
            let bit = (data[bit_index / 8] >> (bit_index % 8)) & 1;
            v |= i32::from(bit) << b;
            bit_index += 1;
        }
        poly.set(i, v);
    }
    poly
}

/// Pack the low 2 bits of each (already mod-q-reduced, non-negative)
/// coefficient, little-endian within each byte. Used to feed `R`'s bytes into
/// the MGF (IEEE 1363.1 §6, §4.5 step 8).
#[must_use]
pub fn to_arr4(poly: &IntPoly) -> Vec<u8> {
    let n = poly.n();
    let mut out = vec![0u8; (2 * n + 7) / 8];

    let mut bit_index = 0usize;
    for &c in poly.coeffs() {
        debug_assert!(c >= 0, "to_arr4 expects a non-negative, mod-q-reduced coefficient");
        #[allow(clippy::cast_sign_loss)]
        let v = (c & 0b11) as u8;
        for b in 0..2u8 {
            if (v >> b) & 1 == 1 {
                out[bit_index / 8] |= 1 << (bit_index % 8);
            }
            bit_index += 1;
        }
    }
    out
}
