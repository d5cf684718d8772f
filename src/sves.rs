//! SVES codec: ternary polynomial <-> byte array (IEEE 1363.1 §9.2.2/§9.2.3).
//!
//! The bit and coefficient tables below are reproduced exactly from the
//! reference implementation's `NTRU_BIT1_TABLE`/`NTRU_BIT2_TABLE`/
//! `NTRU_BIT3_TABLE`/`NTRU_COEFF1_TABLE`/`NTRU_COEFF2_TABLE`constants.

extern crate alloc;

use crate::error::NtruError;
use crate::types::IntPoly;
use alloc::vec;
use alloc::vec::Vec;

const COEFF1_TABLE: [i8; 8] = [0, 0, 0, 1, 1, 1, -1, -1];
const COEFF2_TABLE: [i8; 8] = [0, 1, -1, 0, 1, -1, 0, 1];
const BIT1_TABLE: [u8; 9] = [1, 1, 1, 0, 0, 0, 1, 0, 1];
const BIT2_TABLE: [u8; 9] = [1, 1, 1, 1, 0, 0, 0, 1, 0];
const BIT3_TABLE: [u8; 9] = [1, 0, 1, 0, 0, 1, 1, 1, 0];

/// Decode a byte array produced by [`to_sves`] back into a ternary
/// polynomial of length `n`. Ignores excess bytes; any coefficients beyond
/// what `data` supplies are zero. No error return — safe only on data that
/// was itself produced by `to_sves`.
#[must_use]
pub fn from_sves(data: &[u8], n: usize, skip: bool) -> IntPoly {
    let mut poly = IntPoly::zero(n);
    let mut coeff_idx = usize::from(skip);

    let full_chunks = data.len() / 3;
    let mut i = 0usize;
    'outer: for _ in 0..full_chunks {
        let chunk = u32::from(data[i]) | (u32::from(data[i + 1]) << 8) | (u32::from(data[i + 2]) << 16);
        i += 3;
        let mut chunk = chunk;
        for _ in 0..8 {
            if coeff_idx >= n - 1 {
                break 'outer;
            }
            let tbl_idx = (((chunk & 1) << 2) + (chunk & 2) + ((chunk & 4) >> 2)) as usize;
            poly.set(coeff_idx, i32::from(COEFF1_TABLE[tbl_idx]));
            coeff_idx += 1;
            poly.set(coeff_idx, i32::from(COEFF2_TABLE[tbl_idx]));
            coeff_idx += 1;
            chunk >>= 3;
        }
    }
    poly
}

/// Encode a ternary polynomial into bytes. Fails with
/// [`NtruError::InvalidEncoding`] if any processed coefficient pair is
/// `(-1,-1)` — the one pair the 3-bit table cannot represent.
///
/// # Errors
/// Returns [`NtruError::InvalidEncoding`] on a forbidden `(-1,-1)` pair.
pub fn to_sves(poly: &IntPoly, skip: bool) -> Result<Vec<u8>, NtruError> {
    let n = poly.n();
    let num_bits = (n * 3 + 1) / 2;
    let mut data = vec![0u8; (num_bits + 7) / 8];

    let start = usize::from(skip);
    let end = if skip { (n - 1) | 1 } else { n / 2 * 2 };

    let mut bit_index = 0u8;
    let mut byte_index = 0usize;
    let mut i = start;
    while i < end {
        let coeff1 = poly.get(i) + 1;
        i += 1;
        let coeff2 = poly.get(i) + 1;
        i += 1;
        if coeff1 == 0 && coeff2 == 0 {
            return Err(NtruError::InvalidEncoding);
        }
        let tbl_idx = (coeff1 * 3 + coeff2) as usize;
        let bits = [BIT1_TABLE[tbl_idx], BIT2_TABLE[tbl_idx], BIT3_TABLE[tbl_idx]];
        for bit in bits {
            data[byte_index] |= bit << bit_index;
            if bit_index == 7 {
                bit_index = 0;
                byte_index += 1;
            } else {
                bit_index += 1;
            }
        }
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::{from_sves, to_sves};
    use crate::error::NtruError;
    use crate::types::IntPoly;

    #[test]
    fn round_trip_without_skip() {
        let n = 20;
        let mut p = IntPoly::zero(n);
        let pattern = [1, 0, -1, 1, 1, 0, -1, 0, 1, -1, 0, 0, 1, -1, 1, 0, -1, 1, 0, 0];
        for (i, &c) in pattern.iter().enumerate() {
            p.set(i, c);
        }
        let bytes = to_sves(&p, false).expect("no (-1,-1) pairs in pattern");
        let decoded = from_sves(&bytes, n, false);
        // Round trip holds over [0, (n/2)*2); the single odd trailing coefficient
        // (if n is odd) is dropped by `to_sves` per IEEE 1363.1 §4.1 and is not checked here.
        for i in 0..(n / 2 * 2) {
            assert_eq!(decoded.get(i), p.get(i), "coefficient {i} mismatch");
        }
    }

    #[test]
    fn rejects_double_negative_one_pair() {
        // S5: TernPoly([-1,-1,0,0,0,0]) -> InvalidEncoding.
        let mut p = IntPoly::zero(6);
        p.set(0, -1);
        p.set(1, -1);
        assert_eq!(to_sves(&p, false), Err(NtruError::InvalidEncoding));
    }

    #[test]
    fn skip_leaves_constant_coefficient_untouched() {
        let n = 11;
        let mut p = IntPoly::zero(n);
        for i in 1..n {
            p.set(i, [1, 0, -1][i % 3]);
        }
        let bytes = to_sves(&p, true).expect("valid encoding");
        let decoded = from_sves(&bytes, n, true);
        assert_eq!(decoded.get(0), 0);
    }
}
