//! Seed assembly and the repetition-weight check: small utilities shared by
//! `encrypt` and `decrypt` (IEEE 1363.1 §4.4 `ntru_get_seed`, §4.5 step 12 / §4.6
//! step 3 repetition weight).

extern crate alloc;

use crate::params::Params;
use crate::types::IntPoly;
use alloc::vec::Vec;

/// Assemble the blinding-polynomial seed `oid || msg || b || htrunc` (IEEE 1363.1 §6).
#[must_use]
pub fn get_seed(msg: &[u8], htrunc: &[u8], b: &[u8], params: &Params) -> Vec<u8> {
    let oid = params.oid();
    let mut seed = Vec::with_capacity(oid.len() + msg.len() + b.len() + htrunc.len());
    seed.extend_from_slice(&oid);
    seed.extend_from_slice(msg);
    seed.extend_from_slice(b);
    seed.extend_from_slice(htrunc);
    seed
}

/// `true` iff every one of `-1`, `0`, `+1` occurs at least `dm0` times in the
/// (ternary, mod-3-centered) polynomial `p`.
#[must_use]
pub fn check_rep_weight(p: &IntPoly, dm0: u16) -> bool {
    let weights = p.rep_weights();
    weights.iter().all(|&w| w >= dm0 as usize)
}

#[cfg(test)]
mod tests {
    use super::{check_rep_weight, get_seed};
    use crate::params::ees401ep1;
    use crate::types::IntPoly;

    #[test]
    fn seed_layout_matches_oid_msg_b_htrunc() {
        let params = ees401ep1();
        let seed = get_seed(b"hi", &[0xAA, 0xBB], &[1, 2, 3, 4], &params);
        assert_eq!(&seed[0..3], &params.oid());
        assert_eq!(&seed[3..5], b"hi");
        assert_eq!(&seed[5..9], &[1, 2, 3, 4]);
        assert_eq!(&seed[9..11], &[0xAA, 0xBB]);
    }

    #[test]
    fn rep_weight_check_respects_dm0() {
        let mut p = IntPoly::zero(6);
        p.set(0, 1);
        p.set(1, 1);
        p.set(2, -1);
        p.set(3, -1);
        p.set(4, 0);
        p.set(5, 0);
        assert!(check_rep_weight(&p, 2));
        assert!(!check_rep_weight(&p, 3));
    }
}
