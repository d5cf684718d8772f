//! Integration tests for the NTRUEncrypt envelope: round trip, the
//! re-encryption check, SVES rejection, and product-form key generation
//! (IEEE 1363.1 §8 properties 1, 3, 5, 6, 8; seed scenarios S1, S2, S3, S5, S6).

use ntruencrypt::decrypt::decrypt;
use ntruencrypt::encrypt::encrypt;
use ntruencrypt::error::NtruError;
use ntruencrypt::keygen::gen_key_pair;
use ntruencrypt::params::{ees401ep1, max_msg_len};
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

#[test]
fn s1_hello_round_trips() {
    let params = ees401ep1();
    let mut rng = ChaCha8Rng::seed_from_u64(12345);
    let kp = gen_key_pair(&params, &mut rng).unwrap();
    let ct = encrypt(b"Hello", &kp.pub_key, &params, &mut rng).unwrap();
    let (msg, len) = decrypt(&ct, &kp, &params).unwrap();
    assert_eq!(&msg[..], b"Hello");
    assert_eq!(len, 5);
}

#[test]
fn s2_empty_message_round_trips() {
    let params = ees401ep1();
    let mut rng = ChaCha8Rng::seed_from_u64(54321);
    let kp = gen_key_pair(&params, &mut rng).unwrap();
    let ct = encrypt(b"", &kp.pub_key, &params, &mut rng).unwrap();
    let (msg, len) = decrypt(&ct, &kp, &params).unwrap();
    assert!(msg.is_empty());
    assert_eq!(len, 0);
}

#[test]
fn s3_flipping_ciphertext_bit_zero_fails_decrypt() {
    let params = ees401ep1();
    let mut rng = ChaCha8Rng::seed_from_u64(7777);
    let kp = gen_key_pair(&params, &mut rng).unwrap();
    let mut ct = encrypt(b"attack at dawn", &kp.pub_key, &params, &mut rng).unwrap();
    ct[0] ^= 0x01;
    assert!(decrypt(&ct, &kp, &params).is_err());
}

#[cfg(feature = "product-form")]
#[test]
fn s6_product_form_round_trips() {
    use ntruencrypt::params::ees1087ep2;
    let params = ees1087ep2();
    let mut rng = ChaCha8Rng::seed_from_u64(909090);
    let kp = gen_key_pair(&params, &mut rng).unwrap();
    let ct = encrypt(b"product form plaintext", &kp.pub_key, &params, &mut rng).unwrap();
    let (msg, _len) = decrypt(&ct, &kp, &params).unwrap();
    assert_eq!(&msg[..], b"product form plaintext");
}

#[test]
fn max_msg_len_boundary_is_accepted_and_exceeding_it_is_rejected() {
    let params = ees401ep1();
    let mut rng = ChaCha8Rng::seed_from_u64(2468);
    let kp = gen_key_pair(&params, &mut rng).unwrap();
    let max_len = max_msg_len(&params) as usize;

    let at_limit = alloc_vec(max_len);
    assert!(encrypt(&at_limit, &kp.pub_key, &params, &mut rng).is_ok());

    let over_limit = alloc_vec(max_len + 1);
    assert_eq!(
        encrypt(&over_limit, &kp.pub_key, &params, &mut rng),
        Err(NtruError::MsgTooLong)
    );
}

#[test]
fn different_key_pairs_produce_different_ciphertexts_for_the_same_message() {
    let params = ees401ep1();
    let mut rng_a = ChaCha8Rng::seed_from_u64(1);
    let mut rng_b = ChaCha8Rng::seed_from_u64(2);
    let kp_a = gen_key_pair(&params, &mut rng_a).unwrap();
    let kp_b = gen_key_pair(&params, &mut rng_b).unwrap();

    let ct_a = encrypt(b"same plaintext", &kp_a.pub_key, &params, &mut rng_a).unwrap();
    let ct_b = encrypt(b"same plaintext", &kp_b.pub_key, &params, &mut rng_b).unwrap();
    assert_ne!(ct_a, ct_b);

    // Each ciphertext only decrypts correctly under its own key pair.
    assert!(decrypt(&ct_a, &kp_b, &params).is_err());
}

fn alloc_vec(len: usize) -> Vec<u8> { (0..len).map(|i| (i % 251) as u8).collect() }
