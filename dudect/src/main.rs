// Note that this package does not provide any constant-time assurances.
// However, this code fragment lays the groundwork should that change.

use dudect_bencher::{ctbench_main, BenchRng, Class, CtRunner};
use ntruencrypt::decrypt::decrypt;
use ntruencrypt::encrypt::encrypt;
use ntruencrypt::keygen::gen_key_pair;
use ntruencrypt::params::{ees401ep1, Params};
use ntruencrypt::types::KeyPair;
use rand_core::OsRng;

fn fresh_ciphertext(params: &Params, kp: &KeyPair) -> Vec<u8> {
    encrypt(b"dudect probe message", &kp.pub_key, params, &mut OsRng).unwrap()
}

/// The re-encryption check (IEEE 1363.1 §5) is the one place decrypt branches on
/// secret-derived data at the very end of the function; this benchmark feeds
/// it a valid ciphertext (`Class::Left`) against a ciphertext whose final
/// byte was flipped, guaranteeing a re-encryption mismatch (`Class::Right`),
/// and looks for a timing distinguisher between the two.
fn decrypt_valid_vs_invalid(runner: &mut CtRunner, _rng: &mut BenchRng) {
    const ITERATIONS_OUTER: usize = 1000;
    const ITERATIONS_INNER: usize = 100;

    let params = ees401ep1();
    let kp = gen_key_pair(&params, &mut OsRng).unwrap();

    let valid = fresh_ciphertext(&params, &kp);
    let mut invalid = fresh_ciphertext(&params, &kp);
    let last = invalid.len() - 1;
    invalid[last] ^= 0xFF;

    let mut inputs: Vec<Vec<u8>> = Vec::new();
    let mut classes = Vec::new();

    for _ in 0..ITERATIONS_OUTER {
        inputs.push(valid.clone());
        classes.push(Class::Left);
    }
    for _ in 0..ITERATIONS_OUTER {
        inputs.push(invalid.clone());
        classes.push(Class::Right);
    }

    for (class, input) in classes.into_iter().zip(inputs.into_iter()) {
        runner.run_one(class, || {
            for _ in 0..ITERATIONS_INNER {
                let _ = decrypt(&input, &kp, &params);
            }
        })
    }
}

ctbench_main!(decrypt_valid_vs_invalid);
