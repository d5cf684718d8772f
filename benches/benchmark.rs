use criterion::{criterion_group, criterion_main, Criterion};

use ntruencrypt::decrypt::decrypt;
use ntruencrypt::encrypt::encrypt;
use ntruencrypt::keygen::gen_key_pair;
use ntruencrypt::params::ees401ep1;
#[cfg(feature = "product-form")]
use ntruencrypt::params::ees677ep1;
use rand_core::OsRng;

#[allow(clippy::redundant_closure)]
pub fn criterion_benchmark(c: &mut Criterion) {
    let params_401 = ees401ep1();
    let kp_401 = gen_key_pair(&params_401, &mut OsRng).unwrap();
    let ct_401 = encrypt(b"benchmark message", &kp_401.pub_key, &params_401, &mut OsRng).unwrap();

    c.bench_function("ees401ep1 KeyGen", |b| b.iter(|| gen_key_pair(&params_401, &mut OsRng)));
    c.bench_function("ees401ep1 Encrypt", |b| {
        b.iter(|| encrypt(b"benchmark message", &kp_401.pub_key, &params_401, &mut OsRng))
    });
    c.bench_function("ees401ep1 Decrypt", |b| b.iter(|| decrypt(&ct_401, &kp_401, &params_401)));

    #[cfg(feature = "product-form")]
    {
        let params_677 = ees677ep1();
        let kp_677 = gen_key_pair(&params_677, &mut OsRng).unwrap();
        let ct_677 =
            encrypt(b"benchmark message", &kp_677.pub_key, &params_677, &mut OsRng).unwrap();

        c.bench_function("ees677ep1 KeyGen", |b| b.iter(|| gen_key_pair(&params_677, &mut OsRng)));
        c.bench_function("ees677ep1 Encrypt", |b| {
            b.iter(|| encrypt(b"benchmark message", &kp_677.pub_key, &params_677, &mut OsRng))
        });
        c.bench_function("ees677ep1 Decrypt", |b| b.iter(|| decrypt(&ct_677, &kp_677, &params_677)));
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
