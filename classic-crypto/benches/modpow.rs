use criterion::{Criterion, black_box, criterion_group, criterion_main};
use classic_crypto::ring::Ring;

fn bench_modpow(c: &mut Criterion) {
    // 1) one-time setup
    let ring = Ring::try_with(1_000_000_007).expect("build ring");

    c.bench_function("modpow", |b| {
        b.iter(|| {
            let result = ring
                .pow(black_box(1_234_567), black_box(987_654_321))
                .expect("pow");

            black_box(result);
        })
    });
}

fn bench_inverse(c: &mut Criterion) {
    let ring = Ring::try_with(1_000_000_007).expect("build ring");

    c.bench_function("inverse", |b| {
        b.iter(|| {
            let result = ring.inv(black_box(123_456_789)).expect("inverse");

            black_box(result);
        })
    });
}

criterion_group!(benches, bench_modpow, bench_inverse);
criterion_main!(benches);
