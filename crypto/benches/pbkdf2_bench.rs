// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use keystretch::{hmac, Algorithm, Encoding, Pbkdf2};

const ITERATIONS: u32 = 1_000;

fn bench_hmac(c: &mut Criterion) {
    let data = [0x5au8; 1024];

    let mut group = c.benchmark_group("hmac 1KiB");
    for algorithm in Algorithm::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(algorithm), &algorithm, |b, a| {
            b.iter(|| hmac(a.name(), &data, b"bench key", Encoding::Raw).unwrap());
        });
    }
    group.finish();
}

fn bench_pbkdf2(c: &mut Criterion) {
    let mut group = c.benchmark_group("pbkdf2 128 byte key");
    group.sample_size(10);

    for algorithm in [Algorithm::Sha256, Algorithm::Sm3] {
        group.bench_function(BenchmarkId::new("sequential", algorithm), |b| {
            let pbkdf2 = Pbkdf2::new(algorithm);
            b.iter(|| pbkdf2.derive_key(b"password", b"salt", ITERATIONS, 128).unwrap());
        });

        group.bench_function(BenchmarkId::new("parallel", algorithm), |b| {
            let pbkdf2 = Pbkdf2::new(algorithm).parallel(true);
            b.iter(|| pbkdf2.derive_key(b"password", b"salt", ITERATIONS, 128).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hmac, bench_pbkdf2);
criterion_main!(benches);
