// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use rampart_blake2s::{
    Blake2sState, KEY_LEN, OUT_LEN, backend_name, blake2s, blake2s_hkdf, blake2s_hmac,
};

const SIZES: [usize; 5] = [64, 256, 1024, 4096, 16384];

fn benchmark_blake2s_one_shot(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("blake2s_{}", backend_name()));

    for size in SIZES.iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(format!("{} bytes", size), size, |b, &size| {
            let key = [0u8; KEY_LEN];
            let data = vec![0u8; size];
            let mut out = [0u8; OUT_LEN];

            b.iter(|| {
                blake2s(black_box(&mut out), black_box(&data), black_box(&key))
                    .expect("blake2s failed");
            });
        });
    }
    group.finish();
}

fn benchmark_blake2s_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("blake2s_streaming_{}", backend_name()));

    for size in SIZES.iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(format!("{} bytes", size), size, |b, &size| {
            let data = vec![0u8; size];
            let mut out = [0u8; OUT_LEN];

            b.iter(|| {
                let mut state = Blake2sState::new(OUT_LEN).expect("new failed");
                // Uneven chunks cross block boundaries
                for chunk in data.chunks(100) {
                    state.update(black_box(chunk)).expect("update failed");
                }
                state.finalize(black_box(&mut out)).expect("finalize failed");
            });
        });
    }
    group.finish();
}

fn benchmark_blake2s_hmac(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("blake2s_hmac_{}", backend_name()));

    for size in SIZES.iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(format!("{} bytes", size), size, |b, &size| {
            let key = [0x42u8; KEY_LEN];
            let data = vec![0u8; size];
            let mut out = [0u8; OUT_LEN];

            b.iter(|| {
                blake2s_hmac(black_box(&mut out), black_box(&data), black_box(&key))
                    .expect("hmac failed");
            });
        });
    }
    group.finish();
}

fn benchmark_blake2s_hkdf(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("blake2s_hkdf_{}", backend_name()));

    group.bench_function("3 outputs", |b| {
        let chaining_key = [0x11u8; OUT_LEN];
        let input = [0x22u8; 32];
        let mut out1 = [0u8; OUT_LEN];
        let mut out2 = [0u8; OUT_LEN];
        let mut out3 = [0u8; OUT_LEN];

        b.iter(|| {
            blake2s_hkdf(
                black_box(&mut out1),
                Some(black_box(&mut out2)),
                Some(black_box(&mut out3)),
                black_box(&input),
                black_box(&chaining_key),
            )
            .expect("hkdf failed");
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_blake2s_one_shot,
    benchmark_blake2s_streaming,
    benchmark_blake2s_hmac,
    benchmark_blake2s_hkdf
);
criterion_main!(benches);
